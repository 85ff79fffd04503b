//! Search index service implementation.
//!
//! This module provides the main service for interacting with the search index.
//! Application code uses it to index, de-index, search and submit feedback.
//! Each operation validates its input, builds one provider request and makes a
//! single provider call.

use aws_sdk_kendra::operation::query::QueryOutput;
use document_search_shared::{DocumentReference, FeedbackRequest, SearchRequest};
use tracing::{debug, info, instrument, warn};

use crate::config::{FeedbackMode, SearchIndexServiceConfig};
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{
    DeindexDocumentRequest, FeedbackSubmission, IndexDocumentRequest, IndexTarget, QueryRequest,
};
use crate::utils::require_field;

/// The main service for interacting with the search index.
///
/// This is the high-level API that application code should use. It turns
/// caller input into provider requests and delegates to a `SearchIndexProvider`
/// for the remote call.
///
/// # Example
///
/// ```no_run
/// use document_search_repository::kendra::{KendraClientConfig, KendraProvider};
/// use document_search_repository::{IndexTarget, SearchIndexService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = KendraProvider::new(KendraClientConfig::new("us-east-1")).await?;
/// let service = SearchIndexService::new(Box::new(provider));
///
/// let target = IndexTarget::new("us-east-1", "idx1");
/// let response = service
///     .search(&target, r#"{"query": "cancer", "pageNumber": 1, "pageSize": 10}"#)
///     .await?;
/// println!("{:?}", response.total_number_of_results());
/// # Ok(())
/// # }
/// ```
pub struct SearchIndexService {
    provider: Box<dyn SearchIndexProvider>,
    config: SearchIndexServiceConfig,
}

impl SearchIndexService {
    /// Create a new SearchIndexService with default configuration.
    ///
    /// The default configuration submits feedback on a best-effort basis.
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: SearchIndexServiceConfig::default(),
        }
    }

    /// Create a new SearchIndexService with custom configuration.
    pub fn with_config(
        provider: Box<dyn SearchIndexProvider>,
        config: SearchIndexServiceConfig,
    ) -> Self {
        Self { provider, config }
    }

    fn validate_target(target: &IndexTarget) -> Result<(), SearchIndexError> {
        require_field("region", &target.region)?;
        require_field("index_id", &target.index_id)
    }

    /// Submit a stored PDF document for ingestion.
    ///
    /// The document is readable by the `everybody` group. Nothing is returned on
    /// success; remote failures are propagated without retry.
    ///
    /// # Arguments
    ///
    /// * `target` - Region and index id
    /// * `role_arn` - Role the index assumes to read the S3 bucket
    /// * `document` - Document id and S3 location
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was submitted
    /// * `Err(SearchIndexError::ValidationError)` - If a required field is empty
    /// * `Err(SearchIndexError)` - If the remote call fails
    #[instrument(
        skip(self, role_arn, document),
        fields(region = %target.region, index_id = %target.index_id, document_id = %document.document_id)
    )]
    pub async fn index(
        &self,
        target: &IndexTarget,
        role_arn: &str,
        document: DocumentReference,
    ) -> Result<(), SearchIndexError> {
        Self::validate_target(target)?;
        require_field("role_arn", role_arn)?;
        require_field("document_id", &document.document_id)?;
        require_field("bucket", document.bucket())?;
        require_field("key", document.key())?;

        let request = IndexDocumentRequest::pdf_for_everybody(role_arn, document);
        self.provider.index_document(target, &request).await?;

        info!("Document submitted for indexing");
        Ok(())
    }

    /// Remove a single document from the index.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the removal was submitted
    /// * `Err(SearchIndexError::ValidationError)` - If the document id is empty
    /// * `Err(SearchIndexError)` - If the remote call fails
    #[instrument(
        skip(self),
        fields(region = %target.region, index_id = %target.index_id)
    )]
    pub async fn deindex(
        &self,
        target: &IndexTarget,
        document_id: &str,
    ) -> Result<(), SearchIndexError> {
        Self::validate_target(target)?;
        require_field("document_id", document_id)?;

        let request = DeindexDocumentRequest::single(document_id);
        self.provider.delete_documents(target, &request).await?;

        info!("Document submitted for removal");
        Ok(())
    }

    /// Search the index using a JSON request body.
    ///
    /// The body has the shape `{query, tag?, pageNumber, pageSize}`. A non-null
    /// `tag` restricts results to that group; pagination passes through as given.
    ///
    /// # Returns
    ///
    /// * `Ok(QueryOutput)` - The service's response, unmodified
    /// * `Err(SearchIndexError::ParseError)` - If the body is malformed
    /// * `Err(SearchIndexError)` - If the remote call fails
    pub async fn search(
        &self,
        target: &IndexTarget,
        body: &str,
    ) -> Result<QueryOutput, SearchIndexError> {
        let request = SearchRequest::from_json(body)?;
        self.search_request(target, request).await
    }

    /// Search the index using an already parsed request.
    #[instrument(
        skip(self, request),
        fields(region = %target.region, index_id = %target.index_id, tag = ?request.tag)
    )]
    pub async fn search_request(
        &self,
        target: &IndexTarget,
        request: SearchRequest,
    ) -> Result<QueryOutput, SearchIndexError> {
        Self::validate_target(target)?;

        let query = QueryRequest::from(request);
        let response = self.provider.query(target, &query).await?;

        debug!(
            query_id = ?response.query_id(),
            total = ?response.total_number_of_results(),
            "Query completed"
        );
        Ok(response)
    }

    /// Submit relevance feedback using a JSON request body.
    ///
    /// The body has the shape `{queryId, resultId, relevance}`. Only a literal
    /// `false` counts as not relevant.
    ///
    /// Parse and validation errors are always returned. Remote failures are
    /// logged and dropped in `FeedbackMode::BestEffort`, and returned in
    /// `FeedbackMode::Strict`.
    pub async fn feedback(&self, target: &IndexTarget, body: &str) -> Result<(), SearchIndexError> {
        let request = FeedbackRequest::from_json(body)?;
        self.feedback_request(target, request).await
    }

    /// Submit relevance feedback using an already parsed request.
    #[instrument(
        skip(self, request),
        fields(region = %target.region, index_id = %target.index_id, query_id = %request.query_id)
    )]
    pub async fn feedback_request(
        &self,
        target: &IndexTarget,
        request: FeedbackRequest,
    ) -> Result<(), SearchIndexError> {
        Self::validate_target(target)?;
        require_field("query_id", &request.query_id)?;
        require_field("result_id", &request.result_id)?;

        let submission = FeedbackSubmission::from(request);
        match self.provider.submit_feedback(target, &submission).await {
            Ok(()) => {
                debug!(
                    result_id = %submission.result_id,
                    relevance = submission.relevance.as_str(),
                    "Feedback submitted"
                );
                Ok(())
            }
            Err(e) => match self.config.feedback_mode {
                FeedbackMode::BestEffort => {
                    warn!(
                        result_id = %submission.result_id,
                        error = %e,
                        "Failed to submit feedback, ignoring"
                    );
                    Ok(())
                }
                FeedbackMode::Strict => Err(e),
            },
        }
    }
}

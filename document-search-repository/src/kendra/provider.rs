//! Kendra provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the AWS SDK for Kendra.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_kendra::config::Region;
use aws_sdk_kendra::operation::query::QueryOutput;
use aws_sdk_kendra::Client;
use tracing::{debug, error, info};

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::kendra::client_config::KendraClientConfig;
use crate::kendra::{convert, error_mapping};
use crate::types::{
    DeindexDocumentRequest, FeedbackSubmission, IndexDocumentRequest, IndexTarget, QueryRequest,
};

/// Kendra provider implementation.
///
/// Holds the shared AWS configuration (credentials, retry and timeout settings)
/// and builds a fresh client for the target region on every call. Clients are
/// not pooled; each one makes a single request and is dropped.
///
/// # Example
///
/// ```ignore
/// use document_search_repository::kendra::{KendraClientConfig, KendraProvider};
/// use document_search_repository::types::{DeindexDocumentRequest, IndexTarget};
///
/// let provider = KendraProvider::new(KendraClientConfig::new("us-east-1")).await?;
/// let target = IndexTarget::new("us-east-1", "idx1");
/// provider
///     .delete_documents(&target, &DeindexDocumentRequest::single("doc-1"))
///     .await?;
/// ```
pub struct KendraProvider {
    sdk_config: SdkConfig,
}

impl KendraProvider {
    /// Create a provider by resolving the shared AWS configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(KendraProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the configuration is invalid
    pub async fn new(config: KendraClientConfig) -> Result<Self, SearchIndexError> {
        let sdk_config = config.load_sdk_config().await?;

        info!(
            region = %config.region,
            profile = ?config.profile,
            endpoint_url = ?config.endpoint_url,
            "Created Kendra provider"
        );

        Ok(Self::from_sdk_config(sdk_config))
    }

    /// Create a provider from an already resolved AWS configuration.
    pub fn from_sdk_config(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    /// Build a client for the given region from the shared configuration.
    pub fn client_for(&self, region: &str) -> Client {
        let config = aws_sdk_kendra::config::Builder::from(&self.sdk_config)
            .region(Region::new(region.to_string()))
            .build();
        Client::from_conf(config)
    }
}

#[async_trait]
impl SearchIndexProvider for KendraProvider {
    async fn index_document(
        &self,
        target: &IndexTarget,
        request: &IndexDocumentRequest,
    ) -> Result<(), SearchIndexError> {
        let document = convert::to_kendra_document(request)?;

        let output = self
            .client_for(&target.region)
            .batch_put_document()
            .index_id(&target.index_id)
            .role_arn(&request.role_arn)
            .documents(document)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "BatchPutDocument request failed");
                error_mapping::from_sdk_error("BatchPutDocument", e, SearchIndexError::IndexError)
            })?;

        error_mapping::check_failed_documents(
            output.failed_documents(),
            &request.document.document_id,
            SearchIndexError::IndexError,
        )?;

        debug!(document_id = %request.document.document_id, "Document submitted");
        Ok(())
    }

    async fn delete_documents(
        &self,
        target: &IndexTarget,
        request: &DeindexDocumentRequest,
    ) -> Result<(), SearchIndexError> {
        let output = self
            .client_for(&target.region)
            .batch_delete_document()
            .index_id(&target.index_id)
            .set_document_id_list(Some(request.document_ids.clone()))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "BatchDeleteDocument request failed");
                error_mapping::from_sdk_error(
                    "BatchDeleteDocument",
                    e,
                    SearchIndexError::DeleteError,
                )
            })?;

        let default_id = request.document_ids.first().map(String::as_str).unwrap_or_default();
        error_mapping::check_failed_documents(
            output.failed_documents(),
            default_id,
            SearchIndexError::DeleteError,
        )?;

        debug!(document_ids = ?request.document_ids, "Document removal submitted");
        Ok(())
    }

    async fn query(
        &self,
        target: &IndexTarget,
        request: &QueryRequest,
    ) -> Result<QueryOutput, SearchIndexError> {
        let attribute_filter = request
            .filter
            .as_ref()
            .map(convert::to_attribute_filter)
            .transpose()?;

        self.client_for(&target.region)
            .query()
            .index_id(&target.index_id)
            .query_text(&request.query_text)
            .set_attribute_filter(attribute_filter)
            .page_number(request.page_number)
            .page_size(request.page_size)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Query request failed");
                error_mapping::from_sdk_error("Query", e, SearchIndexError::QueryError)
            })
    }

    async fn submit_feedback(
        &self,
        target: &IndexTarget,
        submission: &FeedbackSubmission,
    ) -> Result<(), SearchIndexError> {
        let item = convert::to_relevance_feedback(submission)?;

        self.client_for(&target.region)
            .submit_feedback()
            .index_id(&target.index_id)
            .query_id(&submission.query_id)
            .relevance_feedback_items(item)
            .send()
            .await
            .map_err(|e| {
                error_mapping::from_sdk_error("SubmitFeedback", e, SearchIndexError::FeedbackError)
            })?;

        Ok(())
    }
}

//! Search index provider trait definition.
//!
//! This module defines the abstract interface for the four remote index calls.

use async_trait::async_trait;
use aws_sdk_kendra::operation::query::QueryOutput;

use crate::errors::SearchIndexError;
use crate::types::{
    DeindexDocumentRequest, FeedbackSubmission, IndexDocumentRequest, IndexTarget, QueryRequest,
};

/// Abstracts the managed search index.
///
/// Implementations are injected into `SearchIndexService`, which makes it possible
/// to test the service against a mock provider. Each method is a single remote
/// call: no retries, batching or caching happen at this layer.
///
/// Query responses are the service's own `QueryOutput` and are returned to the
/// caller unmodified.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Submit one document for ingestion.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the service accepted the document
    /// * `Err(SearchIndexError)` - If the call failed or the document was rejected
    async fn index_document(
        &self,
        target: &IndexTarget,
        request: &IndexDocumentRequest,
    ) -> Result<(), SearchIndexError>;

    /// Remove the listed documents from the index.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the removal was accepted
    /// * `Err(SearchIndexError)` - If the call failed or a document was rejected
    async fn delete_documents(
        &self,
        target: &IndexTarget,
        request: &DeindexDocumentRequest,
    ) -> Result<(), SearchIndexError>;

    /// Run a query and return the service's response as-is.
    async fn query(
        &self,
        target: &IndexTarget,
        request: &QueryRequest,
    ) -> Result<QueryOutput, SearchIndexError>;

    /// Submit a relevance judgment for one result of an earlier query.
    async fn submit_feedback(
        &self,
        target: &IndexTarget,
        submission: &FeedbackSubmission,
    ) -> Result<(), SearchIndexError>;
}

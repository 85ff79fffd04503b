//! Search index error types.
//!
//! This module defines the unified error type for all search index operations,
//! covering local validation and parsing as well as failures reported by the
//! managed index service.

use thiserror::Error;

/// Unified errors from search index operations.
///
/// Used by the `SearchIndexProvider` trait and `SearchIndexService`. Remote
/// failures are classified by the service's error code; anything that does not
/// match a known code is reported against the operation that failed.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Validation error (e.g., missing required fields, malformed S3 URI).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The request body could not be parsed into a typed request.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service could not be reached or the call timed out.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The caller, or the role the index assumes, lacks permission.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Unknown index, document, query or result id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The service rejected the request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The service is throttling requests or a quota was exceeded.
    #[error("Throttled: {0}")]
    Throttled(String),

    /// Failed to index a document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Failed to remove a document from the index.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Query execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Feedback submission failed.
    #[error("Feedback error: {0}")]
    FeedbackError(String),

    /// Unknown error.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl SearchIndexError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an access denied error.
    pub fn access_denied(msg: impl Into<String>) -> Self {
        Self::AccessDenied(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a throttled error.
    pub fn throttled(msg: impl Into<String>) -> Self {
        Self::Throttled(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a feedback error.
    pub fn feedback(msg: impl Into<String>) -> Self {
        Self::FeedbackError(msg.into())
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    /// Returns true if the error was produced locally, before any remote call.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ParseError(_))
    }
}

impl From<serde_json::Error> for SearchIndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

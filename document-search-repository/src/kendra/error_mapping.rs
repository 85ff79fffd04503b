//! Mapping of Kendra SDK errors onto `SearchIndexError`.

use aws_sdk_kendra::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_kendra::types::{
    BatchDeleteDocumentResponseFailedDocument, BatchPutDocumentResponseFailedDocument, ErrorCode,
};
use std::error::Error;
use std::fmt::Debug;
use tracing::error;

use crate::errors::SearchIndexError;

/// Classify a failed SDK call.
///
/// Transport failures become connection errors and unreadable responses become
/// unknown errors. Service errors are classified by their error code; anything
/// unrecognised is built with `fallback`, which names the operation that failed.
pub fn from_sdk_error<E, R>(
    operation: &str,
    err: SdkError<E, R>,
    fallback: fn(String) -> SearchIndexError,
) -> SearchIndexError
where
    E: ProvideErrorMetadata + Error + Send + Sync + 'static,
    R: Debug,
{
    let message = format!("{} failed: {}", operation, DisplayErrorContext(&err));

    if matches!(
        err,
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)
    ) {
        return SearchIndexError::connection(message);
    }
    if matches!(err, SdkError::ResponseError(_)) {
        return SearchIndexError::unknown(message);
    }

    let code = err.as_service_error().and_then(|e| e.code());
    classify_code(code, message, fallback)
}

/// Map a service error code to an error variant.
pub fn classify_code(
    code: Option<&str>,
    message: String,
    fallback: fn(String) -> SearchIndexError,
) -> SearchIndexError {
    match code {
        Some("AccessDeniedException") => SearchIndexError::AccessDenied(message),
        Some("ResourceNotFoundException") => SearchIndexError::NotFound(message),
        Some("ValidationException") => SearchIndexError::InvalidRequest(message),
        Some("ThrottlingException") | Some("ServiceQuotaExceededException") => {
            SearchIndexError::Throttled(message)
        }
        _ => fallback(message),
    }
}

/// A document the service rejected inside an otherwise successful batch call.
pub trait FailedDocument {
    fn id(&self) -> Option<&str>;
    fn error_code(&self) -> Option<&ErrorCode>;
    fn error_message(&self) -> Option<&str>;
}

impl FailedDocument for BatchPutDocumentResponseFailedDocument {
    fn id(&self) -> Option<&str> {
        BatchPutDocumentResponseFailedDocument::id(self)
    }
    fn error_code(&self) -> Option<&ErrorCode> {
        BatchPutDocumentResponseFailedDocument::error_code(self)
    }
    fn error_message(&self) -> Option<&str> {
        BatchPutDocumentResponseFailedDocument::error_message(self)
    }
}

impl FailedDocument for BatchDeleteDocumentResponseFailedDocument {
    fn id(&self) -> Option<&str> {
        BatchDeleteDocumentResponseFailedDocument::id(self)
    }
    fn error_code(&self) -> Option<&ErrorCode> {
        BatchDeleteDocumentResponseFailedDocument::error_code(self)
    }
    fn error_message(&self) -> Option<&str> {
        BatchDeleteDocumentResponseFailedDocument::error_message(self)
    }
}

/// Turn the failed documents of a batch response into an error.
///
/// The batch calls report success even when the document itself is rejected,
/// so the first rejection is reported with `make`. `default_id` names the
/// document when the service leaves the id out.
pub fn check_failed_documents<D: FailedDocument>(
    failed: &[D],
    default_id: &str,
    make: fn(String) -> SearchIndexError,
) -> Result<(), SearchIndexError> {
    let Some(document) = failed.first() else {
        return Ok(());
    };

    let document_id = document.id().unwrap_or(default_id);
    let error_code = document.error_code().map(|c| c.as_str()).unwrap_or("Unknown");
    let message = document.error_message().unwrap_or_default();
    error!(
        document_id = %document_id,
        error_code = %error_code,
        message = %message,
        "Document rejected by index"
    );

    Err(make(format!(
        "Document {} rejected ({}): {}",
        document_id, error_code, message
    )))
}

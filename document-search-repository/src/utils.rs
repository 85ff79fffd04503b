//! Utility functions for the document search repository.

use crate::errors::SearchIndexError;

/// Check that a required string field is present and not blank.
///
/// # Example
///
/// ```
/// use document_search_repository::require_field;
///
/// assert!(require_field("document_id", "doc-1").is_ok());
/// assert!(require_field("document_id", "  ").is_err());
/// ```
pub fn require_field(field_name: &str, value: &str) -> Result<(), SearchIndexError> {
    if value.trim().is_empty() {
        return Err(SearchIndexError::validation(format!(
            "{} is required",
            field_name
        )));
    }
    Ok(())
}

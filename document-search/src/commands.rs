//! Command handlers.
//!
//! Each handler resolves its input, calls the matching `SearchIndexService`
//! operation and returns what should be printed, if anything.

use serde_json::Value;
use std::io::Read;
use tracing::debug;

use crate::cli::Command;
use crate::config::Settings;
use crate::output::render_query_output;
use crate::AdapterError;
use document_search_repository::SearchIndexService;
use document_search_shared::{DocumentReference, S3Location};

/// Run a command against the service.
///
/// `stdin` is only read when a `search` or `feedback` body is omitted.
///
/// # Returns
///
/// * `Ok(Some(value))` - The response to print (search)
/// * `Ok(None)` - The command has no output
/// * `Err(AdapterError)` - If the input, configuration or remote call fails
pub async fn run<R: Read>(
    service: &SearchIndexService,
    settings: &Settings,
    command: Command,
    stdin: R,
) -> Result<Option<Value>, AdapterError> {
    let target = settings.target()?;

    match command {
        Command::Index {
            document_id,
            s3_uri,
            bucket,
            key,
            role_arn,
        } => {
            let location = resolve_location(s3_uri, bucket, key)?;
            let role_arn = settings.role_arn(role_arn)?;
            service
                .index(&target, &role_arn, DocumentReference::at(document_id, location))
                .await?;
            Ok(None)
        }
        Command::Deindex { document_id } => {
            service.deindex(&target, &document_id).await?;
            Ok(None)
        }
        Command::Search { body } => {
            let body = read_body(body, stdin)?;
            let response = service.search(&target, &body).await?;
            Ok(Some(render_query_output(&response)))
        }
        Command::Feedback { body } => {
            let body = read_body(body, stdin)?;
            service.feedback(&target, &body).await?;
            Ok(None)
        }
    }
}

/// Resolve the document location from either a URI or a bucket and key.
pub fn resolve_location(
    s3_uri: Option<String>,
    bucket: Option<String>,
    key: Option<String>,
) -> Result<S3Location, AdapterError> {
    match (s3_uri, bucket, key) {
        (Some(uri), None, None) => S3Location::parse(&uri).map_err(AdapterError::input),
        (None, Some(bucket), Some(key)) => Ok(S3Location::new(bucket, key)),
        _ => Err(AdapterError::input(
            "either --s3-uri or both --bucket and --key are required",
        )),
    }
}

/// Use the body given on the command line, or read it from `reader`.
pub fn read_body<R: Read>(body: Option<String>, mut reader: R) -> Result<String, AdapterError> {
    match body {
        Some(body) => Ok(body),
        None => {
            let mut body = String::new();
            reader
                .read_to_string(&mut body)
                .map_err(|e| AdapterError::input(format!("Failed to read stdin: {}", e)))?;
            debug!(bytes = body.len(), "Read request body from stdin");
            Ok(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_resolve_location() {
        assert_eq!(
            resolve_location(Some("s3://docs/reports/a.pdf".to_string()), None, None).unwrap(),
            S3Location::new("docs", "reports/a.pdf")
        );
        assert_eq!(
            resolve_location(None, Some("docs".to_string()), Some("a.pdf".to_string())).unwrap(),
            S3Location::new("docs", "a.pdf")
        );
    }

    #[test]
    fn test_resolve_location_rejects_bad_input() {
        assert!(matches!(
            resolve_location(Some("https://docs/a.pdf".to_string()), None, None),
            Err(AdapterError::InputError(_))
        ));
        assert!(matches!(
            resolve_location(None, Some("docs".to_string()), None),
            Err(AdapterError::InputError(_))
        ));
        assert!(matches!(
            resolve_location(None, None, None),
            Err(AdapterError::InputError(_))
        ));
    }

    #[test]
    fn test_read_body_prefers_argument() {
        let body = read_body(Some("{}".to_string()), Cursor::new("ignored")).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_read_body_from_reader() {
        let body = read_body(None, Cursor::new(r#"{"query":"cancer"}"#)).unwrap();
        assert_eq!(body, r#"{"query":"cancer"}"#);
    }
}

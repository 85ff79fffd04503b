//! Integration tests for the command handlers.
//!
//! These tests run the real handlers and `SearchIndexService` against a mock
//! `SearchIndexProvider` that records every request it receives.

use std::io::{empty, Cursor};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use document_search::cli::Command;
use document_search::{commands, AdapterError, Settings};
use document_search_repository::{
    DeindexDocumentRequest, FeedbackMode, FeedbackSubmission, IndexDocumentRequest, IndexTarget,
    QueryOutput, QueryRequest, SearchIndexError, SearchIndexProvider, SearchIndexService,
    SearchIndexServiceConfig,
};
use document_search_shared::{
    AccessControlEntry, ContentType, QueryFilter, RelevanceValue, GROUP_MEMBERSHIP_ATTRIBUTE,
};

#[derive(Default, Clone)]
struct Recorded {
    indexed: Arc<Mutex<Vec<(IndexTarget, IndexDocumentRequest)>>>,
    deleted: Arc<Mutex<Vec<(IndexTarget, DeindexDocumentRequest)>>>,
    queries: Arc<Mutex<Vec<(IndexTarget, QueryRequest)>>>,
    feedback: Arc<Mutex<Vec<(IndexTarget, FeedbackSubmission)>>>,
}

struct MockProvider {
    recorded: Recorded,
    should_fail: bool,
}

#[async_trait]
impl SearchIndexProvider for MockProvider {
    async fn index_document(
        &self,
        target: &IndexTarget,
        request: &IndexDocumentRequest,
    ) -> Result<(), SearchIndexError> {
        if self.should_fail {
            return Err(SearchIndexError::AccessDenied("mock".to_string()));
        }
        self.recorded
            .indexed
            .lock()
            .unwrap()
            .push((target.clone(), request.clone()));
        Ok(())
    }

    async fn delete_documents(
        &self,
        target: &IndexTarget,
        request: &DeindexDocumentRequest,
    ) -> Result<(), SearchIndexError> {
        if self.should_fail {
            return Err(SearchIndexError::NotFound("mock".to_string()));
        }
        self.recorded
            .deleted
            .lock()
            .unwrap()
            .push((target.clone(), request.clone()));
        Ok(())
    }

    async fn query(
        &self,
        target: &IndexTarget,
        request: &QueryRequest,
    ) -> Result<QueryOutput, SearchIndexError> {
        if self.should_fail {
            return Err(SearchIndexError::InvalidRequest("mock".to_string()));
        }
        self.recorded
            .queries
            .lock()
            .unwrap()
            .push((target.clone(), request.clone()));
        Ok(QueryOutput::builder()
            .query_id("q1")
            .total_number_of_results(0)
            .build())
    }

    async fn submit_feedback(
        &self,
        target: &IndexTarget,
        submission: &FeedbackSubmission,
    ) -> Result<(), SearchIndexError> {
        if self.should_fail {
            return Err(SearchIndexError::Throttled("mock".to_string()));
        }
        self.recorded
            .feedback
            .lock()
            .unwrap()
            .push((target.clone(), submission.clone()));
        Ok(())
    }
}

fn setup(should_fail: bool, feedback_mode: FeedbackMode) -> (SearchIndexService, Recorded) {
    let recorded = Recorded::default();
    let provider = MockProvider {
        recorded: recorded.clone(),
        should_fail,
    };
    let service = SearchIndexService::with_config(
        Box::new(provider),
        SearchIndexServiceConfig::with_feedback_mode(feedback_mode),
    );
    (service, recorded)
}

fn settings() -> Settings {
    Settings {
        index_id: Some("idx1".to_string()),
        role_arn: Some("arn:aws:iam::123:role/r".to_string()),
        ..Settings::default()
    }
}

fn target() -> IndexTarget {
    IndexTarget::new("us-east-1", "idx1")
}

#[tokio::test]
async fn test_index_with_bucket_and_key() {
    let (service, recorded) = setup(false, FeedbackMode::default());

    let command = Command::Index {
        document_id: "doc-1".to_string(),
        s3_uri: None,
        bucket: Some("docs".to_string()),
        key: Some("a.pdf".to_string()),
        role_arn: None,
    };
    let output = commands::run(&service, &settings(), command, empty())
        .await
        .unwrap();
    assert!(output.is_none());

    let indexed = recorded.indexed.lock().unwrap();
    assert_eq!(indexed.len(), 1);
    let (sent_target, request) = &indexed[0];
    assert_eq!(sent_target, &target());
    assert_eq!(request.role_arn, "arn:aws:iam::123:role/r");
    assert_eq!(request.document.document_id, "doc-1");
    assert_eq!(request.document.bucket(), "docs");
    assert_eq!(request.document.key(), "a.pdf");
    assert_eq!(request.access_control_list, vec![AccessControlEntry::everybody()]);
    assert_eq!(request.content_type, ContentType::Pdf);
}

#[tokio::test]
async fn test_index_with_uri_and_role_override() {
    let (service, recorded) = setup(false, FeedbackMode::default());

    let command = Command::Index {
        document_id: "doc-2".to_string(),
        s3_uri: Some("s3://docs/reports/b.pdf".to_string()),
        bucket: None,
        key: None,
        role_arn: Some("arn:aws:iam::123:role/other".to_string()),
    };
    commands::run(&service, &settings(), command, empty())
        .await
        .unwrap();

    let indexed = recorded.indexed.lock().unwrap();
    let (_, request) = &indexed[0];
    assert_eq!(request.role_arn, "arn:aws:iam::123:role/other");
    assert_eq!(request.document.key(), "reports/b.pdf");
}

#[tokio::test]
async fn test_index_without_role_is_config_error() {
    let (service, recorded) = setup(false, FeedbackMode::default());
    let settings = Settings {
        role_arn: None,
        ..settings()
    };

    let command = Command::Index {
        document_id: "doc-1".to_string(),
        s3_uri: Some("s3://docs/a.pdf".to_string()),
        bucket: None,
        key: None,
        role_arn: None,
    };
    let result = commands::run(&service, &settings, command, empty()).await;

    assert!(matches!(result, Err(AdapterError::ConfigError(_))));
    assert!(recorded.indexed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_index_id_is_config_error() {
    let (service, _) = setup(false, FeedbackMode::default());
    let settings = Settings {
        index_id: None,
        ..settings()
    };

    let command = Command::Deindex {
        document_id: "doc-1".to_string(),
    };
    let result = commands::run(&service, &settings, command, empty()).await;
    assert!(matches!(result, Err(AdapterError::ConfigError(_))));
}

#[tokio::test]
async fn test_deindex_sends_single_id() {
    let (service, recorded) = setup(false, FeedbackMode::default());

    let command = Command::Deindex {
        document_id: "doc-1".to_string(),
    };
    commands::run(&service, &settings(), command, empty())
        .await
        .unwrap();

    let deleted = recorded.deleted.lock().unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].1.document_ids, vec!["doc-1".to_string()]);
}

#[tokio::test]
async fn test_search_with_tag_from_stdin() {
    let (service, recorded) = setup(false, FeedbackMode::default());

    let stdin = Cursor::new(r#"{"query":"cancer","tag":"scientist","pageNumber":1,"pageSize":50}"#);
    let output = commands::run(&service, &settings(), Command::Search { body: None }, stdin)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(output["QueryId"], "q1");
    assert_eq!(output["TotalNumberOfResults"], 0);

    let queries = recorded.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    let (_, query) = &queries[0];
    assert_eq!(query.query_text, "cancer");
    assert_eq!(query.page_number, 1);
    assert_eq!(query.page_size, 50);
    assert_eq!(
        query.filter,
        Some(QueryFilter::OrAll(vec![QueryFilter::EqualsTo {
            key: GROUP_MEMBERSHIP_ATTRIBUTE.to_string(),
            values: vec!["scientist".to_string()],
        }]))
    );
}

#[tokio::test]
async fn test_search_without_tag_is_unfiltered() {
    let (service, recorded) = setup(false, FeedbackMode::default());

    let body = r#"{"query":"cancer","pageNumber":2,"pageSize":10}"#.to_string();
    commands::run(&service, &settings(), Command::Search { body: Some(body) }, empty())
        .await
        .unwrap();

    let queries = recorded.queries.lock().unwrap();
    let (_, query) = &queries[0];
    assert_eq!(query.filter, None);
    assert_eq!(query.page_number, 2);
    assert_eq!(query.page_size, 10);
}

#[tokio::test]
async fn test_search_malformed_body() {
    let (service, recorded) = setup(false, FeedbackMode::default());

    let body = r#"{"query":"cancer"}"#.to_string();
    let result =
        commands::run(&service, &settings(), Command::Search { body: Some(body) }, empty()).await;

    assert!(matches!(
        result,
        Err(AdapterError::SearchIndex(SearchIndexError::ParseError(_)))
    ));
    assert!(recorded.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_failure_propagates() {
    let (service, _) = setup(true, FeedbackMode::default());

    let body = r#"{"query":"cancer","pageNumber":1,"pageSize":500}"#.to_string();
    let result =
        commands::run(&service, &settings(), Command::Search { body: Some(body) }, empty()).await;

    assert!(matches!(
        result,
        Err(AdapterError::SearchIndex(SearchIndexError::InvalidRequest(_)))
    ));
}

#[tokio::test]
async fn test_feedback_not_relevant() {
    let (service, recorded) = setup(false, FeedbackMode::default());

    let body = r#"{"queryId":"q1","resultId":"r1","relevance":false}"#.to_string();
    let output = commands::run(
        &service,
        &settings(),
        Command::Feedback { body: Some(body) },
        empty(),
    )
    .await
    .unwrap();
    assert!(output.is_none());

    let feedback = recorded.feedback.lock().unwrap();
    assert_eq!(feedback.len(), 1);
    let (_, submission) = &feedback[0];
    assert_eq!(submission.query_id, "q1");
    assert_eq!(submission.result_id, "r1");
    assert_eq!(submission.relevance, RelevanceValue::NotRelevant);
}

#[tokio::test]
async fn test_feedback_failure_by_mode() {
    let body = r#"{"queryId":"q1","resultId":"r1","relevance":true}"#;

    let (service, _) = setup(true, FeedbackMode::BestEffort);
    let result = commands::run(
        &service,
        &settings(),
        Command::Feedback { body: None },
        Cursor::new(body),
    )
    .await;
    assert!(result.is_ok());

    let (service, _) = setup(true, FeedbackMode::Strict);
    let result = commands::run(
        &service,
        &settings(),
        Command::Feedback { body: None },
        Cursor::new(body),
    )
    .await;
    assert!(matches!(
        result,
        Err(AdapterError::SearchIndex(SearchIndexError::Throttled(_)))
    ));
}

#[tokio::test]
async fn test_remote_failures_propagate() {
    let (service, _) = setup(true, FeedbackMode::default());

    let command = Command::Index {
        document_id: "doc-1".to_string(),
        s3_uri: Some("s3://docs/a.pdf".to_string()),
        bucket: None,
        key: None,
        role_arn: None,
    };
    let result = commands::run(&service, &settings(), command, empty()).await;
    assert!(matches!(
        result,
        Err(AdapterError::SearchIndex(SearchIndexError::AccessDenied(_)))
    ));

    let command = Command::Deindex {
        document_id: "doc-1".to_string(),
    };
    let result = commands::run(&service, &settings(), command, empty()).await;
    assert!(matches!(
        result,
        Err(AdapterError::SearchIndex(SearchIndexError::NotFound(_)))
    ));
}

//! Request types passed from the service to a search index provider.
//!
//! These are the fully resolved requests: every field the remote call needs is
//! present, and the fixed parts of the index contract (access control list,
//! content type) have already been filled in.

use document_search_shared::{
    AccessControlEntry, ContentType, DocumentReference, FeedbackRequest, QueryFilter,
    RelevanceValue, SearchRequest,
};

/// The index an operation runs against.
///
/// Region and index id are passed explicitly with every operation; nothing is
/// read from ambient configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTarget {
    /// AWS region hosting the index.
    pub region: String,
    /// Identifier of the index.
    pub index_id: String,
}

impl IndexTarget {
    pub fn new(region: impl Into<String>, index_id: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            index_id: index_id.into(),
        }
    }
}

/// Request to ingest a single document into the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocumentRequest {
    /// Role the index assumes to read the document from S3.
    pub role_arn: String,
    /// The document to ingest.
    pub document: DocumentReference,
    /// Access control list attached to the document.
    pub access_control_list: Vec<AccessControlEntry>,
    /// Content type of the document.
    pub content_type: ContentType,
}

impl IndexDocumentRequest {
    /// Build an ingestion request for a PDF readable by everybody.
    pub fn pdf_for_everybody(role_arn: impl Into<String>, document: DocumentReference) -> Self {
        Self {
            role_arn: role_arn.into(),
            document,
            access_control_list: vec![AccessControlEntry::everybody()],
            content_type: ContentType::Pdf,
        }
    }
}

/// Request to remove documents from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeindexDocumentRequest {
    /// Ids of the documents to remove. The service always sends exactly one.
    pub document_ids: Vec<String>,
}

impl DeindexDocumentRequest {
    pub fn single(document_id: impl Into<String>) -> Self {
        Self {
            document_ids: vec![document_id.into()],
        }
    }
}

/// A query ready to be sent to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub query_text: String,
    pub filter: Option<QueryFilter>,
    pub page_number: i32,
    pub page_size: i32,
}

impl From<SearchRequest> for QueryRequest {
    fn from(request: SearchRequest) -> Self {
        let filter = request.filter();
        Self {
            query_text: request.query,
            filter,
            page_number: request.page_number,
            page_size: request.page_size,
        }
    }
}

/// A single relevance judgment for a result of a previous query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub query_id: String,
    pub result_id: String,
    pub relevance: RelevanceValue,
}

impl From<FeedbackRequest> for FeedbackSubmission {
    fn from(request: FeedbackRequest) -> Self {
        Self {
            query_id: request.query_id,
            result_id: request.result_id,
            relevance: request.relevance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_search_shared::{AccessType, PrincipalType};

    #[test]
    fn test_pdf_for_everybody() {
        let request = IndexDocumentRequest::pdf_for_everybody(
            "arn:aws:iam::123:role/r",
            DocumentReference::new("doc-1", "docs", "a.pdf"),
        );

        assert_eq!(request.role_arn, "arn:aws:iam::123:role/r");
        assert_eq!(request.content_type, ContentType::Pdf);
        assert_eq!(request.access_control_list.len(), 1);

        let entry = &request.access_control_list[0];
        assert_eq!(entry.name, "everybody");
        assert_eq!(entry.principal_type, PrincipalType::Group);
        assert_eq!(entry.access, AccessType::Allow);
    }

    #[test]
    fn test_query_request_from_search_request() {
        let query: QueryRequest = SearchRequest::new("cancer", 2, 10).into();

        assert_eq!(query.query_text, "cancer");
        assert_eq!(query.filter, None);
        assert_eq!(query.page_number, 2);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn test_query_request_keeps_tag_filter() {
        let query: QueryRequest = SearchRequest::new("cancer", 1, 50).with_tag("scientist").into();
        assert_eq!(
            query.filter,
            Some(QueryFilter::or_all(vec![QueryFilter::group_membership("scientist")]))
        );
    }
}

//! Search request types for the document search adapter.
//!
//! This module defines the JSON body accepted by the search operation and the
//! attribute filter derived from it.

use serde::{Deserialize, Serialize};

/// Document attribute holding the groups a result belongs to.
pub const GROUP_MEMBERSHIP_ATTRIBUTE: &str = "_group_ids";

/// A search request as posted by a caller.
///
/// ```json
/// { "query": "my keywords", "tag": "scientist", "pageNumber": 1, "pageSize": 100 }
/// ```
///
/// `tag` is optional and may be `null`. Pagination is done by asking for the
/// page needed in each request; the index returns at most 100 results per page.
/// Neither page value is validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Natural language query text.
    pub query: String,

    /// Membership tag restricting results to one group
    /// (e.g. `healthprovider`, `scientist`, `generalpublic`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// The page of results to return.
    pub page_number: i32,

    /// Number of results per page.
    pub page_size: i32,
}

impl SearchRequest {
    /// Create an unfiltered search request.
    pub fn new(query: impl Into<String>, page_number: i32, page_size: i32) -> Self {
        Self {
            query: query.into(),
            tag: None,
            page_number,
            page_size,
        }
    }

    /// Restrict the request to results tagged with `tag`.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Parse a search request from a JSON body.
    ///
    /// Malformed JSON, a missing `query`, `pageNumber` or `pageSize`, or a value
    /// of the wrong type produce an error describing the offending field.
    ///
    /// # Example
    ///
    /// ```
    /// use document_search_shared::SearchRequest;
    ///
    /// let request = SearchRequest::from_json(
    ///     r#"{"query": "cancer", "tag": null, "pageNumber": 2, "pageSize": 10}"#,
    /// ).unwrap();
    /// assert_eq!(request.tag, None);
    /// assert_eq!(request.page_number, 2);
    /// ```
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// The attribute filter for this request, if it is restricted to a tag.
    pub fn filter(&self) -> Option<QueryFilter> {
        self.tag
            .as_ref()
            .map(|tag| QueryFilter::or_all(vec![QueryFilter::group_membership(tag)]))
    }
}

/// Attribute filter attached to a query.
///
/// Only the shapes the adapter produces are modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    /// Matches when any of the nested filters matches.
    OrAll(Vec<QueryFilter>),

    /// Matches when the string-list attribute `key` equals `values`.
    EqualsTo { key: String, values: Vec<String> },
}

impl QueryFilter {
    /// Combine filters with OR.
    pub fn or_all(filters: Vec<QueryFilter>) -> Self {
        Self::OrAll(filters)
    }

    /// Equality filter on the group membership attribute.
    pub fn group_membership(tag: impl Into<String>) -> Self {
        Self::EqualsTo {
            key: GROUP_MEMBERSHIP_ATTRIBUTE.to_string(),
            values: vec![tag.into()],
        }
    }
}

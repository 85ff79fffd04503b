//! Relevance feedback request types.
//!
//! Feedback tells the index whether a result from an earlier query was useful.
//! The index uses it as a hint in subsequent searches.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Relevance judgment submitted for a single result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelevanceValue {
    #[default]
    Relevant,
    NotRelevant,
}

impl RelevanceValue {
    /// Map a raw JSON `relevance` value to a judgment.
    ///
    /// Only a literal `false` is `NotRelevant`. Everything else, including
    /// `null`, numbers and strings, is `Relevant`.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(false)) => Self::NotRelevant,
            _ => Self::Relevant,
        }
    }

    /// The wire name of the judgment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevant => "RELEVANT",
            Self::NotRelevant => "NOT_RELEVANT",
        }
    }
}

fn deserialize_relevance<'de, D>(deserializer: D) -> Result<RelevanceValue, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(RelevanceValue::from_json(value.as_ref()))
}

/// A feedback request as posted by a caller.
///
/// ```json
/// { "queryId": "4c97e09a-...", "resultId": "4c97e09a-...-df5306d5-...", "relevance": true }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    /// Id of the query that produced the result.
    pub query_id: String,

    /// Id of the result being judged.
    pub result_id: String,

    /// The judgment; a missing field counts as relevant.
    #[serde(default, deserialize_with = "deserialize_relevance")]
    pub relevance: RelevanceValue,
}

impl FeedbackRequest {
    pub fn new(
        query_id: impl Into<String>,
        result_id: impl Into<String>,
        relevance: RelevanceValue,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            result_id: result_id.into(),
            relevance,
        }
    }

    /// Parse a feedback request from a JSON body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

//! This module defines the request types used across the document search adapter.
//! It re-exports the document, search and feedback types.

pub mod document;
pub mod feedback_request;
pub mod search_request;

pub use document::{DocumentReference, S3Location};
pub use feedback_request::{FeedbackRequest, RelevanceValue};
pub use search_request::{QueryFilter, SearchRequest};

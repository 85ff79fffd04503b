//! # Document Search Shared
//!
//! This crate defines the request types shared across the document search adapter.
//! It includes document references and access policies used at index time, and the
//! JSON request bodies accepted by the search and feedback operations.

pub mod types;

pub use types::document::{
    AccessControlEntry, AccessType, ContentType, DocumentReference, PrincipalType, S3Location,
    EVERYBODY_GROUP,
};
pub use types::feedback_request::{FeedbackRequest, RelevanceValue};
pub use types::search_request::{QueryFilter, SearchRequest, GROUP_MEMBERSHIP_ATTRIBUTE};

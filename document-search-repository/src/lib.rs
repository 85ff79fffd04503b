//! # Document Search Repository
//!
//! This crate provides the interface and implementation for talking to the
//! managed search index. It includes definitions for errors, the provider
//! interface, the service exposing the index, de-index, search and feedback
//! operations, and a concrete provider backed by AWS Kendra.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod kendra;
pub mod service;
pub mod types;
pub mod utils;

pub use aws_sdk_kendra::operation::query::QueryOutput;
pub use config::{FeedbackMode, SearchIndexServiceConfig};
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use kendra::{KendraClientConfig, KendraProvider};
pub use service::SearchIndexService;
pub use types::{
    DeindexDocumentRequest, FeedbackSubmission, IndexDocumentRequest, IndexTarget, QueryRequest,
};
pub use utils::require_field;

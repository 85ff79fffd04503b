//! AWS Kendra implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! backed by a managed Kendra index.

mod client_config;
pub mod convert;
pub mod error_mapping;
mod provider;

pub use client_config::{KendraClientConfig, DEFAULT_REGION};
pub use provider::KendraProvider;

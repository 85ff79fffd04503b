//! # Document Search
//!
//! Command-line adapter for a document search index hosted on AWS Kendra.
//!
//! ## Architecture
//!
//! The binary is a thin shell around `SearchIndexService`:
//!
//! 1. **Config**: Reads settings from the environment and wires the provider
//! 2. **CLI**: Parses one subcommand per operation
//! 3. **Commands**: Resolves input and calls the service
//! 4. **Output**: Renders query responses as JSON
//!
//! ## Modules
//!
//! - [`config`]: Settings and dependency initialization
//! - [`cli`]: Command-line definition
//! - [`commands`]: Command handlers
//! - [`output`]: JSON rendering of query responses

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;

pub use config::{Dependencies, Settings};

use document_search_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Unusable command input.
    #[error("Input error: {0}")]
    InputError(String),

    /// The response could not be written.
    #[error("Output error: {0}")]
    OutputError(String),

    /// Error from the search index.
    #[error("Search index error: {0}")]
    SearchIndex(#[from] SearchIndexError),
}

impl AdapterError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an input error.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::InputError(msg.into())
    }

    /// Create an output error.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::OutputError(msg.into())
    }

    /// Returns true if the caller's input or configuration is at fault and no
    /// remote call failed.
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::ConfigError(_) | Self::InputError(_) => true,
            Self::OutputError(_) => false,
            Self::SearchIndex(e) => e.is_local(),
        }
    }
}

//! Dependency initialization and wiring for the adapter.

use tracing::info;

use crate::config::Settings;
use crate::AdapterError;
use document_search_repository::{KendraProvider, SearchIndexService};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Settings the dependencies were built from.
    pub settings: Settings,
    /// The search index service backed by Kendra.
    pub service: SearchIndexService,
}

impl Dependencies {
    /// Initialize all dependencies from the given settings.
    ///
    /// Resolves the shared AWS configuration once. Nothing is sent to the
    /// service until a command runs.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AdapterError)` - If the client configuration is invalid
    pub async fn new(settings: Settings) -> Result<Self, AdapterError> {
        info!(
            region = %settings.region,
            index_id = ?settings.index_id,
            profile = ?settings.profile,
            endpoint_url = ?settings.endpoint_url,
            feedback_mode = %settings.feedback_mode,
            "Initializing dependencies"
        );

        let provider = KendraProvider::new(settings.client_config()).await?;
        let service = SearchIndexService::with_config(Box::new(provider), settings.service_config());

        Ok(Self { settings, service })
    }
}

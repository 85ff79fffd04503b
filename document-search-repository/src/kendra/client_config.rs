//! AWS client configuration for the Kendra provider.

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_kendra::config::Region;
use std::time::Duration;
use url::Url;

use crate::errors::SearchIndexError;

/// Default region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Settings used to resolve the shared AWS configuration.
///
/// Credentials are resolved once through the standard AWS provider chain
/// (optionally pinned to a named profile). Retry and timeout behaviour is left
/// to the SDK unless overridden here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KendraClientConfig {
    /// Region the shared configuration is resolved for.
    pub region: String,
    /// Named credentials profile.
    pub profile: Option<String>,
    /// Endpoint override, e.g. for a VPC endpoint or a local stub.
    pub endpoint_url: Option<String>,
    /// Maximum attempts per call, including the first one.
    pub max_attempts: Option<u32>,
    /// Upper bound for a whole operation, including retries.
    pub operation_timeout: Option<Duration>,
}

impl Default for KendraClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

impl KendraClientConfig {
    /// Create a configuration for the given region with SDK defaults otherwise.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: None,
            endpoint_url: None,
            max_attempts: None,
            operation_timeout: None,
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }

    /// Check the settings without touching the network.
    pub fn validate(&self) -> Result<(), SearchIndexError> {
        if self.region.trim().is_empty() {
            return Err(SearchIndexError::validation("region is required"));
        }
        if let Some(ref endpoint_url) = self.endpoint_url {
            Url::parse(endpoint_url).map_err(|e| {
                SearchIndexError::validation(format!(
                    "Invalid endpoint URL '{}': {}",
                    endpoint_url, e
                ))
            })?;
        }
        if self.max_attempts == Some(0) {
            return Err(SearchIndexError::validation(
                "max_attempts must be at least 1",
            ));
        }
        Ok(())
    }

    /// Resolve the shared AWS configuration.
    pub async fn load_sdk_config(&self) -> Result<SdkConfig, SearchIndexError> {
        self.validate()?;

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(self.region.clone()));

        if let Some(ref profile) = self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(ref endpoint_url) = self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        if let Some(max_attempts) = self.max_attempts {
            loader = loader.retry_config(RetryConfig::standard().with_max_attempts(max_attempts));
        }
        if let Some(timeout) = self.operation_timeout {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            );
        }

        Ok(loader.load().await)
    }
}

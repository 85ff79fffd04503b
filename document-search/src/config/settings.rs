//! Settings read from the environment.

use std::env;
use std::time::Duration;
use tracing::warn;

use crate::AdapterError;
use document_search_repository::kendra::DEFAULT_REGION;
use document_search_repository::{
    FeedbackMode, IndexTarget, KendraClientConfig, SearchIndexServiceConfig,
};

/// Runtime settings for the adapter.
///
/// Values come from the environment once at startup and can be overridden by
/// command-line flags. The library crates never read the environment
/// themselves; they receive `KendraClientConfig` and `SearchIndexServiceConfig`
/// built from these settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub region: String,
    pub index_id: Option<String>,
    pub role_arn: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
    pub max_attempts: Option<u32>,
    pub operation_timeout: Option<Duration>,
    pub feedback_mode: FeedbackMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            index_id: None,
            role_arn: None,
            profile: None,
            endpoint_url: None,
            max_attempts: None,
            operation_timeout: None,
            feedback_mode: FeedbackMode::default(),
        }
    }
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `KENDRA_REGION`: Region of the index, falling back to `AWS_REGION` (default: us-east-1)
    /// - `KENDRA_INDEX_ID`: Index id
    /// - `KENDRA_ROLE_ARN`: Role the index assumes to read documents from S3
    /// - `AWS_PROFILE`: Named credentials profile
    /// - `KENDRA_ENDPOINT_URL`: Endpoint override
    /// - `KENDRA_MAX_ATTEMPTS`: Maximum attempts per call
    /// - `KENDRA_OPERATION_TIMEOUT_SECS`: Timeout for a whole call in seconds
    /// - `FEEDBACK_MODE`: "best-effort" or "strict" (default: best-effort)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let region = get("KENDRA_REGION")
            .or_else(|| get("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let max_attempts = get("KENDRA_MAX_ATTEMPTS").and_then(|v| match v.parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!(value = %v, "Invalid KENDRA_MAX_ATTEMPTS, using SDK default");
                None
            }
        });

        let operation_timeout =
            get("KENDRA_OPERATION_TIMEOUT_SECS").and_then(|v| match v.parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    warn!(value = %v, "Invalid KENDRA_OPERATION_TIMEOUT_SECS, ignoring");
                    None
                }
            });

        let feedback_mode = match get("FEEDBACK_MODE") {
            Some(v) => v.parse::<FeedbackMode>().unwrap_or_else(|_| {
                warn!(value = %v, "Invalid FEEDBACK_MODE, defaulting to 'best-effort'");
                FeedbackMode::default()
            }),
            None => FeedbackMode::default(),
        };

        Self {
            region,
            index_id: get("KENDRA_INDEX_ID"),
            role_arn: get("KENDRA_ROLE_ARN"),
            profile: get("AWS_PROFILE"),
            endpoint_url: get("KENDRA_ENDPOINT_URL"),
            max_attempts,
            operation_timeout,
            feedback_mode,
        }
    }

    /// Apply command-line overrides for region and index id.
    pub fn with_overrides(mut self, region: Option<String>, index_id: Option<String>) -> Self {
        if let Some(region) = region {
            self.region = region;
        }
        if index_id.is_some() {
            self.index_id = index_id;
        }
        self
    }

    /// The index every command runs against.
    pub fn target(&self) -> Result<IndexTarget, AdapterError> {
        match self.index_id {
            Some(ref index_id) => Ok(IndexTarget::new(self.region.clone(), index_id.clone())),
            None => Err(AdapterError::config(
                "KENDRA_INDEX_ID is not set and no --index-id was given",
            )),
        }
    }

    /// The role to index with, preferring an explicit override.
    pub fn role_arn(&self, role_arn: Option<String>) -> Result<String, AdapterError> {
        role_arn.or_else(|| self.role_arn.clone()).ok_or_else(|| {
            AdapterError::config("KENDRA_ROLE_ARN is not set and no --role-arn was given")
        })
    }

    pub fn client_config(&self) -> KendraClientConfig {
        let mut config = KendraClientConfig::new(self.region.clone());
        if let Some(ref profile) = self.profile {
            config = config.with_profile(profile.clone());
        }
        if let Some(ref endpoint_url) = self.endpoint_url {
            config = config.with_endpoint_url(endpoint_url.clone());
        }
        if let Some(max_attempts) = self.max_attempts {
            config = config.with_max_attempts(max_attempts);
        }
        if let Some(timeout) = self.operation_timeout {
            config = config.with_operation_timeout(timeout);
        }
        config
    }

    pub fn service_config(&self) -> SearchIndexServiceConfig {
        SearchIndexServiceConfig::with_feedback_mode(self.feedback_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.feedback_mode, FeedbackMode::BestEffort);
    }

    #[test]
    fn test_reads_all_variables() {
        let settings = settings_from(&[
            ("KENDRA_REGION", "eu-west-1"),
            ("KENDRA_INDEX_ID", "idx1"),
            ("KENDRA_ROLE_ARN", "arn:aws:iam::123:role/r"),
            ("AWS_PROFILE", "search"),
            ("KENDRA_ENDPOINT_URL", "http://localhost:4566"),
            ("KENDRA_MAX_ATTEMPTS", "5"),
            ("KENDRA_OPERATION_TIMEOUT_SECS", "30"),
            ("FEEDBACK_MODE", "strict"),
        ]);

        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(settings.index_id.as_deref(), Some("idx1"));
        assert_eq!(settings.role_arn.as_deref(), Some("arn:aws:iam::123:role/r"));
        assert_eq!(settings.profile.as_deref(), Some("search"));
        assert_eq!(settings.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(settings.max_attempts, Some(5));
        assert_eq!(settings.operation_timeout, Some(Duration::from_secs(30)));
        assert_eq!(settings.feedback_mode, FeedbackMode::Strict);
    }

    #[test]
    fn test_region_falls_back_to_aws_region() {
        let settings = settings_from(&[("AWS_REGION", "ap-southeast-2")]);
        assert_eq!(settings.region, "ap-southeast-2");

        let settings = settings_from(&[("AWS_REGION", "ap-southeast-2"), ("KENDRA_REGION", "")]);
        assert_eq!(settings.region, "ap-southeast-2");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let settings = settings_from(&[
            ("KENDRA_MAX_ATTEMPTS", "many"),
            ("KENDRA_OPERATION_TIMEOUT_SECS", "-1"),
            ("FEEDBACK_MODE", "sometimes"),
        ]);
        assert_eq!(settings.max_attempts, None);
        assert_eq!(settings.operation_timeout, None);
        assert_eq!(settings.feedback_mode, FeedbackMode::BestEffort);
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[("KENDRA_INDEX_ID", "idx1")])
            .with_overrides(Some("eu-central-1".to_string()), None);
        assert_eq!(settings.region, "eu-central-1");
        assert_eq!(settings.index_id.as_deref(), Some("idx1"));

        let settings = settings.with_overrides(None, Some("idx2".to_string()));
        assert_eq!(settings.target().unwrap(), IndexTarget::new("eu-central-1", "idx2"));
    }

    #[test]
    fn test_missing_index_id_and_role() {
        let settings = Settings::default();
        assert!(matches!(settings.target(), Err(AdapterError::ConfigError(_))));
        assert!(matches!(settings.role_arn(None), Err(AdapterError::ConfigError(_))));
        assert_eq!(
            settings.role_arn(Some("arn:aws:iam::123:role/r".to_string())).unwrap(),
            "arn:aws:iam::123:role/r"
        );
    }

    #[test]
    fn test_client_config() {
        let settings = settings_from(&[
            ("KENDRA_REGION", "eu-west-1"),
            ("KENDRA_MAX_ATTEMPTS", "2"),
        ]);
        assert_eq!(
            settings.client_config(),
            KendraClientConfig::new("eu-west-1").with_max_attempts(2)
        );
    }
}

//! Configuration types for the SearchIndexService.

use std::fmt;
use std::str::FromStr;

/// How the service treats a failed feedback submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackMode {
    /// Log remote failures and report success to the caller.
    #[default]
    BestEffort,
    /// Propagate remote failures like every other operation.
    Strict,
}

impl FromStr for FeedbackMode {
    type Err = String;

    /// Accepts "best-effort" or "strict" (case-insensitive, `-` or `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "best-effort" | "besteffort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            other => Err(format!("Unknown feedback mode: {}", other)),
        }
    }
}

impl fmt::Display for FeedbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestEffort => write!(f, "best-effort"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Configuration for the SearchIndexService.
#[derive(Debug, Clone, Default)]
pub struct SearchIndexServiceConfig {
    /// Whether feedback failures are swallowed (the default) or propagated.
    pub feedback_mode: FeedbackMode,
}

impl SearchIndexServiceConfig {
    /// Create a config that propagates feedback failures.
    pub fn strict() -> Self {
        Self {
            feedback_mode: FeedbackMode::Strict,
        }
    }

    /// Create a config with the given feedback mode.
    pub fn with_feedback_mode(feedback_mode: FeedbackMode) -> Self {
        Self { feedback_mode }
    }
}

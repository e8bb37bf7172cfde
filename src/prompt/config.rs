use super::PromptError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_RETRY_NOTICE: &str = "Please try again.";

/// Settings that shape the retry loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Line printed after each rejected input
    pub retry_notice: String,
    /// Give up after this many attempts; `None` (or 0) retries forever
    pub max_attempts: Option<u32>,
    /// Return `InputClosed` on end of stream instead of waiting for more input
    pub fail_on_eof: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            retry_notice: DEFAULT_RETRY_NOTICE.to_string(),
            max_attempts: None,
            fail_on_eof: false,
        }
    }
}

impl PromptConfig {
    /// Load a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, PromptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PromptError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Attempt limit with the "0 means unlimited" rule applied
    pub fn attempt_limit(&self) -> Option<u32> {
        self.max_attempts.filter(|&limit| limit > 0)
    }
}

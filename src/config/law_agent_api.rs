//! Law Agent decision service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Law Agent service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LawAgentApiConfig {
    /// Base URL of the decision service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User type sent when the request does not name one
    #[serde(default = "default_user_type")]
    pub user_type: String,

    /// Region sent when the request does not name one
    #[serde(default = "default_region")]
    pub region: String,

    /// Actions offered to the classifier (comma-separated)
    #[serde(default = "default_candidate_actions")]
    pub candidate_actions: String,
}

impl LawAgentApiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get candidate actions as a vector
    pub fn candidate_actions_list(&self) -> Vec<String> {
        self.candidate_actions
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validate Law Agent service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.user_type.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LAW_AGENT_API__USER_TYPE"));
        }
        if self.region.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LAW_AGENT_API__REGION"));
        }
        if self.candidate_actions_list().is_empty() {
            return Err(ValidationError::MissingRequired(
                "LAW_AGENT_API__CANDIDATE_ACTIONS",
            ));
        }
        Ok(())
    }
}

impl Default for LawAgentApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_type: default_user_type(),
            region: default_region(),
            candidate_actions: default_candidate_actions(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_type() -> String {
    "citizen".to_string()
}

fn default_region() -> String {
    "india".to_string()
}

fn default_candidate_actions() -> String {
    "send_legal_notice,negotiate_settlement,file_eviction_case".to_string()
}

//! Generation service configuration from TOML (`[provider]` section)

use dslgen_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-small-latest";
pub const DEFAULT_API_KEY_ENV: &str = "MISTRAL_API_KEY";

/// Chat-completions provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Model name sent with every request.
    pub model: String,
    /// Environment variable holding the API key (default: "MISTRAL_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Sampling temperature, 0.0 to 2.0.
    pub temperature: f32,
    /// Transport timeout. No timeout when unset.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            max_tokens: 2000,
            temperature: 0.2,
            timeout_seconds: None,
        }
    }
}

impl FileProviderConfig {
    /// Inline `api_key` if set, otherwise the variable named by `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [("provider.endpoint", &self.endpoint), ("provider.model", &self.model)] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: value cannot be empty", field),
                ));
            }
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "provider.temperature".to_string(),
                },
                format!(
                    "provider.temperature: {} is outside 0.0..=2.0",
                    self.temperature
                ),
            ));
        }

        if self.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "provider.max_tokens".to_string(),
                },
                "provider.max_tokens cannot be 0",
            ));
        }

        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "provider.timeout_seconds".to_string(),
                },
                "provider.timeout_seconds is 0, every request will time out; leave it unset for no timeout",
            ));
        }

        if self.resolve_api_key().is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingApiKey {
                    env_var: self.api_key_env.clone(),
                },
                format!(
                    "No API key found: set {} or provider.api_key",
                    self.api_key_env
                ),
            ));
        }

        issues
    }
}

//! Language model configuration

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

/// OpenAI chat-completions configuration
///
/// The key is held as a plain string here and moved into a
/// `secrecy::Secret` when the provider is constructed.
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: String,

    /// Model used for sequence generation
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (override for proxies and compatible gateways)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Construct with an API key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: api_key.into(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }

    /// Get the configured timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.openai_api_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("HELIX__AI__OPENAI_API_KEY"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("HELIX__AI__MODEL"));
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidAiBaseUrl);
        }
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidAiTimeout);
        }
        Ok(())
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("openai_api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

//! Chat-completion API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default OpenAI-compatible API root.
fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

/// Default model identifier.
fn default_model() -> String {
    String::from("gpt-4o-mini")
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_json_mode() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// API key sent as a bearer token. Required for any generate action.
    #[serde(default)]
    pub api_key: String,

    /// API root; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature, `0.0..=2.0`.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Upper bound on generated tokens. Provider default when unset.
    #[serde(default)]
    pub max_tokens: Option<u32>,

    /// Ask the provider for a JSON object response (`response_format`).
    #[serde(default = "default_json_mode")]
    pub json_mode: bool,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: None,
            json_mode: default_json_mode(),
            timeout_secs: None,
        }
    }
}

impl LlmConfig {
    /// Check if the API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Require a usable API key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the key is empty.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "llm".to_string(),
            })
        }
    }

    /// Check field values that figment cannot constrain by type alone.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty base URL or model, or
    /// a temperature outside `0.0..=2.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "llm.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "llm.model".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature".to_string(),
                reason: format!("{} is outside 0.0..=2.0", self.temperature),
            });
        }
        Ok(())
    }

    /// Copy with the API key masked, safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let api_key = if self.is_configured() {
            let tail: String = self
                .api_key
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("****{tail}")
        } else {
            String::new()
        };
        Self {
            api_key,
            ..self.clone()
        }
    }
}

//! Generative-content provider (Gemini) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key for the Generative Language API.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier passed to `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    /// REST base URL, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional client-side request timeout. Unset leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is available.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Fail with [`ConfigError::NotConfigured`] unless an API key is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `api_key` is empty, or
    /// [`ConfigError::InvalidValue`] when `model` is blank.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "gemini".into(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "gemini.model".into(),
                reason: "model identifier must not be empty".into(),
            });
        }
        Ok(self)
    }
}

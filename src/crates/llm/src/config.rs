//! Configuration for the Gemini provider client.

use crate::error::{LlmError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Gemini API client.
///
/// Constructed once at process start and passed explicitly into the client;
/// there is no global provider instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for authentication.
    pub api_key: String,

    /// Base URL for the API.
    pub base_url: String,

    /// Model name/identifier.
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum number of output tokens per response.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: usize,

    /// HTTP request timeout duration.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create a new configuration with default generation parameters.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout: default_timeout(),
        }
    }

    /// Create configuration from an environment variable holding the API key.
    pub fn from_env(env_var: &str) -> Result<Self> {
        let api_key = std::env::var(env_var)
            .map_err(|_| LlmError::ApiKeyNotFound(format!("Environment variable: {}", env_var)))?;

        Ok(Self::new(api_key))
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of output tokens.
    pub fn with_max_output_tokens(mut self, max_output_tokens: usize) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> usize {
    1024
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

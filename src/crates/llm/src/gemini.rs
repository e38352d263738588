//! Google Gemini client implementation.
//!
//! Talks to the Gemini REST API (`generateContent`) and exposes the result
//! as plain text via the [`TextModel`] trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::{GeminiClient, GeminiConfig, TextModel};
//!
//! let config = GeminiConfig::from_env("GEMINI_API_KEY")?;
//! let client = GeminiClient::new(config);
//!
//! let text = client.complete("Describe a balanced diet.").await?;
//! ```

use crate::config::GeminiConfig;
use crate::error::{LlmError, Result};
use crate::model::TextModel;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// The four harm categories Gemini supports, each blocked at medium and above.
const SAFETY_SETTINGS: [(&str, &str); 4] = [
    ("HARM_CATEGORY_HARASSMENT", "BLOCK_MEDIUM_AND_ABOVE"),
    ("HARM_CATEGORY_HATE_SPEECH", "BLOCK_MEDIUM_AND_ABOVE"),
    ("HARM_CATEGORY_SEXUALLY_EXPLICIT", "BLOCK_MEDIUM_AND_ABOVE"),
    ("HARM_CATEGORY_DANGEROUS_CONTENT", "BLOCK_MEDIUM_AND_ABOVE"),
];

/// Google Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn build_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
            safety_settings: SAFETY_SETTINGS
                .iter()
                .map(|(category, threshold)| GeminiSafetySetting {
                    category: category.to_string(),
                    threshold: threshold.to_string(),
                })
                .collect(),
        }
    }

    /// Join the first candidate's parts into a single text blob.
    fn extract_text(gemini_resp: GeminiResponse) -> Result<String> {
        let candidate = gemini_resp
            .candidates
            .first()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        Ok(candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(""))
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // Gemini API URL format: base_url/models/{model}:generateContent
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let req_body = self.build_request(prompt);

        tracing::debug!(model = %self.config.model, "Sending generateContent request");

        // Gemini uses API key as query parameter
        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.config.api_key)])
            .json(&req_body)
            .send()
            .await
            .map_err(LlmError::HttpError)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(if status.as_u16() == 401 || status.as_u16() == 403 {
                LlmError::AuthenticationError(error_text)
            } else if status.as_u16() == 429 {
                LlmError::RateLimitExceeded(error_text)
            } else {
                LlmError::ProviderError(format!("Gemini API error {}: {}", status, error_text))
            });
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Self::extract_text(gemini_resp)
    }
}

// Gemini API types
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<GeminiSafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: usize,
}

#[derive(Debug, Serialize)]
struct GeminiSafetySetting {
    category: String,
    threshold: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = GeminiConfig::new("test-key");
        let _client = GeminiClient::new(config);
    }

    #[test]
    fn test_request_body_shape() {
        let config = GeminiConfig::new("test-key")
            .with_temperature(0.7)
            .with_max_output_tokens(1024);
        let client = GeminiClient::new(config);

        let body = client.build_request("hello");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
        assert_eq!(json["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(
            json["safetySettings"][3]["category"],
            "HARM_CATEGORY_DANGEROUS_CONTENT"
        );
        assert_eq!(json["safetySettings"][3]["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let resp: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hello "}, {"text": "world"}]
                }
            }]
        }))
        .unwrap();

        assert_eq!(GeminiClient::extract_text(resp).unwrap(), "Hello world");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let resp: GeminiResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();

        assert!(matches!(
            GeminiClient::extract_text(resp),
            Err(LlmError::InvalidResponse(_))
        ));
    }
}

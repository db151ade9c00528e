//! Google Gemini implementation of [`ModelBackend`].
//!
//! A reference implementation over the REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use jobtrack_extraction::GeminiBackend;
//!
//! let backend = GeminiBackend::from_env()?.with_model("gemini-1.5-pro");
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, BackendResult};
use crate::security::SecretString;
use crate::traits::{BackendStatus, GenerateOptions, ModelBackend};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// How long the availability probe may take before the backend is treated
/// as unreachable.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Gemini-based model backend.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiBackend {
    /// Create a new backend with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: SecretString::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> BackendResult<Self> {
        let api_key =
            std::env::var("GEMINI_API_KEY").map_err(|_| BackendError::MissingCredentials)?;
        Ok(Self::new(api_key))
    }

    /// Set the model (default: gemini-1.5-flash).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies or regional endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Serialize, Deserialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[async_trait]
impl ModelBackend for GeminiBackend {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> BackendResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose()
        );

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_tokens,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout
                } else {
                    BackendError::Http(Box::new(e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, message });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| BackendError::MalformedResponse("no candidates in response".to_string()))
    }

    async fn probe(&self) -> BackendStatus {
        let url = format!(
            "{}/models?pageSize=1&key={}",
            self.base_url,
            self.api_key.expose()
        );

        match self
            .client
            .get(&url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => BackendStatus::Available,
            Ok(response) => BackendStatus::Unavailable {
                reason: format!("models endpoint returned {}", response.status()),
            },
            Err(e) => BackendStatus::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let backend = GeminiBackend::new("test-key");
        assert_eq!(backend.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_builder_overrides() {
        let backend = GeminiBackend::new("test-key")
            .with_model("gemini-1.5-pro")
            .with_base_url("http://localhost:9999");
        assert_eq!(backend.model(), "gemini-1.5-pro");
        assert_eq!(backend.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                max_output_tokens: 256,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("generationConfig").is_some());
        assert!(json["generationConfig"].get("maxOutputTokens").is_some());
    }
}

//! Gemini Provider - Implementation of AIProvider for Google's Gemini API.
//!
//! Uses `models/{model}:generateContent` with structured JSON output when the
//! request carries a response schema.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(Some(api_key))
//!     .with_model("gemini-3-pro-preview")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! # Missing key
//!
//! A provider built without an API key still starts. Every call then fails
//! with `AuthenticationFailed` before any network traffic.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Default model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-pro-preview";

/// Default API host.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication. `None` disables every call.
    api_key: Option<Secret<String>>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl GeminiConfig {
    /// Creates a configuration with the given (possibly missing) API key.
    pub fn new(api_key: Option<Secret<String>>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.expose_secret().trim().is_empty()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            max_retries: 0,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Returns true if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    ///
    /// # Errors
    ///
    /// - `Network` if the HTTP client cannot be built
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let generation_config = GenerationConfig {
            response_mime_type: request
                .response_schema
                .as_ref()
                .map(|_| "application/json".to_string()),
            response_schema: request.response_schema.clone(),
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(request.prompt.clone()),
                }],
            }],
            generation_config,
        }
    }

    /// Sends a request and handles transport errors.
    async fn send_request(&self, api_key: &str, request: &CompletionRequest) -> Result<Response, AIError> {
        let body = Self::to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps a non-success status and body to an error.
    fn status_error(status: u16, body: String) -> AIError {
        match status {
            401 | 403 => AIError::AuthenticationFailed,
            429 => AIError::rate_limited(Self::parse_retry_after(&body)),
            400 => AIError::InvalidRequest(body),
            500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
            _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
        }
    }

    /// Reads the retry delay from a `RetryInfo` error detail, e.g. `"17s"`.
    fn parse_retry_after(body: &str) -> u32 {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")?
                    .get("details")?
                    .as_array()?
                    .iter()
                    .find_map(|d| d.get("retryDelay")?.as_str().map(str::to_string))
            })
            .and_then(|delay| delay.trim_end_matches('s').parse::<f64>().ok())
            .map(|secs| secs.ceil() as u32)
            .unwrap_or(60)
    }

    /// Parses a response, mapping error statuses first.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status.as_u16(), body));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        self.into_completion(body)
    }

    /// Converts a decoded body into a completion.
    fn into_completion(&self, body: GeminiResponse) -> Result<CompletionResponse, AIError> {
        if let Some(reason) = body.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AIError::content_filtered(reason));
        }

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("Response has no candidates"))?;

        let finish_reason = match candidate.finish_reason.as_deref() {
            Some("STOP") | None => FinishReason::Stop,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
                FinishReason::ContentFilter
            }
            Some(_) => FinishReason::Other,
        };

        let content: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(match finish_reason {
                FinishReason::ContentFilter => AIError::content_filtered("Response blocked"),
                _ => AIError::parse("Response text is empty"),
            });
        }

        let usage = body
            .usage_metadata
            .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();

        Ok(CompletionResponse {
            content,
            usage,
            model: body.model_version.unwrap_or_else(|| self.config.model.clone()),
            finish_reason,
        })
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let api_key = self.config.api_key().ok_or(AIError::AuthenticationFailed)?;
        let mut retry_count = 0;

        loop {
            let result = match self.send_request(api_key, &request).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(completion) => {
                    tracing::debug!(
                        operation = request.operation,
                        model = %completion.model,
                        total_tokens = completion.usage.total_tokens,
                        "Gemini completion succeeded"
                    );
                    return Ok(completion);
                }
                Err(err) if err.is_retryable() && retry_count < self.config.max_retries => {
                    tracing::warn!(
                        operation = request.operation,
                        attempt = retry_count + 1,
                        error = %err,
                        "Gemini call failed, retrying"
                    );
                }
                Err(err) => return Err(err),
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            sleep(Duration::from_secs(1 << retry_count.min(5))).await;
            retry_count += 1;
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Gemini API Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

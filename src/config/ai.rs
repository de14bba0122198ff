//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

/// Gemini provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key. Optional: without it every generation fails.
    pub api_key: Option<Secret<String>>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries on transient provider errors
    #[serde(default)]
    pub max_retries: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a non-blank API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Build the provider configuration
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig::new(self.api_key.clone())
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout())
            .with_max_retries(self.max_retries)
    }

    /// Validate AI configuration. A missing key is allowed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: 0,
        }
    }
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.max_retries, 0);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_blank_key_is_not_a_key() {
        let config = AiConfig {
            api_key: Some(Secret::new("   ".to_string())),
            ..Default::default()
        };
        assert!(!config.has_api_key());
        assert!(!config.gemini_config().has_api_key());
    }

    #[test]
    fn test_missing_key_is_valid() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = AiConfig {
            model: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyModel));

        let config = AiConfig {
            base_url: "generativelanguage.googleapis.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));

        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAiTimeout));
    }
}

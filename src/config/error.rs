//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session idle time must be between 60 seconds and 30 days")]
    InvalidSessionIdle,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("AI model name is empty")]
    EmptyModel,

    #[error("AI base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("AI timeout must be positive")]
    InvalidAiTimeout,
}

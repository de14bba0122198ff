//! HTTP server settings

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted request timeout.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Idle sessions are kept at least a minute and at most thirty days.
const SESSION_IDLE_RANGE_SECS: std::ops::RangeInclusive<u64> = 60..=30 * 24 * 60 * 60;

/// Where and how the API listens
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    /// Tracing filter directive, used when `RUST_LOG` is unset
    pub log_level: String,

    pub request_timeout_secs: u64,

    /// Sessions untouched for this long are dropped
    pub session_idle_secs: u64,

    /// Comma-separated origins allowed by CORS
    pub cors_origins: Option<String>,
}

/// Deployment environment. Production switches logs to JSON and locks CORS.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,clarity_compass=debug".to_string(),
            request_timeout_secs: 30,
            session_idle_secs: 24 * 60 * 60,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ValidationError::InvalidAddress(raw))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Idle lifetime of a planning session. Call after [`Self::validate`].
    pub fn session_idle(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_idle_secs.min(*SESSION_IDLE_RANGE_SECS.end()) as i64)
    }

    /// Configured CORS origins, blanks dropped.
    pub fn allowed_origins(&self) -> Vec<&str> {
        self.cors_origins
            .as_deref()
            .map(|raw| raw.split(',').map(str::trim).filter(|o| !o.is_empty()).collect())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if !SESSION_IDLE_RANGE_SECS.contains(&self.session_idle_secs) {
            return Err(ValidationError::InvalidSessionIdle);
        }
        self.socket_addr().map(|_| ())
    }
}

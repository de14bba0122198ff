//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `CLARITY_COMPASS` prefix; nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use clarity_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use secrecy::Secret;
use serde::Deserialize;

/// Plain environment variable consulted when `CLARITY_COMPASS__AI__API_KEY` is unset.
pub const API_KEY_FALLBACK_VAR: &str = "API_KEY";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `CLARITY_COMPASS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CLARITY_COMPASS__AI__API_KEY=...` -> `ai.api_key = ...`
    ///
    /// A `.env` file is loaded first when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLARITY_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if config.ai.api_key.is_none() {
            config.ai.api_key = std::env::var(API_KEY_FALLBACK_VAR).ok().map(Secret::new);
        }

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("CLARITY_COMPASS__SERVER__PORT");
        env::remove_var("CLARITY_COMPASS__SERVER__ENVIRONMENT");
        env::remove_var("CLARITY_COMPASS__AI__API_KEY");
        env::remove_var("CLARITY_COMPASS__AI__MODEL");
        env::remove_var(API_KEY_FALLBACK_VAR);
    }

    #[test]
    fn test_load_with_no_variables_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_variables_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CLARITY_COMPASS__SERVER__PORT", "3000");
        env::set_var("CLARITY_COMPASS__SERVER__ENVIRONMENT", "production");
        env::set_var("CLARITY_COMPASS__AI__MODEL", "gemini-test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.ai.model, "gemini-test");
    }

    #[test]
    fn test_api_key_falls_back_to_plain_variable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(API_KEY_FALLBACK_VAR, "plain-key");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.ai.api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("plain-key")
        );
    }

    #[test]
    fn test_prefixed_key_wins_over_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(API_KEY_FALLBACK_VAR, "plain-key");
        env::set_var("CLARITY_COMPASS__AI__API_KEY", "prefixed-key");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_api_key());
        assert_eq!(
            config.ai.api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("prefixed-key")
        );
    }
}

//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONFLICT_WORKSHEET` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working
//! configuration with AI features disabled.
//!
//! # Example
//!
//! ```no_run
//! use conflict_worksheet::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("History stored in {}", config.storage.resolve_data_dir().display());
//! ```

mod ai;
mod error;
mod logging;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Environment variable prefix for all settings
pub const ENV_PREFIX: &str = "CONFLICT_WORKSHEET";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Where the session history lives
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONFLICT_WORKSHEET` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONFLICT_WORKSHEET__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `CONFLICT_WORKSHEET__STORAGE__DATA_DIR=/var/lib/cw` -> `storage.data_dir = ...`
    /// - `CONFLICT_WORKSHEET__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "CONFLICT_WORKSHEET__AI__GEMINI_API_KEY",
        "CONFLICT_WORKSHEET__AI__BASE_URL",
        "CONFLICT_WORKSHEET__STORAGE__DATA_DIR",
        "CONFLICT_WORKSHEET__LOGGING__LEVEL",
        "CONFLICT_WORKSHEET__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.ai.has_gemini());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONFLICT_WORKSHEET__AI__GEMINI_API_KEY", "AIza-test");
        env::set_var("CONFLICT_WORKSHEET__STORAGE__DATA_DIR", "/tmp/cw-test");
        env::set_var("CONFLICT_WORKSHEET__LOGGING__LEVEL", "debug");
        env::set_var("CONFLICT_WORKSHEET__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.gemini_api_key.as_deref(), Some("AIza-test"));
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/cw-test")));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONFLICT_WORKSHEET__AI__BASE_URL", "not-a-url");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}

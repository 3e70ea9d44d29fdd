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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("AI base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Invalid log level: {0:?}")]
    InvalidLogLevel(String),

    #[error("Data directory must not be empty")]
    InvalidDataDir,
}

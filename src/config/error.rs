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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Stage period must be at least 1 millisecond")]
    InvalidStagePeriod,

    #[error("Flow layout spacing must be a positive finite number")]
    InvalidLayoutSpacing,

    #[error("Flow layout coordinates must be finite")]
    InvalidLayoutOrigin,

    #[error("Law Agent base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),
}

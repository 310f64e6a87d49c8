//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LAW_AGENT` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working
//! development configuration.
//!
//! # Example
//!
//! ```no_run
//! use law_agent::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod features;
mod guidance;
mod law_agent_api;
mod server;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use guidance::GuidanceConfig;
pub use law_agent_api::LawAgentApiConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Guidance content and flow diagram settings
    #[serde(default)]
    pub guidance: GuidanceConfig,

    /// Law Agent decision service (classification and feedback)
    #[serde(default)]
    pub law_agent_api: LawAgentApiConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LAW_AGENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LAW_AGENT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LAW_AGENT__GUIDANCE__STAGE_PERIOD_MS=1500` -> `guidance.stage_period_ms = 1500`
    /// - `LAW_AGENT__LAW_AGENT_API__BASE_URL=...` -> `law_agent_api.base_url = ...`
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
                    .prefix("LAW_AGENT")
                    .separator("__"),
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
        self.server.validate()?;
        self.guidance.validate()?;
        self.law_agent_api.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

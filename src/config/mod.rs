//! Runtime configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `XIVDYE` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a valid config.
//!
//! # Example
//!
//! ```no_run
//! use xivdye_types::config::TypesConfig;
//!
//! let config = TypesConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let policy = config.dye_id_policy();
//! ```

mod dye_ids;
mod error;
mod logging;

pub use dye_ids::DyeIdConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

use crate::domain::dye::DyeIdPolicy;

/// Root configuration
///
/// Load using [`TypesConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypesConfig {
    /// Dye ID validation (synthetic facewear IDs)
    #[serde(default)]
    pub dye_ids: DyeIdConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TypesConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `XIVDYE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `XIVDYE__DYE_IDS__ALLOW_SYNTHETIC=true` -> `dye_ids.allow_synthetic = true`
    /// - `XIVDYE__LOGGING__FORMAT=json` -> `logging.format = json`
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
                    .prefix("XIVDYE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter is empty or unparsable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }

    /// Dye ID policy selected by `dye_ids.allow_synthetic`
    pub fn dye_id_policy(&self) -> DyeIdPolicy {
        self.dye_ids.policy()
    }
}

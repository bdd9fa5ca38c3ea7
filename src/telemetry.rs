//! Tracing subscriber bootstrap.
//!
//! Consumers call [`init`] once at startup with the loaded
//! [`LoggingConfig`]. Library code only emits `tracing` events and never
//! installs a subscriber itself.

use tracing_subscriber::fmt;

use crate::config::{ConfigError, LogFormat, LoggingConfig};

/// Installs the global fmt subscriber described by `config`.
///
/// # Errors
///
/// Returns `ConfigError::ValidationFailed` for a bad filter directive and
/// `ConfigError::TelemetryInit` if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = config.env_filter()?;
    let builder = fmt().with_env_filter(filter);
    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    result.map_err(|e| ConfigError::TelemetryInit(e.to_string()))?;

    tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    Ok(())
}

//! Environment-driven runtime configuration.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Endpoint used when `SUPPLIER_ASSESS_ENDPOINT` is unset.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/assess";
/// Request timeout used when `SUPPLIER_ASSESS_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Log filter used when neither `RUST_LOG` nor `SUPPLIER_ASSESS_LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Assessment service settings.
    pub service: ServiceConfig,
    /// Logging settings.
    pub telemetry: TelemetryConfig,
}

/// Where and how long to talk to the assessment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Full URL of the assessment endpoint.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidTimeout`] for a non-numeric or zero
    /// timeout.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidTimeout`] for a non-numeric or zero
    /// timeout.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("SUPPLIER_ASSESS_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = match lookup("SUPPLIER_ASSESS_TIMEOUT_SECS") {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let log_level = lookup("SUPPLIER_ASSESS_LOG_LEVEL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            service: ServiceConfig {
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidTimeout(raw.to_string())),
        Ok(secs) => Ok(secs),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Timeout is not a positive whole number of seconds.
    #[error("SUPPLIER_ASSESS_TIMEOUT_SECS must be a positive integer, got '{0}'")]
    InvalidTimeout(String),
}

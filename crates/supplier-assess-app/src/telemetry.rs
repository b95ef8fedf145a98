//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::TelemetryConfig;

/// Telemetry initialization errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Configured filter directive is invalid.
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        /// Rejected directive.
        value: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },
    /// A global subscriber is already installed.
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins over the configured level.
///
/// # Errors
/// Returns [`TelemetryError`] for an invalid filter or a second install.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#![warn(missing_docs)]
//! # supplier-assess-app
//!
//! ## Purpose
//! Orchestrates configuration, submission, decision normalization, and
//! report output for `supplier-assess`.
//!
//! ## Responsibilities
//! - Load runtime configuration and install tracing.
//! - Build the assessment client for the configured endpoint.
//! - Run one assessment: submit, assemble, and record the outcome in the
//!   UI session.
//! - Turn failures into distinct user-facing messages.
//!
//! ## Data flow
//! CLI args + env -> [`AppConfig`] -> [`build_client`] ->
//! [`run_assessment`] (client submit -> core assemble) ->
//! [`render_output`] -> stdout.
//!
//! ## Ownership and lifetimes
//! Each run derives a fresh view owned by the caller's session; nothing is
//! cached between assessments.
//!
//! ## Error model
//! Subsystem failures are wrapped in [`AppError`]. [`user_message`] keeps
//! service messages verbatim and labels payload validation failures so
//! they are not mistaken for transport problems.

pub mod config;
pub mod telemetry;

use std::sync::Arc;

use supplier_assess_client::{AssessmentClient, ClientError, HttpTransport, TransportError};
use supplier_assess_core::{AssessmentView, ValidationError, assemble};
use supplier_assess_ui::{AssessmentSession, render_report};
use thiserror::Error;
use tracing::{info, warn};

pub use config::{AppConfig, ConfigError};
pub use telemetry::TelemetryError;

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("SUPPLIER_ASSESS_VERSION");

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Output rendering selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Sectioned plain-text report.
    #[default]
    Text,
    /// Pretty-printed JSON of the assessment view.
    Json,
}

/// Builds an HTTP-backed client from configuration.
///
/// # Errors
/// Returns [`AppError::Client`] when the endpoint is rejected or the HTTP
/// client cannot be initialized.
pub fn build_client(config: &AppConfig) -> Result<AssessmentClient, AppError> {
    let transport = HttpTransport::new(config.service.timeout)
        .map_err(|error| AppError::Client(ClientError::Transport(error)))?;
    Ok(AssessmentClient::new(
        &config.service.endpoint,
        Arc::new(transport),
    )?)
}

/// Submits one assessment and derives its view.
///
/// No partial view is produced: any failure short-circuits derivation.
///
/// # Errors
/// Returns [`AppError::Client`] for input, transport, or decode failures and
/// [`AppError::Validation`] when the payload cannot be assembled.
pub fn run_assessment(
    client: &AssessmentClient,
    supplier_id: &str,
    need: &str,
) -> Result<AssessmentView, AppError> {
    let raw = client.submit_assessment(supplier_id, need)?;
    let view = assemble(&raw)?;
    info!(
        supplier_id = %view.supplier_id,
        decision = view.final_decision.code(),
        risk_band = view.risk_band.label(),
        metrics = view.display_metrics.len(),
        "assessment assembled"
    );
    Ok(view)
}

/// Runs one assessment inside a session, recording success or failure.
///
/// # Errors
/// Returns [`AppError::SessionBusy`] when a request is already in flight,
/// otherwise the same errors as [`run_assessment`].
pub fn submit_in_session(
    session: &mut AssessmentSession,
    client: &AssessmentClient,
    supplier_id: &str,
    need: &str,
) -> Result<(), AppError> {
    if !session.begin_submission() {
        return Err(AppError::SessionBusy);
    }

    match run_assessment(client, supplier_id, need) {
        Ok(view) => {
            session.complete(view);
            Ok(())
        }
        Err(error) => {
            let message = user_message(&error);
            warn!(supplier_id, %message, "assessment failed");
            session.fail(message);
            Err(error)
        }
    }
}

/// Renders a view in the requested format.
///
/// # Errors
/// Returns [`AppError::Output`] when JSON serialization fails.
pub fn render_output(view: &AssessmentView, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_report(view).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

/// User-facing message for a failed run.
///
/// Service-supplied messages pass through unchanged; payload validation
/// failures are labeled as such.
pub fn user_message(error: &AppError) -> String {
    match error {
        AppError::Client(ClientError::Transport(TransportError::Api { message, .. })) => {
            message.clone()
        }
        AppError::Validation(validation) => {
            format!("The assessment service returned an incomplete result: {validation}")
        }
        other => other.to_string(),
    }
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Telemetry setup error.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// Client input, transport, or decode error.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Payload failed validation.
    #[error("invalid assessment payload: {0}")]
    Validation(#[from] ValidationError),
    /// A submission is already in flight.
    #[error("an assessment is already in progress")]
    SessionBusy,
    /// Output serialization error.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
    /// Stdin/stdout error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

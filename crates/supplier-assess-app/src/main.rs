//! # supplier-assess binary
//!
//! Command-line entry point: submits one supplier assessment and prints the
//! resulting report.

use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use supplier_assess_app::{
    AppConfig, AppError, OutputFormat, app_version, build_client, render_output,
    submit_in_session, telemetry, user_message,
};
use supplier_assess_ui::AssessmentSession;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "supplier-assess",
    about = "Submit a supplier qualification and risk assessment",
    version
)]
struct Cli {
    /// Supplier identifier to assess
    supplier_id: String,
    /// Procurement need and requirements; `-` reads them from stdin
    need: String,
    /// Override the configured assessment endpoint URL
    #[arg(long)]
    endpoint: Option<String>,
    /// Override the configured request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", user_message(&error));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.service.endpoint = endpoint;
    }
    if let Some(secs) = cli.timeout_secs {
        config.service.timeout = Duration::from_secs(secs);
    }

    telemetry::init(&config.telemetry)?;
    info!(
        version = app_version(),
        endpoint = %config.service.endpoint,
        "starting supplier-assess"
    );

    let need = read_need(&cli.need)?;
    let client = build_client(&config)?;

    let mut session = AssessmentSession::new();
    submit_in_session(&mut session, &client, &cli.supplier_id, &need)?;

    if let Some(view) = session.view() {
        println!("{}", render_output(view, cli.format)?);
    }
    Ok(())
}

fn read_need(arg: &str) -> Result<String, AppError> {
    if arg != "-" {
        return Ok(arg.to_string());
    }

    let mut need = String::new();
    io::stdin().read_to_string(&mut need)?;
    Ok(need)
}

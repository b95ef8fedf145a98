#![warn(missing_docs)]
//! # supplier-assess-client
//!
//! ## Purpose
//! Submits a supplier id and need description to the remote assessment
//! service and returns the raw assessment payload.
//!
//! ## Responsibilities
//! - Validate endpoint policy (HTTPS, or plain HTTP on loopback only).
//! - Refuse blank supplier ids and needs before any network traffic.
//! - Execute one request/response exchange through an injectable
//!   [`AssessmentTransport`]; there is no retry.
//! - Classify failure responses and pass the server message through.
//!
//! ## Data flow
//! Caller input -> [`AssessmentClient::submit_assessment`] ->
//! [`AssessmentTransport::post_json`] -> status check -> contract parsing ->
//! [`AssessmentResult`].
//!
//! ## Ownership and lifetimes
//! The client owns its parsed endpoint and shares the transport through
//! `Arc`, so one client can be cloned into worker threads.
//!
//! ## Error model
//! Input and endpoint problems, transport failures, and undecodable bodies
//! are distinct [`ClientError`] variants. A non-success response becomes
//! [`TransportError::Api`], whose display text is the server's own message.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use supplier_assess_contract::{
    AssessmentRequest, AssessmentResult, ContractError, error_message_from_body,
    parse_assessment_response,
};
use thiserror::Error;
use tracing::{info, warn};
use url::{Host, Url};

/// Raw HTTP response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract transport used by the assessment client.
pub trait AssessmentTransport: Send + Sync {
    /// Posts the request body as JSON and returns the raw response.
    fn post_json(
        &self,
        endpoint: &Url,
        request: &AssessmentRequest,
    ) -> Result<TransportResponse, TransportError>;
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds a transport whose requests fail after `timeout`.
    ///
    /// # Errors
    /// Returns [`TransportError::Network`] when the HTTP client cannot be
    /// initialized.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("supplier-assess/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { client })
    }
}

impl AssessmentTransport for HttpTransport {
    fn post_json(
        &self,
        endpoint: &Url,
        request: &AssessmentRequest,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(endpoint.clone())
            .json(request)
            .send()
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(map_reqwest_error)?;
        Ok(TransportResponse { status, body })
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(error.to_string())
    }
}

/// Client that validates input and runs one assessment exchange.
#[derive(Clone)]
pub struct AssessmentClient {
    endpoint: Url,
    transport: Arc<dyn AssessmentTransport>,
}

impl AssessmentClient {
    /// Creates a client for a validated endpoint.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidEndpoint`] when the URL is malformed or
    /// uses plain HTTP for a non-loopback host.
    pub fn new(
        endpoint: &str,
        transport: Arc<dyn AssessmentTransport>,
    ) -> Result<Self, ClientError> {
        let endpoint = validate_endpoint(endpoint)?;
        Ok(Self {
            endpoint,
            transport,
        })
    }

    /// Returns the configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits one assessment and returns the decoded payload.
    ///
    /// # Errors
    /// Returns [`ClientError::MissingSupplierId`] or
    /// [`ClientError::MissingNeed`] for blank input, without contacting the
    /// service. Transport failures and non-success statuses surface as
    /// [`ClientError::Transport`]; undecodable bodies as
    /// [`ClientError::Contract`].
    pub fn submit_assessment(
        &self,
        supplier_id: &str,
        need: &str,
    ) -> Result<AssessmentResult, ClientError> {
        if supplier_id.trim().is_empty() {
            return Err(ClientError::MissingSupplierId);
        }
        if need.trim().is_empty() {
            return Err(ClientError::MissingNeed);
        }

        info!(
            supplier_id,
            need_len = need.len(),
            endpoint = %self.endpoint,
            "submitting assessment"
        );

        let started = Instant::now();
        let request = AssessmentRequest::new(supplier_id, need);
        let response = self
            .transport
            .post_json(&self.endpoint, &request)
            .inspect_err(|error| warn!(supplier_id, %error, "assessment transport failed"))?;
        let elapsed_ms = started.elapsed().as_millis();

        if !response.is_success() {
            let message = error_message_from_body(response.status, &response.body);
            warn!(
                supplier_id,
                status = response.status,
                elapsed_ms,
                %message,
                "assessment request rejected"
            );
            return Err(TransportError::Api {
                status: response.status,
                message,
            }
            .into());
        }

        info!(
            supplier_id,
            status = response.status,
            elapsed_ms,
            "assessment response received"
        );
        Ok(parse_assessment_response(&response.body)?)
    }
}

/// Validates the assessment endpoint.
///
/// HTTPS is always accepted; plain HTTP only for `localhost` and loopback
/// addresses.
///
/// # Errors
/// Returns [`ClientError::InvalidEndpoint`] for malformed or disallowed URLs.
pub fn validate_endpoint(endpoint: &str) -> Result<Url, ClientError> {
    let parsed = Url::parse(endpoint)
        .map_err(|error| ClientError::InvalidEndpoint(format!("invalid url: {error}")))?;

    match parsed.scheme() {
        "https" => Ok(parsed),
        "http" if is_loopback(&parsed) => Ok(parsed),
        "http" => Err(ClientError::InvalidEndpoint(
            "plain http is only allowed for loopback hosts".to_string(),
        )),
        other => Err(ClientError::InvalidEndpoint(format!(
            "unsupported scheme {other}"
        ))),
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
        Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
        None => false,
    }
}

/// Failures of the request/response exchange itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request did not complete within the configured timeout.
    #[error("assessment request timed out")]
    Timeout,
    /// Connection or protocol failure.
    #[error("network failure: {0}")]
    Network(String),
    /// Service answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },
}

/// Errors returned by [`AssessmentClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint violates URL or transport policy.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Supplier id is blank.
    #[error("Supplier ID is required")]
    MissingSupplierId,
    /// Need description is blank.
    #[error("Needs assessment is required")]
    MissingNeed,
    /// Exchange with the service failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Success body did not match the contract.
    #[error(transparent)]
    Contract(#[from] ContractError),
}

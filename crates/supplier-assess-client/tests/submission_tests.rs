//! Integration tests for assessment submission through fake transports.

use std::sync::{Arc, Mutex};

use supplier_assess_client::{
    AssessmentClient, AssessmentTransport, ClientError, TransportError, TransportResponse,
};
use supplier_assess_contract::AssessmentRequest;
use url::Url;

const ENDPOINT: &str = "https://risk.example.test/assess";

/// Replays one canned outcome and records every request it sees.
struct CannedTransport {
    outcome: Result<TransportResponse, TransportError>,
    requests: Mutex<Vec<AssessmentRequest>>,
}

impl CannedTransport {
    fn new(outcome: Result<TransportResponse, TransportError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn responding(status: u16, body: &str) -> Arc<Self> {
        Self::new(Ok(TransportResponse {
            status,
            body: body.to_string(),
        }))
    }

    fn request_count(&self) -> usize {
        self.requests.lock().expect("request log lock").len()
    }
}

impl AssessmentTransport for CannedTransport {
    fn post_json(
        &self,
        _endpoint: &Url,
        request: &AssessmentRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .expect("request log lock")
            .push(request.clone());
        self.outcome.clone()
    }
}

fn client_for(transport: Arc<CannedTransport>) -> AssessmentClient {
    AssessmentClient::new(ENDPOINT, transport).expect("endpoint should be valid")
}

#[test]
fn submission_tests_posts_request_body_and_decodes_result() {
    let transport = CannedTransport::responding(
        200,
        r#"{"result":{
            "supplier_id":"SUP-1",
            "risk_score":0.3,
            "decision_analysis":{"final_decision":"APPROVE","decision_tier":"TIER_4"},
            "metrics":{"avg_ppm":120}
        }}"#,
    );
    let client = client_for(transport.clone());

    let result = client
        .submit_assessment("SUP-1", "200 units of machined brackets per month")
        .expect("submission should succeed");

    assert_eq!(result.supplier_id, "SUP-1");
    assert_eq!(result.risk_score, Some(0.3));
    assert_eq!(result.metrics.len(), 1);

    let requests = transport.requests.lock().expect("request log lock");
    assert_eq!(
        requests.as_slice(),
        &[AssessmentRequest::new(
            "SUP-1",
            "200 units of machined brackets per month"
        )]
    );
}

#[test]
fn submission_tests_blank_input_never_reaches_transport() {
    let transport = CannedTransport::responding(200, "{}");
    let client = client_for(transport.clone());

    assert!(matches!(
        client.submit_assessment("  ", "need"),
        Err(ClientError::MissingSupplierId)
    ));
    assert!(matches!(
        client.submit_assessment("SUP-1", "\n\t"),
        Err(ClientError::MissingNeed)
    ));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn submission_tests_passes_server_message_through() {
    let transport = CannedTransport::responding(
        404,
        r#"{"detail":{"message":"Supplier SUP-404 is not registered"}}"#,
    );
    let client = client_for(transport);

    let error = client
        .submit_assessment("SUP-404", "office chairs")
        .expect_err("404 should fail");
    assert_eq!(error.to_string(), "Supplier SUP-404 is not registered");
    assert!(matches!(
        error,
        ClientError::Transport(TransportError::Api { status: 404, .. })
    ));
}

#[test]
fn submission_tests_unstructured_failure_names_status() {
    let transport = CannedTransport::responding(503, "Service Unavailable");
    let client = client_for(transport);

    let error = client
        .submit_assessment("SUP-1", "steel")
        .expect_err("503 should fail");
    assert_eq!(
        error.to_string(),
        "assessment request failed with status 503"
    );
}

#[test]
fn submission_tests_surfaces_transport_failures_once() {
    let transport = CannedTransport::new(Err(TransportError::Timeout));
    let client = client_for(transport.clone());

    let error = client
        .submit_assessment("SUP-1", "steel")
        .expect_err("timeout should fail");
    assert!(matches!(
        error,
        ClientError::Transport(TransportError::Timeout)
    ));
    assert_eq!(transport.request_count(), 1, "no retry is attempted");
}

#[test]
fn submission_tests_rejects_success_body_without_result() {
    let transport = CannedTransport::responding(200, r#"{"status":"queued"}"#);
    let client = client_for(transport);

    assert!(matches!(
        client.submit_assessment("SUP-1", "steel"),
        Err(ClientError::Contract(_))
    ));
}

#[test]
fn submission_tests_rejects_insecure_remote_endpoint() {
    let transport = CannedTransport::responding(200, "{}");
    assert!(matches!(
        AssessmentClient::new("http://risk.example.test/assess", transport),
        Err(ClientError::InvalidEndpoint(_))
    ));
}

//! Shared fixtures for app integration tests.

use std::sync::Arc;

use supplier_assess_client::{
    AssessmentClient, AssessmentTransport, TransportError, TransportResponse,
};
use supplier_assess_contract::AssessmentRequest;
use url::Url;

/// Transport that answers every request with one fixed response.
#[derive(Debug)]
pub struct FixedTransport {
    status: u16,
    body: String,
}

impl AssessmentTransport for FixedTransport {
    fn post_json(
        &self,
        _endpoint: &Url,
        _request: &AssessmentRequest,
    ) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Creates a client whose transport always returns `status` and `body`.
#[allow(dead_code)]
pub fn client_returning(status: u16, body: &str) -> AssessmentClient {
    let transport = Arc::new(FixedTransport {
        status,
        body: body.to_string(),
    });
    AssessmentClient::new("https://risk.example.test/assess", transport)
        .expect("fixture endpoint should be valid")
}

/// Deterministic success body for supplier `SUP-100`.
#[allow(dead_code)]
pub const APPROVED_BODY: &str = r#"{"result":{
    "supplier_id":"SUP-100",
    "risk_score":0.25,
    "decision_analysis":{
        "final_decision":"APPROVE",
        "decision_tier":"TIER_4_LOW",
        "confidence_level":"HIGH",
        "reasoning":["Consistent on-time delivery"],
        "risk_factors":[],
        "mitigation_suggestions":["Review annually"],
        "review_required":false
    },
    "raw_decision_text":"Approved without conditions.",
    "metrics":{"avg_otd":0.97,"open_majors":0}
}}"#;

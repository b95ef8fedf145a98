#![warn(missing_docs)]
//! # supplier-assess-contract
//!
//! ## Purpose
//! Defines the wire schema of the remote supplier risk-assessment service.
//!
//! ## Responsibilities
//! - Describe the submission request body (`{supplier_id, need}`).
//! - Parse the `{result: ...}` success envelope into a loosely-typed
//!   [`AssessmentResult`].
//! - Preserve metric insertion order through [`MetricMap`].
//! - Extract a human-readable message from structured failure bodies.
//!
//! ## Data flow
//! Raw JSON response -> [`parse_assessment_response`] -> [`AssessmentResult`]
//! -> decision normalization in `supplier-assess-core`.
//!
//! ## Ownership and lifetimes
//! Parsed values are owned structs to avoid borrowing from transient network
//! buffers.
//!
//! ## Error model
//! Invalid JSON and a missing `result` envelope return [`ContractError`].
//! Fields whose absence the decision layer must judge (risk score, final
//! decision) are kept optional here instead of failing the decode.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Request body posted to the assessment endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Opaque supplier identifier.
    pub supplier_id: String,
    /// Free-text description of the procurement need.
    pub need: String,
}

impl AssessmentRequest {
    /// Creates a request body from owned or borrowed strings.
    pub fn new(supplier_id: impl Into<String>, need: impl Into<String>) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            need: need.into(),
        }
    }
}

/// Success envelope returned by the assessment endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentEnvelope {
    /// Assessment payload; absent only for malformed responses.
    #[serde(default)]
    pub result: Option<AssessmentResult>,
}

/// Raw assessment payload, immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Supplier identifier echoed back by the service.
    #[serde(default)]
    pub supplier_id: String,
    /// Risk score, expected in [0.0, 1.0].
    #[serde(default)]
    pub risk_score: Option<f64>,
    /// Structured decision payload; absent means no final decision.
    #[serde(default)]
    pub decision_analysis: DecisionAnalysis,
    /// Free-form narrative produced by the assessment engine.
    #[serde(default, alias = "AI_decision")]
    pub raw_decision_text: String,
    /// Metric codes mapped to scalar values, in service order.
    #[serde(default)]
    pub metrics: MetricMap,
    /// Processing metadata, when the service reports it.
    #[serde(default)]
    pub metadata: Option<AssessmentMetadata>,
}

/// Structured decision payload nested in [`AssessmentResult`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecisionAnalysis {
    /// Decision code such as `APPROVE` or `REJECT`.
    #[serde(default)]
    pub final_decision: Option<String>,
    /// Tier code carrying a `TIER_1`..`TIER_4` marker.
    #[serde(default)]
    pub decision_tier: String,
    /// Confidence label such as `HIGH` or `LOW`.
    #[serde(default)]
    pub confidence_level: String,
    /// Ordered reasoning statements.
    #[serde(default)]
    pub reasoning: Vec<String>,
    /// Ordered risk factor names.
    #[serde(default)]
    pub risk_factors: Vec<String>,
    /// Ordered mitigation suggestions.
    #[serde(default)]
    pub mitigation_suggestions: Vec<String>,
    /// Whether a human must review the decision.
    #[serde(default)]
    pub review_required: bool,
}

/// Processing metadata attached by the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentMetadata {
    /// Service-side assessment identifier.
    #[serde(default)]
    pub assessment_id: String,
    /// Wall-clock processing time reported by the service.
    #[serde(default)]
    pub processing_time_seconds: f64,
    /// ISO-8601 timestamp of the assessment.
    #[serde(default)]
    pub timestamp: String,
    /// Service API version.
    #[serde(default)]
    pub api_version: String,
}

/// Value of one metric.
///
/// Scalars are typed; anything else (null, arrays, objects) is kept as raw
/// JSON so an unexpected value never fails the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Numeric metric, keeping integer digits exact.
    Number(serde_json::Number),
    /// Boolean flag metric.
    Flag(bool),
    /// Textual metric.
    Text(String),
    /// Any other JSON value.
    Other(serde_json::Value),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(value) => match value.as_f64() {
                // Whole floats print without a trailing `.0`.
                Some(float) if value.is_f64() => write!(f, "{float}"),
                _ => write!(f, "{value}"),
            },
            MetricValue::Flag(value) => write!(f, "{value}"),
            MetricValue::Text(value) => f.write_str(value),
            MetricValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for MetricValue {
    /// Non-finite floats have no JSON number form and become `null`.
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(MetricValue::Number)
            .unwrap_or(MetricValue::Other(serde_json::Value::Null))
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Number(value.into())
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        MetricValue::Number(value.into())
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Flag(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

/// Insertion-ordered metric map with unique keys.
///
/// Inserting an existing key replaces its value but keeps its original
/// position, matching how a JSON object with a repeated key is read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricMap {
    entries: Vec<(String, MetricValue)>,
}

impl MetricMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces one metric.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetricValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of metrics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no metrics are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MetricMap
where
    K: Into<String>,
    V: Into<MetricValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MetricMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Serialize for MetricMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MetricMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetricMapVisitor;

        impl<'de> Visitor<'de> for MetricMapVisitor {
            type Value = MetricMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping metric codes to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MetricMap, A::Error> {
                let mut metrics = MetricMap::new();
                while let Some((key, value)) = access.next_entry::<String, MetricValue>()? {
                    metrics.insert(key, value);
                }
                Ok(metrics)
            }
        }

        deserializer.deserialize_map(MetricMapVisitor)
    }
}

/// Parses a raw success body into the assessment payload.
///
/// # Errors
/// Returns [`ContractError::Decode`] for invalid JSON or wrongly-typed fields.
/// Returns [`ContractError::MissingResult`] when the envelope has no `result`.
pub fn parse_assessment_response(raw: &str) -> Result<AssessmentResult, ContractError> {
    let envelope: AssessmentEnvelope = serde_json::from_str(raw).map_err(ContractError::Decode)?;
    envelope.result.ok_or(ContractError::MissingResult)
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Text(String),
    Structured { message: Option<String> },
    Other(serde::de::IgnoredAny),
}

/// Extracts the user-facing message from a failure response body.
///
/// Lookup order is `detail.message`, `detail` as a string, then `message`.
/// Bodies without any of them yield a generic message naming the status.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();

    parsed
        .and_then(|body| {
            let from_detail = match body.detail {
                Some(ErrorDetail::Structured { message }) => message,
                Some(ErrorDetail::Text(text)) => Some(text),
                Some(ErrorDetail::Other(_)) | None => None,
            };
            from_detail
                .filter(|message| !message.trim().is_empty())
                .or(body.message)
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("assessment request failed with status {status}"))
}

/// Assessment contract errors.
#[derive(Debug, Error)]
pub enum ContractError {
    /// JSON decode failure, including wrongly-typed fields.
    #[error("assessment response decode failure: {0}")]
    Decode(#[from] serde_json::Error),
    /// Success body carried no `result` object.
    #[error("assessment response is missing the result object")]
    MissingResult,
}

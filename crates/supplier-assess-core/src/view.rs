//! Displayable decision model.

use serde::Serialize;
use supplier_assess_contract::MetricValue;
use time::OffsetDateTime;

use crate::{ConfidenceBucket, FinalDecision, RiskBand, TierDescriptor};

/// Immutable, display-ready projection of one assessment.
///
/// Derived fresh for each assessment and never cached across requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentView {
    /// Supplier identifier.
    pub supplier_id: String,
    /// Risk score clamped into [0.0, 1.0].
    pub risk_score: f64,
    /// Risk score rounded to a 0-100 percentage.
    pub risk_percentage: u8,
    /// Banded risk score.
    pub risk_band: RiskBand,
    /// Resolved decision tier.
    pub tier_descriptor: TierDescriptor,
    /// Bucketed confidence level.
    pub confidence_bucket: ConfidenceBucket,
    /// Normalized final decision.
    pub final_decision: FinalDecision,
    /// Ordered reasoning statements.
    pub reasoning: Vec<String>,
    /// Risk factors, shown only when non-empty.
    pub risk_factors: GatedSection,
    /// Mitigation suggestions, shown only when non-empty.
    pub mitigation_suggestions: GatedSection,
    /// Whether manual review is required.
    pub review_required: bool,
    /// Free-form narrative from the assessment engine.
    pub raw_decision_text: String,
    /// Metrics in service order.
    pub display_metrics: Vec<DisplayMetric>,
    /// Processing metadata, when reported.
    pub metadata: Option<MetadataView>,
}

/// One labeled metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayMetric {
    /// Raw metric code.
    pub key: String,
    /// Friendly label, or the raw code when no label is known.
    pub label: String,
    /// Scalar value.
    pub value: MetricValue,
    /// `"<key>: <value>"`.
    pub description: String,
}

/// List section whose visibility is decided at assembly time.
///
/// Items are kept even when the section is hidden; an empty list is never
/// rendered as a section with zero entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatedSection {
    items: Vec<String>,
    visible: bool,
}

impl GatedSection {
    /// Wraps items; the section is visible only when `items` is non-empty.
    pub fn new(items: Vec<String>) -> Self {
        let visible = !items.is_empty();
        Self { items, visible }
    }

    /// All items, regardless of visibility.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns `true` when the section should be materialized.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Items for rendering, or `None` when the section is suppressed.
    pub fn visible_items(&self) -> Option<&[String]> {
        self.visible.then_some(self.items.as_slice())
    }
}

/// Processing metadata carried into the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataView {
    /// Service-side assessment identifier.
    pub assessment_id: String,
    /// Processing time reported by the service.
    pub processing_time_seconds: f64,
    /// Parsed timestamp; `None` when the raw value was not ISO-8601.
    #[serde(with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    /// Timestamp exactly as received.
    pub timestamp_raw: String,
    /// Service API version.
    pub api_version: String,
}

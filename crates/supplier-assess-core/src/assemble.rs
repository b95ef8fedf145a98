//! Composition of the resolvers into an [`AssessmentView`].

use supplier_assess_contract::{AssessmentMetadata, AssessmentResult};
use time::format_description::well_known::Iso8601;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, warn};

use crate::{
    AssessmentView, DisplayMetric, FinalDecision, GatedSection, MetadataView, ValidationError,
    classify, clamp_score, describe_metric, resolve_confidence, resolve_metric_label,
    resolve_tier, risk_percentage,
};

/// Validates a raw payload and derives its display view.
///
/// An empty or unrecognized final decision is accepted as
/// [`FinalDecision::Unknown`]; only its absence is rejected. Out-of-range
/// scores are clamped.
///
/// # Errors
/// Returns [`ValidationError::EmptySupplierId`] for a blank supplier id.
/// Returns [`ValidationError::MissingRiskScore`] or
/// [`ValidationError::NonFiniteRiskScore`] when the score is unusable.
/// Returns [`ValidationError::MissingFinalDecision`] when the decision field
/// is absent.
pub fn assemble(raw: &AssessmentResult) -> Result<AssessmentView, ValidationError> {
    if raw.supplier_id.trim().is_empty() {
        return Err(ValidationError::EmptySupplierId);
    }

    let score = raw.risk_score.ok_or(ValidationError::MissingRiskScore)?;
    if !score.is_finite() {
        return Err(ValidationError::NonFiniteRiskScore(score));
    }

    let analysis = &raw.decision_analysis;
    let decision_code = analysis
        .final_decision
        .as_deref()
        .ok_or(ValidationError::MissingFinalDecision)?;

    if !(0.0..=1.0).contains(&score) {
        warn!(supplier_id = %raw.supplier_id, score, "risk score outside [0, 1], clamping");
    }
    let risk_score = clamp_score(score);

    let final_decision = FinalDecision::from_code(decision_code);
    if final_decision.is_unknown() {
        warn!(supplier_id = %raw.supplier_id, code = decision_code, "unrecognized final decision");
    }

    let tier_descriptor = resolve_tier(&analysis.decision_tier);
    if !tier_descriptor.is_recognized() {
        debug!(code = %analysis.decision_tier, "decision tier has no known marker");
    }

    let display_metrics = raw
        .metrics
        .iter()
        .map(|(key, value)| DisplayMetric {
            key: key.to_string(),
            label: resolve_metric_label(key).to_string(),
            value: value.clone(),
            description: describe_metric(key, value),
        })
        .collect();

    Ok(AssessmentView {
        supplier_id: raw.supplier_id.clone(),
        risk_score,
        risk_percentage: risk_percentage(risk_score),
        risk_band: classify(risk_score),
        tier_descriptor,
        confidence_bucket: resolve_confidence(&analysis.confidence_level),
        final_decision,
        reasoning: analysis.reasoning.clone(),
        risk_factors: GatedSection::new(analysis.risk_factors.clone()),
        mitigation_suggestions: GatedSection::new(analysis.mitigation_suggestions.clone()),
        review_required: analysis.review_required,
        raw_decision_text: raw.raw_decision_text.clone(),
        display_metrics,
        metadata: raw.metadata.as_ref().map(metadata_view),
    })
}

fn metadata_view(metadata: &AssessmentMetadata) -> MetadataView {
    let timestamp = parse_timestamp(&metadata.timestamp);
    if timestamp.is_none() && !metadata.timestamp.is_empty() {
        warn!(raw = %metadata.timestamp, "assessment timestamp is not ISO-8601");
    }

    MetadataView {
        assessment_id: metadata.assessment_id.clone(),
        processing_time_seconds: metadata.processing_time_seconds,
        timestamp,
        timestamp_raw: metadata.timestamp.clone(),
        api_version: metadata.api_version.clone(),
    }
}

/// Parses an ISO-8601 timestamp; values without an offset are taken as UTC.
fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Iso8601::DEFAULT)
        .ok()
        .or_else(|| {
            PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
                .ok()
                .map(PrimitiveDateTime::assume_utc)
        })
}

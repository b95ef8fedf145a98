//! Tests payload validation performed by the result assembler.

use supplier_assess_contract::{
    AssessmentResult, DecisionAnalysis, MetricMap, parse_assessment_response,
};
use supplier_assess_core::{FinalDecision, RiskBand, ValidationError, assemble};

fn valid_result() -> AssessmentResult {
    AssessmentResult {
        supplier_id: "SUP-1001".to_string(),
        risk_score: Some(0.5),
        decision_analysis: DecisionAnalysis {
            final_decision: Some("APPROVE".to_string()),
            decision_tier: "TIER_4_STANDARD".to_string(),
            confidence_level: "HIGH".to_string(),
            reasoning: vec!["Stable delivery history".to_string()],
            risk_factors: vec![],
            mitigation_suggestions: vec![],
            review_required: false,
        },
        raw_decision_text: String::new(),
        metrics: MetricMap::new(),
        metadata: None,
    }
}

#[test]
fn assemble_validation_tests_rejects_empty_supplier_id() {
    let mut raw = valid_result();
    raw.supplier_id = String::new();
    assert_eq!(assemble(&raw), Err(ValidationError::EmptySupplierId));

    raw.supplier_id = "   ".to_string();
    assert_eq!(assemble(&raw), Err(ValidationError::EmptySupplierId));
}

#[test]
fn assemble_validation_tests_rejects_unusable_risk_scores() {
    let mut raw = valid_result();
    raw.risk_score = None;
    assert_eq!(assemble(&raw), Err(ValidationError::MissingRiskScore));

    raw.risk_score = Some(f64::NAN);
    assert!(matches!(
        assemble(&raw),
        Err(ValidationError::NonFiniteRiskScore(_))
    ));

    raw.risk_score = Some(f64::INFINITY);
    assert!(matches!(
        assemble(&raw),
        Err(ValidationError::NonFiniteRiskScore(_))
    ));
}

#[test]
fn assemble_validation_tests_rejects_missing_final_decision() {
    let mut raw = valid_result();
    raw.decision_analysis.final_decision = None;
    assert_eq!(assemble(&raw), Err(ValidationError::MissingFinalDecision));
}

#[test]
fn assemble_validation_tests_tolerates_empty_and_unseen_decisions() {
    let mut raw = valid_result();
    raw.decision_analysis.final_decision = Some(String::new());
    let view = assemble(&raw).expect("empty decision should be tolerated");
    assert_eq!(view.final_decision, FinalDecision::Unknown(String::new()));
    assert_eq!(view.final_decision.label(), "Unknown");

    raw.decision_analysis.final_decision = Some("ESCALATE_TO_BOARD".to_string());
    let view = assemble(&raw).expect("unseen decision should be tolerated");
    assert!(view.final_decision.is_unknown());
    assert_eq!(view.final_decision.code(), "ESCALATE_TO_BOARD");
}

#[test]
fn assemble_validation_tests_clamps_out_of_range_scores() {
    let mut raw = valid_result();
    raw.risk_score = Some(1.7);
    let view = assemble(&raw).expect("out-of-range score should clamp");
    assert_eq!(view.risk_score, 1.0);
    assert_eq!(view.risk_percentage, 100);
    assert_eq!(view.risk_band, RiskBand::Critical);

    raw.risk_score = Some(-0.2);
    let view = assemble(&raw).expect("negative score should clamp");
    assert_eq!(view.risk_score, 0.0);
    assert_eq!(view.risk_band, RiskBand::Low);
}

#[test]
fn assemble_validation_tests_error_messages_name_the_field() {
    assert!(ValidationError::EmptySupplierId.to_string().contains("supplier id"));
    assert!(ValidationError::MissingFinalDecision.to_string().contains("final decision"));
    assert!(ValidationError::NonFiniteRiskScore(f64::NAN).to_string().contains("risk score"));
}

#[test]
fn assemble_validation_tests_absent_decision_analysis_is_missing_decision() {
    let raw = parse_assessment_response(r#"{"result":{"supplier_id":"S","risk_score":0.1}}"#)
        .expect("payload without decision analysis should decode");
    assert_eq!(assemble(&raw), Err(ValidationError::MissingFinalDecision));
}

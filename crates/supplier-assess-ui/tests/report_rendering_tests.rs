//! Integration tests for report projection of assessment views.

use supplier_assess_contract::parse_assessment_response;
use supplier_assess_core::{AssessmentView, assemble};
use supplier_assess_ui::{AssessmentSession, SessionState, headings, render_report};

fn view_from(raw: &str) -> AssessmentView {
    let result = parse_assessment_response(raw).expect("fixture should decode");
    assemble(&result).expect("fixture should assemble")
}

fn full_view() -> AssessmentView {
    view_from(
        r#"{"result":{
            "supplier_id":"SUP-77",
            "risk_score":0.8123,
            "decision_analysis":{
                "final_decision":"REJECT",
                "decision_tier":"TIER_1_SANCTIONS",
                "confidence_level":"CERTAIN",
                "reasoning":["Supplier appears on a sanctions list"],
                "risk_factors":["sanctions"],
                "mitigation_suggestions":["Source from an alternate supplier"],
                "review_required":true
            },
            "raw_decision_text":"Rejected.\nSanctions match confirmed.",
            "metrics":{"sanctioned":true,"new_signal":3},
            "metadata":{
                "assessment_id":"a-1",
                "processing_time_seconds":1.5,
                "timestamp":"2025-06-01T08:30:00Z",
                "api_version":"2.0"
            }
        }}"#,
    )
}

#[test]
fn report_rendering_tests_orders_all_sections() {
    let report = render_report(&full_view());
    let order: Vec<&str> = report
        .sections
        .iter()
        .map(|section| section.heading.as_str())
        .collect();

    assert_eq!(
        order,
        vec![
            headings::DECISION_SUMMARY,
            headings::DECISION_REASONING,
            headings::RISK_FACTORS,
            headings::MITIGATION_SUGGESTIONS,
            headings::AI_ANALYSIS,
            headings::SUPPLIER_METRICS,
        ]
    );
}

#[test]
fn report_rendering_tests_summarizes_decision() {
    let report = render_report(&full_view());
    let summary = report
        .section(headings::DECISION_SUMMARY)
        .expect("summary section");

    assert_eq!(
        summary.lines[..6],
        [
            "Supplier ID: SUP-77",
            "Decision: Rejected",
            "Risk Score: 0.812 (81%) - Critical Risk",
            "Decision Tier: Tier 1 - Absolute",
            "Confidence Level: CERTAIN (positive)",
            "Manual Review Required",
        ]
    );
    assert!(summary.lines.contains(&"Assessed At: 2025-06-01T08:30:00Z".to_string()));
    assert!(summary.lines.contains(&"Processing Time: 1.50s".to_string()));
}

#[test]
fn report_rendering_tests_suppresses_empty_gated_sections() {
    let view = view_from(
        r#"{"result":{
            "supplier_id":"SUP-3",
            "risk_score":0.1,
            "decision_analysis":{
                "final_decision":"APPROVE",
                "decision_tier":"TIER_4",
                "confidence_level":"HIGH",
                "reasoning":["Clean record"],
                "risk_factors":[],
                "mitigation_suggestions":[],
                "review_required":false
            },
            "raw_decision_text":""
        }}"#,
    );
    let report = render_report(&view);

    assert!(report.section(headings::RISK_FACTORS).is_none());
    assert!(report.section(headings::MITIGATION_SUGGESTIONS).is_none());
    let summary = report
        .section(headings::DECISION_SUMMARY)
        .expect("summary section");
    assert!(!summary.lines.iter().any(|line| line == "Manual Review Required"));
}

#[test]
fn report_rendering_tests_lists_metrics_with_descriptions() {
    let report = render_report(&full_view());
    let metrics = report
        .section(headings::SUPPLIER_METRICS)
        .expect("metrics section");

    assert_eq!(
        metrics.lines,
        vec![
            "Sanctions Status: true",
            "  sanctioned: true",
            "new_signal: 3",
            "  new_signal: 3",
        ]
    );
}

#[test]
fn report_rendering_tests_text_output_contains_headings() {
    let text = render_report(&full_view()).to_string();

    assert!(text.starts_with("Assessment Results\n"));
    assert!(text.contains("== AI Analysis ==\nRejected.\nSanctions match confirmed.\n"));
    assert!(text.contains("== Risk Factors ==\n- sanctions\n"));
}

#[test]
fn report_rendering_tests_session_drops_previous_view_on_new_assessment() {
    let mut session = AssessmentSession::new();
    assert!(session.begin_submission());
    assert!(session.complete(full_view()));
    assert_eq!(session.view().map(|view| view.supplier_id.as_str()), Some("SUP-77"));
    assert_eq!(session.status_text(), "Assessment generated successfully");

    assert!(session.begin_submission());
    assert!(session.view().is_none());

    session.reset();
    assert_eq!(session.state(), &SessionState::Idle);
    assert!(!session.complete(full_view()), "idle session ignores late results");
}

#![warn(missing_docs)]
//! # supplier-assess-benchmarks
//!
//! Deterministic payload generators for latency smoke tests of the
//! parse -> assemble -> render pipeline.

/// Builds a success body with `metric_count` metrics and a score derived
/// from `seed`.
pub fn synthetic_response(seed: u32, metric_count: usize) -> String {
    let score = f64::from(seed % 1_000) / 1_000.0;
    let metrics = (0..metric_count)
        .map(|index| format!("\"metric_{index}\":{}", index * 7 % 100))
        .collect::<Vec<_>>()
        .join(",");
    let tier = seed % 4 + 1;

    format!(
        r#"{{"result":{{
            "supplier_id":"SUP-{seed}",
            "risk_score":{score},
            "decision_analysis":{{
                "final_decision":"REQUIRES_REVIEW",
                "decision_tier":"TIER_{tier}",
                "confidence_level":"MEDIUM",
                "reasoning":["synthetic reasoning"],
                "risk_factors":["synthetic factor"],
                "mitigation_suggestions":[],
                "review_required":true
            }},
            "raw_decision_text":"synthetic narrative",
            "metrics":{{{metrics}}}
        }}}}"#
    )
}

//! Benchmark smoke test for the parse/assemble/render loop.

use std::time::Instant;

use supplier_assess_benchmarks::synthetic_response;
use supplier_assess_contract::parse_assessment_response;
use supplier_assess_core::assemble;
use supplier_assess_ui::render_report;

#[test]
fn benchmark_pipeline_smoke_prints_latency() {
    let bodies: Vec<String> = (0..1_000).map(|seed| synthetic_response(seed, 40)).collect();

    let start = Instant::now();
    let mut rendered_bytes = 0usize;

    for body in &bodies {
        let raw = parse_assessment_response(body).expect("synthetic body should decode");
        let view = assemble(&raw).expect("synthetic body should assemble");
        assert_eq!(view.display_metrics.len(), 40);
        rendered_bytes += render_report(&view).to_string().len();
    }

    let elapsed_ms = start.elapsed().as_millis();
    println!("benchmark_pipeline_elapsed_ms={elapsed_ms}");
    println!("benchmark_rendered_total_bytes={rendered_bytes}");

    // Lightweight guardrail; strict latency budgets are environment-specific.
    assert!(
        elapsed_ms < 10_000,
        "pipeline smoke benchmark should stay bounded"
    );
}

//! Metric code to display label resolution.

use supplier_assess_contract::MetricValue;

/// Known metric codes and their display labels.
const METRIC_LABELS: &[(&str, &str)] = &[
    ("avg_otd", "Average On-Time Delivery"),
    ("avg_ppm", "Average Defect Rate (PPM)"),
    ("open_majors", "Open Major Non-Conformances"),
    ("open_minors", "Open Minor Non-Conformances"),
    ("fin_score", "Financial Stability Score"),
    ("geo_score", "Geopolitical Risk Score"),
    ("esg_score", "ESG Score"),
    ("sanctioned", "Sanctions Status"),
    ("cyber_score", "Cybersecurity Score"),
    ("audit_score", "Audit Score"),
    ("lead_time_days", "Average Lead Time (Days)"),
    ("capacity_util", "Capacity Utilization"),
    ("single_source", "Single-Source Dependency"),
    ("certifications", "Active Certifications"),
];

/// Returns the display label for a metric code.
///
/// Unknown codes are returned unchanged so a metric is never dropped when
/// the service introduces a new key.
pub fn resolve_metric_label(key: &str) -> &str {
    METRIC_LABELS
        .iter()
        .find(|(code, _)| *code == key)
        .map_or(key, |(_, label)| label)
}

/// Builds the `"<key>: <value>"` description that keeps the raw code
/// recoverable next to its friendly label.
pub fn describe_metric(key: &str, value: &MetricValue) -> String {
    format!("{key}: {value}")
}

/// Lists every metric code with a dedicated label.
pub fn known_metric_codes() -> impl Iterator<Item = &'static str> {
    METRIC_LABELS.iter().map(|(code, _)| *code)
}

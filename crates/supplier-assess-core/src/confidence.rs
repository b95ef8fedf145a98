//! Confidence label bucketing.

use serde::Serialize;

/// Confidence level stated by the assessment engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConfidenceLevel {
    /// `CERTAIN`
    Certain,
    /// `HIGH`
    High,
    /// `MEDIUM`
    Medium,
    /// `LOW`
    Low,
    /// Anything else, including the empty string.
    Unknown,
}

impl ConfidenceLevel {
    /// Parses a confidence code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Self {
        match code {
            "CERTAIN" => ConfidenceLevel::Certain,
            "HIGH" => ConfidenceLevel::High,
            "MEDIUM" => ConfidenceLevel::Medium,
            "LOW" => ConfidenceLevel::Low,
            _ => ConfidenceLevel::Unknown,
        }
    }

    /// Presentation severity for this level.
    pub fn severity(self) -> ConfidenceSeverity {
        match self {
            ConfidenceLevel::Certain | ConfidenceLevel::High => ConfidenceSeverity::Positive,
            ConfidenceLevel::Medium => ConfidenceSeverity::Caution,
            ConfidenceLevel::Low => ConfidenceSeverity::Negative,
            ConfidenceLevel::Unknown => ConfidenceSeverity::Neutral,
        }
    }
}

/// Presentation-neutral severity of a confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceSeverity {
    /// Confident result.
    Positive,
    /// Treat with some caution.
    Caution,
    /// Low confidence.
    Negative,
    /// Unrecognized level.
    Neutral,
}

impl ConfidenceSeverity {
    /// Lower-case name used by presentation code.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceSeverity::Positive => "positive",
            ConfidenceSeverity::Caution => "caution",
            ConfidenceSeverity::Negative => "negative",
            ConfidenceSeverity::Neutral => "neutral",
        }
    }
}

/// Severity bucket plus the verbatim label it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConfidenceBucket {
    /// Parsed level.
    pub level: ConfidenceLevel,
    /// Presentation severity.
    pub severity: ConfidenceSeverity,
    /// Label exactly as received.
    pub label: String,
}

/// Resolves a confidence label into its bucket. Total over all strings.
pub fn resolve_confidence(label: &str) -> ConfidenceBucket {
    let level = ConfidenceLevel::from_code(label);
    ConfidenceBucket {
        level,
        severity: level.severity(),
        label: label.to_string(),
    }
}

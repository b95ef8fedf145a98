//! Continuous risk score to discrete band classification.

use serde::Serialize;

/// Inclusive upper bound of the Low band.
const LOW_UPPER: f64 = 0.25;
/// Inclusive upper bound of the Moderate band.
const MODERATE_UPPER: f64 = 0.50;
/// Inclusive upper bound of the High band.
const HIGH_UPPER: f64 = 0.75;

/// Discrete severity bucket for a risk score.
///
/// Variants are declared in rank order, so derived ordering sorts by
/// severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskBand {
    /// Score up to and including 0.25.
    Low,
    /// Score above 0.25 up to and including 0.50.
    Moderate,
    /// Score above 0.50 up to and including 0.75.
    High,
    /// Score above 0.75.
    Critical,
}

impl RiskBand {
    /// Sortable rank: 0 for Low through 3 for Critical.
    pub fn rank(self) -> u8 {
        match self {
            RiskBand::Low => 0,
            RiskBand::Moderate => 1,
            RiskBand::High => 2,
            RiskBand::Critical => 3,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
            RiskBand::Critical => "Critical Risk",
        }
    }
}

/// Clamps a score into [0.0, 1.0]. NaN maps to 0.0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Classifies a risk score into a band.
///
/// Out-of-range input is clamped first. Band boundaries (0.25, 0.50, 0.75)
/// belong to the lower band.
///
/// Bands follow the unrounded score, so a score just past a boundary (for
/// example 0.252) lands in the upper band while [`risk_percentage`] still
/// shows the lower-side value (25%).
pub fn classify(score: f64) -> RiskBand {
    let score = clamp_score(score);
    if score <= LOW_UPPER {
        RiskBand::Low
    } else if score <= MODERATE_UPPER {
        RiskBand::Moderate
    } else if score <= HIGH_UPPER {
        RiskBand::High
    } else {
        RiskBand::Critical
    }
}

/// Rounds a score to a 0-100 display percentage.
pub fn risk_percentage(score: f64) -> u8 {
    // Clamped input keeps the product within 0..=100.
    (clamp_score(score) * 100.0).round() as u8
}

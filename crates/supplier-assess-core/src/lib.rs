#![warn(missing_docs)]
//! # supplier-assess-core
//!
//! ## Purpose
//! Turns a loosely-typed assessment payload into a displayable decision model
//! with consistent banding, labeling, and fallback behavior.
//!
//! ## Responsibilities
//! - Resolve metric codes to human-readable labels ([`resolve_metric_label`]).
//! - Band continuous risk scores ([`classify`]).
//! - Resolve decision tier codes ([`resolve_tier`]).
//! - Bucket confidence labels ([`resolve_confidence`]).
//! - Normalize final decision codes ([`FinalDecision`]).
//! - Compose all of the above into an [`AssessmentView`] ([`assemble`]).
//!
//! ## Data flow
//! [`AssessmentResult`] -> [`assemble`] (validation, then the resolvers) ->
//! [`AssessmentView`] consumed by the presentation layer.
//!
//! ## Ownership and lifetimes
//! The assembler borrows its input and returns an owned view, so a caller can
//! drop the raw payload as soon as the view exists. Lookup tables are
//! `const` data and never mutated, so derivations may run in parallel.
//!
//! ## Error model
//! Every resolver is total. Only [`assemble`] fails, returning
//! [`ValidationError`] for an empty supplier id, a missing or non-finite risk
//! score, or a missing final decision.
//!
//! ## Example
//! ```rust
//! use supplier_assess_core::{classify, resolve_tier, RiskBand};
//!
//! assert_eq!(classify(0.25), RiskBand::Low);
//! assert_eq!(resolve_tier("TIER_1_AND_TIER_2").rank(), Some(1));
//! ```

mod assemble;
mod confidence;
mod decision;
mod metric;
mod risk;
mod tier;
mod view;

pub use assemble::assemble;
pub use confidence::{ConfidenceBucket, ConfidenceLevel, ConfidenceSeverity, resolve_confidence};
pub use decision::FinalDecision;
pub use metric::{describe_metric, known_metric_codes, resolve_metric_label};
pub use risk::{RiskBand, classify, clamp_score, risk_percentage};
pub use supplier_assess_contract::{AssessmentResult, MetricValue};
pub use tier::{DecisionTier, TierDescriptor, resolve_tier};
pub use view::{AssessmentView, DisplayMetric, GatedSection, MetadataView};

use thiserror::Error;

/// Reasons an assessment payload cannot be turned into a view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Supplier identifier is empty or whitespace.
    #[error("assessment is missing a supplier id")]
    EmptySupplierId,
    /// Risk score was not supplied.
    #[error("assessment is missing a risk score")]
    MissingRiskScore,
    /// Risk score is NaN or infinite.
    #[error("assessment risk score {0} is not a finite number")]
    NonFiniteRiskScore(f64),
    /// `decision_analysis.final_decision` is absent.
    #[error("assessment decision analysis is missing a final decision")]
    MissingFinalDecision,
}

#![warn(missing_docs)]
//! # supplier-assess-ui
//!
//! ## Purpose
//! Defines the presentation-side model for `supplier-assess`.
//!
//! ## Responsibilities
//! - Track one assessment session from form entry to result or failure.
//! - Project an [`AssessmentView`] into ordered, display-ready report
//!   sections, materializing gated sections only when they have content.
//!
//! ## Data flow
//! Orchestration events drive [`AssessmentSession`]; a ready session hands
//! its view to [`render_report`], whose [`Report`] is printed by the shell.
//!
//! ## Ownership and lifetimes
//! The session owns the current view outright. Starting a new assessment
//! drops it, so no view outlives the assessment it was derived from.
//!
//! ## Error model
//! This crate favors explicit state over recoverable errors. Invalid
//! transitions are refused by guard methods returning `false`.

use std::fmt;

use supplier_assess_core::AssessmentView;
use time::format_description::well_known::Rfc3339;

/// Lifecycle state of one assessment session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Form is open; nothing submitted yet.
    Idle,
    /// A request is in flight.
    Submitting,
    /// Latest assessment is available.
    Ready(Box<AssessmentView>),
    /// Latest submission failed with a user-facing message.
    Failed(String),
}

/// Single-owner holder of the current assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSession {
    state: SessionState,
}

impl AssessmentSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns `true` when no request is in flight.
    pub fn can_submit(&self) -> bool {
        !matches!(self.state, SessionState::Submitting)
    }

    /// Moves to [`SessionState::Submitting`], dropping any previous result.
    ///
    /// Returns `false` and leaves state untouched while a request is in
    /// flight.
    pub fn begin_submission(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.state = SessionState::Submitting;
        true
    }

    /// Stores a derived view. Ignored unless a request is in flight.
    pub fn complete(&mut self, view: AssessmentView) -> bool {
        if !matches!(self.state, SessionState::Submitting) {
            return false;
        }
        self.state = SessionState::Ready(Box::new(view));
        true
    }

    /// Records a failure message. Ignored unless a request is in flight.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !matches!(self.state, SessionState::Submitting) {
            return false;
        }
        self.state = SessionState::Failed(message.into());
        true
    }

    /// Discards the current result and returns to the form.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Returns the current view when the session is ready.
    pub fn view(&self) -> Option<&AssessmentView> {
        match &self.state {
            SessionState::Ready(view) => Some(view.as_ref()),
            _ => None,
        }
    }

    /// Short human-readable status line.
    pub fn status_text(&self) -> String {
        match &self.state {
            SessionState::Idle => "No assessment yet".to_string(),
            SessionState::Submitting => "Processing...".to_string(),
            SessionState::Ready(_) => "Assessment generated successfully".to_string(),
            SessionState::Failed(message) => message.clone(),
        }
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully rendered assessment report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Report title.
    pub title: String,
    /// Sections in display order.
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Finds a section by heading.
    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections
            .iter()
            .find(|section| section.heading == heading)
    }
}

/// One titled block of report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// Section heading.
    pub heading: String,
    /// Lines in display order.
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new(heading: &str, lines: Vec<String>) -> Self {
        Self {
            heading: heading.to_string(),
            lines,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "== {} ==", section.heading)?;
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Section heading constants.
pub mod headings {
    /// Decision summary block.
    pub const DECISION_SUMMARY: &str = "Decision Summary";
    /// Reasoning list.
    pub const DECISION_REASONING: &str = "Decision Reasoning";
    /// Risk factor list, gated on content.
    pub const RISK_FACTORS: &str = "Risk Factors";
    /// Mitigation list, gated on content.
    pub const MITIGATION_SUGGESTIONS: &str = "Mitigation Suggestions";
    /// Raw narrative.
    pub const AI_ANALYSIS: &str = "AI Analysis";
    /// Metric list.
    pub const SUPPLIER_METRICS: &str = "Supplier Metrics";
}

/// Projects a view into report sections.
pub fn render_report(view: &AssessmentView) -> Report {
    let mut sections = vec![
        ReportSection::new(headings::DECISION_SUMMARY, summary_lines(view)),
        ReportSection::new(headings::DECISION_REASONING, bullets(&view.reasoning)),
    ];

    if let Some(factors) = view.risk_factors.visible_items() {
        sections.push(ReportSection::new(headings::RISK_FACTORS, bullets(factors)));
    }
    if let Some(suggestions) = view.mitigation_suggestions.visible_items() {
        sections.push(ReportSection::new(
            headings::MITIGATION_SUGGESTIONS,
            bullets(suggestions),
        ));
    }

    sections.push(ReportSection::new(
        headings::AI_ANALYSIS,
        view.raw_decision_text.lines().map(str::to_string).collect(),
    ));
    sections.push(ReportSection::new(
        headings::SUPPLIER_METRICS,
        view.display_metrics
            .iter()
            .flat_map(|metric| {
                [
                    format!("{}: {}", metric.label, metric.value),
                    format!("  {}", metric.description),
                ]
            })
            .collect(),
    ));

    Report {
        title: "Assessment Results".to_string(),
        sections,
    }
}

fn summary_lines(view: &AssessmentView) -> Vec<String> {
    let mut lines = vec![
        format!("Supplier ID: {}", view.supplier_id),
        format!("Decision: {}", view.final_decision.label()),
        format!(
            "Risk Score: {:.3} ({}%) - {}",
            view.risk_score,
            view.risk_percentage,
            view.risk_band.label()
        ),
        format!("Decision Tier: {}", view.tier_descriptor.label),
        format!(
            "Confidence Level: {} ({})",
            view.confidence_bucket.label,
            view.confidence_bucket.severity.as_str()
        ),
    ];

    if view.review_required {
        lines.push("Manual Review Required".to_string());
    }

    if let Some(metadata) = &view.metadata {
        lines.push(format!("Assessment ID: {}", metadata.assessment_id));
        let assessed_at = metadata
            .timestamp
            .and_then(|timestamp| timestamp.format(&Rfc3339).ok())
            .unwrap_or_else(|| metadata.timestamp_raw.clone());
        lines.push(format!("Assessed At: {assessed_at}"));
        lines.push(format!(
            "Processing Time: {:.2}s",
            metadata.processing_time_seconds
        ));
        lines.push(format!("API Version: {}", metadata.api_version));
    }

    lines
}

fn bullets(items: &[String]) -> Vec<String> {
    items.iter().map(|item| format!("- {item}")).collect()
}

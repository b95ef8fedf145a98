//! Final decision normalization.

use serde::{Serialize, Serializer};

/// Final decision of an assessment.
///
/// Unrecognized codes are kept verbatim in [`FinalDecision::Unknown`] rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FinalDecision {
    /// `APPROVE`
    Approve,
    /// `CONDITIONAL_APPROVE`
    ConditionalApprove,
    /// `REQUIRES_REVIEW`
    RequiresReview,
    /// `REJECT`
    Reject,
    /// Any other code, including the empty string.
    Unknown(String),
}

impl FinalDecision {
    /// Parses a decision code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Self {
        match code {
            "APPROVE" => FinalDecision::Approve,
            "CONDITIONAL_APPROVE" => FinalDecision::ConditionalApprove,
            "REQUIRES_REVIEW" => FinalDecision::RequiresReview,
            "REJECT" => FinalDecision::Reject,
            other => FinalDecision::Unknown(other.to_string()),
        }
    }

    /// Wire code; the raw code for unknown decisions.
    pub fn code(&self) -> &str {
        match self {
            FinalDecision::Approve => "APPROVE",
            FinalDecision::ConditionalApprove => "CONDITIONAL_APPROVE",
            FinalDecision::RequiresReview => "REQUIRES_REVIEW",
            FinalDecision::Reject => "REJECT",
            FinalDecision::Unknown(code) => code,
        }
    }

    /// Badge label shown next to the decision summary.
    pub fn label(&self) -> &'static str {
        match self {
            FinalDecision::Approve => "Approved",
            FinalDecision::ConditionalApprove => "Conditional Approval",
            FinalDecision::RequiresReview => "Review Required",
            FinalDecision::Reject => "Rejected",
            FinalDecision::Unknown(_) => "Unknown",
        }
    }

    /// Returns `true` for [`FinalDecision::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, FinalDecision::Unknown(_))
    }
}

impl Serialize for FinalDecision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

//! Decision tier code resolution.

use std::cmp::Ordering;

use serde::Serialize;

/// Risk-policy tier, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DecisionTier {
    /// `TIER_1`: absolute policy block.
    Tier1,
    /// `TIER_2`: high risk.
    Tier2,
    /// `TIER_3`: moderate risk.
    Tier3,
    /// `TIER_4`: low risk.
    Tier4,
}

/// Markers are tested in this order; the first contained marker wins.
const TIER_PRIORITY: [DecisionTier; 4] = [
    DecisionTier::Tier1,
    DecisionTier::Tier2,
    DecisionTier::Tier3,
    DecisionTier::Tier4,
];

impl DecisionTier {
    /// Substring marker identifying this tier inside a tier code.
    pub fn marker(self) -> &'static str {
        match self {
            DecisionTier::Tier1 => "TIER_1",
            DecisionTier::Tier2 => "TIER_2",
            DecisionTier::Tier3 => "TIER_3",
            DecisionTier::Tier4 => "TIER_4",
        }
    }

    /// Ordinal rank, 1 (most severe) through 4.
    pub fn rank(self) -> u8 {
        match self {
            DecisionTier::Tier1 => 1,
            DecisionTier::Tier2 => 2,
            DecisionTier::Tier3 => 3,
            DecisionTier::Tier4 => 4,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            DecisionTier::Tier1 => "Tier 1 - Absolute",
            DecisionTier::Tier2 => "Tier 2 - High Risk",
            DecisionTier::Tier3 => "Tier 3 - Moderate",
            DecisionTier::Tier4 => "Tier 4 - Low Risk",
        }
    }
}

/// Canonical descriptor for a tier code.
///
/// Descriptors order by severity, with unrecognized codes after every known
/// tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TierDescriptor {
    /// Recognized tier, or `None` when the code carried no known marker.
    pub tier: Option<DecisionTier>,
    /// Display label; the verbatim code when unrecognized.
    pub label: String,
}

impl TierDescriptor {
    /// Ordinal rank of the recognized tier.
    pub fn rank(&self) -> Option<u8> {
        self.tier.map(DecisionTier::rank)
    }

    /// Returns `true` when the code matched a known marker.
    pub fn is_recognized(&self) -> bool {
        self.tier.is_some()
    }
}

impl Ord for TierDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.tier, other.tier) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.label.cmp(&other.label),
        }
    }
}

impl PartialOrd for TierDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Resolves a tier code by case-sensitive substring search.
pub fn resolve_tier(code: &str) -> TierDescriptor {
    match TIER_PRIORITY
        .into_iter()
        .find(|tier| code.contains(tier.marker()))
    {
        Some(tier) => TierDescriptor {
            tier: Some(tier),
            label: tier.label().to_string(),
        },
        None => TierDescriptor {
            tier: None,
            label: code.to_string(),
        },
    }
}

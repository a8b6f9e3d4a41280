use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// NCCN risk group, ordered from least to most severe.
///
/// The derived `Ord` follows declaration order, so comparing two groups
/// (or taking the `max` of several) yields the worse one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskGroup {
    VeryLow,
    Low,
    IntermediateFavorable,
    IntermediateUnfavorable,
    High,
    VeryHigh,
}

impl RiskGroup {
    /// All groups in severity order.
    pub const ALL: [RiskGroup; 6] = [
        RiskGroup::VeryLow,
        RiskGroup::Low,
        RiskGroup::IntermediateFavorable,
        RiskGroup::IntermediateUnfavorable,
        RiskGroup::High,
        RiskGroup::VeryHigh,
    ];

    /// 1-based severity rank (Very Low = 1, Very High = 6).
    pub fn rank(self) -> u8 {
        self as u8 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskGroup::VeryLow => "Very Low",
            RiskGroup::Low => "Low",
            RiskGroup::IntermediateFavorable => "Intermediate - Favorable",
            RiskGroup::IntermediateUnfavorable => "Intermediate - Unfavorable",
            RiskGroup::High => "High",
            RiskGroup::VeryHigh => "Very High",
        }
    }

    /// The worst group in `groups`, or `None` when empty.
    pub fn worst<I>(groups: I) -> Option<RiskGroup>
    where
        I: IntoIterator<Item = RiskGroup>,
    {
        groups.into_iter().max()
    }
}

impl fmt::Display for RiskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

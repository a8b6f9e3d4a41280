use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::grade::GradeGroup;
use super::risk::RiskGroup;
use super::specimen::{CoreFraction, Specimen};

/// Everything derived from one `Provider:` chunk of report text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EncounterReport {
    /// `None` when the report has no parseable `Collected:` date.
    #[ts(type = "string | null")]
    pub collected: Option<jiff::civil::Date>,
    #[ts(type = "string | null")]
    pub date_of_birth: Option<jiff::civil::Date>,
    pub specimens: Vec<Specimen>,
    pub aggregated_cores: CoreFraction,
    pub max_grade_group: GradeGroup,
    pub risk_group: RiskGroup,
}

impl EncounterReport {
    /// Collected date for display, `Unknown` when absent.
    pub fn collected_label(&self) -> String {
        match self.collected {
            Some(date) => date.strftime("%-m/%-d/%Y").to_string(),
            None => "Unknown".to_string(),
        }
    }

    pub fn specimen(&self, label: char) -> Option<&Specimen> {
        self.specimens.iter().find(|s| s.label == label)
    }
}

/// Denominator policy for the encounter-level core count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregationPolicy {
    /// Cores in a standard systematic biopsy; target lesions add one each.
    pub systematic_cores: u32,
}

impl AggregationPolicy {
    pub const DEFAULT_SYSTEMATIC_CORES: u32 = 14;
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        AggregationPolicy {
            systematic_cores: Self::DEFAULT_SYSTEMATIC_CORES,
        }
    }
}

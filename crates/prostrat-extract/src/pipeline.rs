use jiff::civil::Date;
use prostrat_core::models::clinical::ClinicalInputs;
use prostrat_core::models::grade::GradeGroup;
use prostrat_core::models::report::{AggregationPolicy, EncounterReport};
use prostrat_core::models::risk::RiskGroup;
use prostrat_scoring::risk::classify_risk;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::aggregate::{aggregate_cores, apply_total_override};
use crate::chunk::chunk_reports;
use crate::diagnosis::isolate_diagnosis;
use crate::error::ExtractError;
use crate::metadata::{parse_collected, parse_dob};
use crate::specimen::parse_specimens;

/// Every encounter parsed from one pasted blob, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportBatch {
    pub reports: Vec<EncounterReport>,
    /// First date of birth found across chunks, in input order.
    #[ts(type = "string | null")]
    pub date_of_birth: Option<Date>,
}

impl ReportBatch {
    /// Highest risk group across reports.
    pub fn worst_risk(&self) -> Option<RiskGroup> {
        RiskGroup::worst(self.reports.iter().map(|r| r.risk_group))
    }

    /// Highest representative Gleason sum across reports.
    pub fn max_gleason_sum(&self) -> Option<u8> {
        self.reports
            .iter()
            .map(|r| r.max_grade_group.gleason_sum())
            .max()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Build the report for a single encounter chunk.
pub fn parse_encounter(
    chunk: &str,
    clinical: &ClinicalInputs,
    policy: &AggregationPolicy,
) -> EncounterReport {
    let collected = parse_collected(chunk);
    let specimens = parse_specimens(&isolate_diagnosis(chunk));

    let max_grade_group = specimens
        .iter()
        .map(|s| s.grade_group)
        .max()
        .unwrap_or(GradeGroup::NONE);
    let aggregated_cores = apply_total_override(
        aggregate_cores(&specimens, policy),
        clinical.total_cores_override,
    );
    let risk_group = classify_risk(
        clinical.psa.numeric(),
        max_grade_group,
        &clinical.stage,
        aggregated_cores.positive,
        aggregated_cores.total,
    );

    debug!(
        collected = ?collected,
        specimens = specimens.len(),
        cores = %aggregated_cores,
        risk = %risk_group,
        "parsed encounter"
    );

    EncounterReport {
        collected,
        date_of_birth: parse_dob(chunk),
        specimens,
        aggregated_cores,
        max_grade_group,
        risk_group,
    }
}

/// Parse a pasted blob of one or more reports.
///
/// Reports come back sorted by collected date, newest first; undated
/// reports follow in input order. Fails only when the text is blank or
/// has no `Provider:` line.
pub fn parse_reports(
    raw: &str,
    clinical: &ClinicalInputs,
    policy: &AggregationPolicy,
) -> Result<ReportBatch, ExtractError> {
    let chunks = chunk_reports(raw)?;

    let mut reports: Vec<EncounterReport> = chunks
        .iter()
        .map(|chunk| parse_encounter(chunk, clinical, policy))
        .collect();
    let date_of_birth = reports.iter().find_map(|r| r.date_of_birth);

    // Stable: equal dates keep input order, `None` sorts last.
    reports.sort_by(|a, b| match (a.collected, b.collected) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let batch = ReportBatch {
        reports,
        date_of_birth,
    };
    info!(
        reports = batch.reports.len(),
        worst_risk = ?batch.worst_risk(),
        "parsed reports"
    );
    Ok(batch)
}

//! Per-specimen field extraction. Every field degrades to "unknown"
//! (`None`, zero, or empty) rather than failing the specimen.

pub mod category;
pub mod cores;
pub mod features;
pub mod grade;
pub mod length;
pub mod location;
pub mod pattern;

use prostrat_core::models::specimen::Specimen;
use tracing::{debug, trace};

use crate::specimen::RawSpecimen;

/// Finalize one tokenized specimen.
pub fn extract_specimen(raw: &RawSpecimen) -> Specimen {
    let location = location::normalize_location(&raw.location_text(), raw.label);
    let text = raw.diagnosis_text();

    let specimen = Specimen {
        label: raw.label,
        location: location.location,
        is_target_lesion: location.is_target,
        leftover_site: location.leftover_site,
        diagnosis: category::classify_diagnosis(&text),
        grade_group: grade::extract_grade_group(&text),
        cores_positive: cores::extract_cores_positive(&text),
        max_involved_length_mm: length::max_involved_length(&text),
        ancillary_features: features::ancillary_features(&text),
        pattern_distribution: pattern::pattern_distribution(&text),
        core_lengths: length::core_lengths(&text),
    };

    if specimen.cores_positive.is_none() {
        trace!(label = %specimen.label, "cores fraction unresolved");
    }
    debug!(
        label = %specimen.label,
        location = %specimen.location,
        diagnosis = %specimen.diagnosis,
        grade_group = %specimen.grade_group,
        "extracted specimen"
    );
    specimen
}

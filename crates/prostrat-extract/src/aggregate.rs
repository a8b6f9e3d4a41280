//! Encounter-level positive/total core count with anatomic clamping.

use prostrat_core::models::report::AggregationPolicy;
use prostrat_core::models::specimen::{CoreFraction, Specimen};
use tracing::debug;

/// Site keywords and the most cores a single site can contribute.
const SITE_CAPACITY: [(&str, u32); 4] = [("target", 1), ("apex", 3), ("mid", 2), ("base", 2)];
const DEFAULT_CAPACITY: u32 = 2;

/// Capacity for a normalized location (first keyword contained wins).
pub fn site_capacity(location: &str) -> u32 {
    let lower = location.to_lowercase();
    SITE_CAPACITY
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(DEFAULT_CAPACITY, |&(_, capacity)| capacity)
}

fn is_target(location: &str) -> bool {
    location.to_lowercase().contains("target")
}

/// Clamp one specimen's fraction to what its site can contribute.
///
/// A target lesion counts as a single core, positive if any core was.
pub fn clamp_to_site(cores: CoreFraction, location: &str) -> CoreFraction {
    if is_target(location) {
        return CoreFraction {
            positive: u32::from(cores.positive > 0),
            total: 1,
        };
    }
    let total = cores.total.min(site_capacity(location));
    CoreFraction {
        positive: cores.positive.min(total),
        total,
    }
}

/// Sum clamped positives over adenocarcinoma specimens.
///
/// The denominator is the systematic core count plus one per target lesion.
/// With no adenocarcinoma at all the result is `0 / systematic_cores`.
pub fn aggregate_cores(specimens: &[Specimen], policy: &AggregationPolicy) -> CoreFraction {
    let mut positive = 0;
    let mut targets = 0;
    let mut found_adenocarcinoma = false;

    for specimen in specimens.iter().filter(|s| s.diagnosis.is_adenocarcinoma()) {
        found_adenocarcinoma = true;
        let Some(cores) = specimen.cores_positive else {
            continue;
        };
        if is_target(&specimen.location) {
            targets += 1;
        }
        positive += clamp_to_site(cores, &specimen.location).positive;
    }

    let total = if found_adenocarcinoma {
        policy.systematic_cores + targets
    } else {
        policy.systematic_cores
    };
    debug!(positive, total, targets, "aggregated cores");
    CoreFraction { positive, total }
}

/// Replace the denominator with a manual count, never below the positives.
pub fn apply_total_override(cores: CoreFraction, total_override: Option<u32>) -> CoreFraction {
    match total_override.filter(|&t| t > 0) {
        Some(total) => CoreFraction {
            positive: cores.positive,
            total: total.max(cores.positive),
        },
        None => cores,
    }
}

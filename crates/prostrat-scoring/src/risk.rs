//! NCCN risk-group decision tree.

use prostrat_core::models::clinical::ClinicalStage;
use prostrat_core::models::grade::GradeGroup;
use prostrat_core::models::risk::RiskGroup;
use tracing::trace;

const VERY_HIGH_PSA: f64 = 40.0;
const HIGH_PSA: f64 = 20.0;
const LOW_PSA: f64 = 10.0;
const BULKY_CORE_RATIO: f64 = 0.5;

/// Classify one encounter. Branches are evaluated in order; the first
/// that matches wins, so every input combination yields exactly one group.
pub fn classify_risk(
    psa: f64,
    grade_group: GradeGroup,
    stage: &ClinicalStage,
    positive_cores: u32,
    total_cores: u32,
) -> RiskGroup {
    let gg = grade_group.value();
    let locally_advanced = stage.is_locally_advanced();
    let high_grade = gg >= 4;

    let very_high_factors = [locally_advanced, high_grade, psa >= VERY_HIGH_PSA]
        .into_iter()
        .filter(|&f| f)
        .count();
    if very_high_factors >= 2 {
        return RiskGroup::VeryHigh;
    }

    if locally_advanced || high_grade || psa >= HIGH_PSA {
        return RiskGroup::High;
    }

    if stage.is_t1c() && gg == 1 && psa < LOW_PSA {
        return RiskGroup::VeryLow;
    }

    if stage.numeral() <= 2 && gg == 1 && psa < LOW_PSA {
        return RiskGroup::Low;
    }

    let intermediate_factors = [
        (LOW_PSA..HIGH_PSA).contains(&psa),
        stage.is_t2b_or_t2c(),
        gg == 2 || gg == 3,
    ]
    .into_iter()
    .filter(|&f| f)
    .count();

    let ratio = if total_cores > 0 {
        f64::from(positive_cores) / f64::from(total_cores)
    } else {
        0.0
    };
    trace!(intermediate_factors, ratio, "intermediate risk evaluation");

    match intermediate_factors {
        0 => RiskGroup::Low,
        1 if (gg == 1 || gg == 2) && ratio < BULKY_CORE_RATIO => RiskGroup::IntermediateFavorable,
        _ => RiskGroup::IntermediateUnfavorable,
    }
}

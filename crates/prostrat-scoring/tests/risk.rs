use prostrat_core::models::clinical::ClinicalStage;
use prostrat_core::models::grade::GradeGroup;
use prostrat_core::models::risk::RiskGroup;
use prostrat_scoring::risk::classify_risk;

const STAGES: [&str; 7] = ["T1c", "T2a", "T2b", "T2c", "T3a", "T3b", "T4"];
const PSAS: [f64; 4] = [5.0, 15.0, 25.0, 45.0];
// Positive cores out of 10, giving ratios 0.0, 0.4 and 0.6.
const POSITIVE_OF_TEN: [u32; 3] = [0, 4, 6];

fn classify(psa: f64, gg: u8, stage: &str, positive: u32, total: u32) -> RiskGroup {
    classify_risk(
        psa,
        GradeGroup::new(gg).unwrap(),
        &ClinicalStage::new(stage),
        positive,
        total,
    )
}

#[test]
fn very_low_for_t1c_grade_one_low_psa() {
    assert_eq!(classify(5.0, 1, "T1c", 1, 3), RiskGroup::VeryLow);
    assert_eq!(classify(5.0, 1, "t1c", 1, 3), RiskGroup::VeryLow);
}

#[test]
fn low_for_t2a_grade_one_low_psa() {
    assert_eq!(classify(5.0, 1, "T2a", 1, 14), RiskGroup::Low);
    assert_eq!(classify(5.0, 1, "T1", 1, 14), RiskGroup::Low);
}

#[test]
fn single_intermediate_factor_is_favorable_when_cores_sparse() {
    assert_eq!(classify(5.0, 2, "T1c", 2, 14), RiskGroup::IntermediateFavorable);
    assert_eq!(classify(15.0, 1, "T1c", 2, 14), RiskGroup::IntermediateFavorable);
    assert_eq!(classify(5.0, 1, "T2b", 0, 14), RiskGroup::IntermediateFavorable);
}

#[test]
fn bulky_cores_make_intermediate_unfavorable() {
    assert_eq!(classify(5.0, 2, "T1c", 7, 14), RiskGroup::IntermediateUnfavorable);
}

#[test]
fn grade_group_three_is_always_unfavorable() {
    assert_eq!(classify(5.0, 3, "T1c", 0, 14), RiskGroup::IntermediateUnfavorable);
}

#[test]
fn multiple_intermediate_factors_are_unfavorable() {
    assert_eq!(classify(15.0, 2, "T2c", 1, 14), RiskGroup::IntermediateUnfavorable);
}

#[test]
fn single_high_factor_is_high() {
    assert_eq!(classify(5.0, 4, "T1c", 1, 14), RiskGroup::High);
    assert_eq!(classify(25.0, 1, "T1c", 1, 14), RiskGroup::High);
    assert_eq!(classify(5.0, 1, "T3a", 1, 14), RiskGroup::High);
}

#[test]
fn two_very_high_factors_are_very_high() {
    assert_eq!(classify(45.0, 5, "T1c", 1, 14), RiskGroup::VeryHigh);
    assert_eq!(classify(5.0, 4, "T3b", 1, 14), RiskGroup::VeryHigh);
    assert_eq!(classify(40.0, 1, "T4", 1, 14), RiskGroup::VeryHigh);
}

#[test]
fn psa_forty_alone_is_only_high() {
    assert_eq!(classify(40.0, 1, "T1c", 1, 14), RiskGroup::High);
}

#[test]
fn zero_total_cores_counts_as_sparse() {
    assert_eq!(classify(5.0, 2, "T1c", 0, 0), RiskGroup::IntermediateFavorable);
}

#[test]
fn auto_stage_behaves_as_unparsed() {
    assert_eq!(classify(5.0, 1, "Auto", 1, 14), RiskGroup::Low);
}

#[test]
fn classification_is_total_over_grid() {
    let mut seen = std::collections::BTreeSet::new();
    for stage in STAGES {
        for gg in 1..=5 {
            for psa in PSAS {
                for positive in POSITIVE_OF_TEN {
                    seen.insert(classify(psa, gg, stage, positive, 10));
                }
            }
        }
    }
    assert_eq!(seen.len(), RiskGroup::ALL.len());
}

#[test]
fn worsening_one_input_never_lowers_risk() {
    for (si, stage) in STAGES.iter().enumerate() {
        for gg in 1..=5u8 {
            for (pi, psa) in PSAS.iter().enumerate() {
                for (ri, positive) in POSITIVE_OF_TEN.iter().enumerate() {
                    let base = classify(*psa, gg, stage, *positive, 10);

                    if let Some(next) = STAGES.get(si + 1) {
                        assert!(classify(*psa, gg, next, *positive, 10) >= base);
                    }
                    if gg < 5 {
                        assert!(classify(*psa, gg + 1, stage, *positive, 10) >= base);
                    }
                    if let Some(next) = PSAS.get(pi + 1) {
                        assert!(classify(*next, gg, stage, *positive, 10) >= base);
                    }
                    if let Some(next) = POSITIVE_OF_TEN.get(ri + 1) {
                        assert!(classify(*psa, gg, stage, *next, 10) >= base);
                    }
                }
            }
        }
    }
}

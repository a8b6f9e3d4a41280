use prostrat_core::models::grade::GradeGroup;
use prostrat_core::models::specimen::{AncillaryFeature, CoreFraction, CoreLength, DiagnosisCategory};
use prostrat_extract::fields::category::{CATEGORY_RULES, classify_diagnosis};
use prostrat_extract::fields::cores::{CORE_RULES, extract_cores_positive};
use prostrat_extract::fields::features::ancillary_features;
use prostrat_extract::fields::grade::extract_grade_group;
use prostrat_extract::fields::length::{core_lengths, less_than, max_involved_length};
use prostrat_extract::fields::location::{capitalize_words, normalize_location};
use prostrat_extract::fields::pattern::pattern_distribution;
use prostrat_extract::rules::rule_names;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "got {actual}, want {expected}");
}

// --- location ---

#[test]
fn location_strips_container_phrases() {
    let parsed = normalize_location("PROSTATE, NEEDLE CORE BIOPSY - LEFT APEX:", 'A');
    assert_eq!(parsed.location, "Left Apex");
    assert!(!parsed.is_target);
    assert_eq!(parsed.leftover_site, "");
}

#[test]
fn location_strips_repeated_label() {
    let parsed = normalize_location("PROSTATE, B, RIGHT MID", 'B');
    assert_eq!(parsed.location, "Right Mid");
}

#[test]
fn location_splits_target_token() {
    let parsed = normalize_location(
        "PROSTATE, MRI DIRECTED NEEDLE BIOPSY, TARGET #1 LEFT ANTERIOR:",
        'C',
    );
    assert!(parsed.is_target);
    assert_eq!(parsed.location, "Target 1");
    assert_eq!(parsed.leftover_site, "Left Anterior");
}

#[test]
fn location_target_without_hash() {
    let parsed = normalize_location("LESION ZONE target 2", 'D');
    assert!(parsed.is_target);
    assert_eq!(parsed.location, "Target 2");
    assert_eq!(parsed.leftover_site, "");
}

#[test]
fn capitalize_collapses_whitespace() {
    assert_eq!(capitalize_words("lEFT   mid  LATERAL"), "Left Mid Lateral");
    assert_eq!(capitalize_words(""), "");
}

// --- category ---

#[test]
fn category_priority_order_is_fixed() {
    assert_eq!(
        rule_names(&CATEGORY_RULES),
        vec![
            "acinar_adenocarcinoma",
            "ductal_adenocarcinoma",
            "transitional_cell",
            "squamous_cell",
            "small_cell",
            "large_cell",
            "adenocarcinoma",
            "focal_asap",
            "focal_hgpin",
            "asap",
            "hgpin",
            "prostatitis",
            "inflammation",
            "benign",
            "bph",
        ]
    );
}

#[test]
fn category_first_match_wins() {
    let cases = [
        ("PROSTATIC ACINAR ADENOCARCINOMA", DiagnosisCategory::AcinarAdenocarcinoma),
        ("ductal adenocarcinoma with HGPIN", DiagnosisCategory::DuctalAdenocarcinoma),
        ("SMALL CELL NEUROENDOCRINE CARCINOMA", DiagnosisCategory::SmallCellCarcinoma),
        ("Large cell carcinoma", DiagnosisCategory::LargeCellCarcinoma),
        ("ADENOCARCINOMA, GRADE GROUP 1", DiagnosisCategory::Adenocarcinoma),
        (
            "FOCAL ATYPICAL SMALL ACINAR PROLIFERATION",
            DiagnosisCategory::FocalAsap,
        ),
        (
            "focal high grade prostatic intraepithelial neoplasia",
            DiagnosisCategory::FocalHgpin,
        ),
        ("ASAP, SEE COMMENT", DiagnosisCategory::Asap),
        ("HGPIN", DiagnosisCategory::Hgpin),
        ("CHRONIC PROSTATITIS", DiagnosisCategory::Prostatitis),
        ("ACUTE INFLAMMATION", DiagnosisCategory::Inflammation),
        ("NEGATIVE FOR MALIGNANCY", DiagnosisCategory::Benign),
        ("BPH", DiagnosisCategory::Bph),
        ("", DiagnosisCategory::Unknown),
    ];
    for (text, expected) in cases {
        assert_eq!(classify_diagnosis(text), expected, "{text}");
    }
}

// --- grade ---

#[test]
fn explicit_grade_group_wins() {
    let gg = extract_grade_group("GLEASON SCORE 4+4=8, GRADE GROUP 2");
    assert_eq!(gg, GradeGroup::new(2).unwrap());
}

#[test]
fn gleason_fallback_maps_to_grade_group() {
    let cases = [
        ("Gleason score 3+3=6", 1),
        ("Gleason 3 + 4 = 7", 2),
        ("GLEASON SCORE 4+3=7", 3),
        ("Gleason 3+4", 2),
        ("Gleason 4+4=8", 4),
        ("Gleason score 4+5=9", 5),
        ("Gleason 5+5", 5),
    ];
    for (text, expected) in cases {
        assert_eq!(extract_grade_group(text).value(), expected, "{text}");
    }
}

#[test]
fn out_of_range_grade_group_falls_through() {
    assert_eq!(extract_grade_group("grade group 7, Gleason 4+4=8").value(), 4);
    assert_eq!(extract_grade_group("grade group 9"), GradeGroup::NONE);
}

#[test]
fn ungraded_text_is_none() {
    assert_eq!(extract_grade_group("BENIGN PROSTATIC TISSUE"), GradeGroup::NONE);
}

// --- cores ---

#[test]
fn core_rules_order_is_fixed() {
    assert_eq!(
        rule_names(&CORE_RULES),
        vec![
            "involving_x_of_y",
            "involving_x_slash_y",
            "x_of_y",
            "x_slash_y",
            "involving_all_cores",
            "small_focus",
            "fragmented_cores_banner",
        ]
    );
}

#[test]
fn core_phrasings() {
    let cases = [
        ("INVOLVING 2 OF 3 CORES", (2, 3)),
        ("involving 1 of 2 partially fragmented cores", (1, 2)),
        ("INVOLVING 3/4 FRAGMENTED CORES", (3, 4)),
        ("adenocarcinoma in 1 of 2 needle biopsies", (1, 2)),
        ("present in 2/2 cores", (2, 2)),
        ("INVOLVING ALL CORES (3 OF 3 CORES)", (3, 3)),
        ("involving 1 of 1 prostatic tissue", (1, 1)),
    ];
    for (text, (positive, total)) in cases {
        assert_eq!(
            extract_cores_positive(text),
            Some(CoreFraction { positive, total }),
            "{text}"
        );
    }
}

#[test]
fn core_fallbacks_yield_single_core() {
    let one = CoreFraction::new(1, 1);
    assert_eq!(
        extract_cores_positive("A SMALL FOCUS OF PROSTATIC ADENOCARCINOMA"),
        one
    );
    assert_eq!(
        extract_cores_positive(
            "ADENOCARCINOMA INVOLVING FRAGMENTED CORES (TUMOR MEASURES 1.5 mm IN 8 mm OF FRAGMENTED CORES)"
        ),
        one
    );
}

#[test]
fn unresolved_cores_are_none() {
    assert_eq!(extract_cores_positive("BENIGN PROSTATIC TISSUE"), None);
    assert_eq!(extract_cores_positive("a small focus of HGPIN"), None);
    assert_eq!(extract_cores_positive("involving 5 of 3 cores"), None);
    assert_eq!(extract_cores_positive("involving 1 of 0 cores"), None);
}

// --- length ---

#[test]
fn less_than_correction() {
    assert_close(less_than(0.5), 0.4);
    assert_close(less_than(0.2), 0.1);
    assert_close(less_than(0.1), 0.1);
    assert_close(less_than(1.0), 0.9);
}

#[test]
fn max_length_takes_largest_measurement() {
    let text = "TUMOR MEASURES 4 MM IN 10 MM CORE. 6.5 mm length of involvement. tumor measures 2 mm";
    assert_close(max_involved_length(text).unwrap(), 6.5);
}

#[test]
fn max_length_applies_less_than() {
    assert_close(
        max_involved_length("tumor measures <0.5 mm in 12 mm core").unwrap(),
        0.4,
    );
    assert_close(max_involved_length("TUMOR MEASURES < 0.1 MM").unwrap(), 0.1);
    assert_close(max_involved_length("length of involvement < 1").unwrap(), 0.9);
}

#[test]
fn max_length_fragmented() {
    assert_close(
        max_involved_length("tumor measures 3.5 mm in 9 mm of fragmented cores").unwrap(),
        3.5,
    );
}

#[test]
fn max_length_unknown() {
    assert_eq!(max_involved_length("BENIGN"), None);
}

#[test]
fn core_length_observations() {
    let text = "TUMOR MEASURES 4 MM IN 10 MM CORE; tumor measures <0.5 mm in 12 mm core; \
                tumor measures 2.5 mm in 9 mm of fragmented cores";
    let lengths = core_lengths(text);
    assert_eq!(lengths.len(), 3);
    assert_eq!(
        lengths[0],
        CoreLength {
            tumor_mm: 4.0,
            total_mm: 10.0
        }
    );
    assert_close(lengths[1].tumor_mm, 0.4);
    assert_close(lengths[1].total_mm, 12.0);
    assert_eq!(
        lengths[2],
        CoreLength {
            tumor_mm: 2.5,
            total_mm: 9.0
        }
    );
}

// --- features / pattern ---

#[test]
fn ancillary_features_in_fixed_order() {
    let features = ancillary_features("CRIBRIFORM PATTERN PRESENT. PERINEURAL INVASION IDENTIFIED.");
    assert_eq!(
        features,
        vec![
            AncillaryFeature::PerineuralInvasion,
            AncillaryFeature::Cribriform
        ]
    );
    assert!(ancillary_features("no notable findings").is_empty());
}

#[test]
fn pattern_note() {
    assert_eq!(
        pattern_distribution("GLEASON 3+4=7 (PATTERN 4 = 10%), TERTIARY PATTERN 5 <5%").as_deref(),
        Some("Pattern 4=10%, Tertiary Tert5=<5%")
    );
    assert_eq!(
        pattern_distribution("pattern 4=<5%, pattern 5 = 20%").as_deref(),
        Some("Pattern 4=<5%, Pattern 5=20%")
    );
    assert_eq!(pattern_distribution("GLEASON 3+3=6"), None);
}

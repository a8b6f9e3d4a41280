use jiff::civil::date;
use prostrat_core::models::clinical::{ClinicalInputs, ClinicalStage, PsaInput};
use prostrat_core::models::report::AggregationPolicy;
use prostrat_core::models::risk::RiskGroup;
use prostrat_core::models::specimen::{CoreFraction, CoreLength, DiagnosisCategory};
use prostrat_extract::chunk::chunk_reports;
use prostrat_extract::diagnosis::isolate_diagnosis;
use prostrat_extract::error::ExtractError;
use prostrat_extract::metadata::{parse_collected, parse_date, parse_dob};
use prostrat_extract::specimen::tokenize_specimens;
use prostrat_extract::parse_reports;

const SINGLE_APEX: &str = "Provider: X\n\
Collected: 1/2/2024\n\
FINAL PATHOLOGIC DIAGNOSIS\n\
A) PROSTATE, NEEDLE CORE BIOPSY - LEFT APEX:\n\
- PROSTATIC ADENOCARCINOMA, GRADE GROUP 2, INVOLVING 2 OF 3 CORES. TUMOR MEASURES 4 MM IN 10 MM CORE.\n\
Comment";

fn clinical(psa: &str, stage: &str) -> ClinicalInputs {
    ClinicalInputs {
        psa: psa.parse::<PsaInput>().unwrap(),
        stage: ClinicalStage::new(stage),
        ..ClinicalInputs::default()
    }
}

fn default_policy() -> AggregationPolicy {
    AggregationPolicy::default()
}

// --- chunker ---

#[test]
fn chunks_split_at_provider_lines() {
    let raw = "preamble\nProvider: A\nbody one\n\nprovider: B\nbody two\n";
    let chunks = chunk_reports(raw).unwrap();
    assert_eq!(chunks, vec!["Provider: A\nbody one", "provider: B\nbody two"]);
}

#[test]
fn provider_must_start_a_line() {
    let err = chunk_reports("Referring Provider: A\nno anchor here").unwrap_err();
    assert!(matches!(err, ExtractError::NoProviderAnchor));
}

#[test]
fn blank_input_is_rejected() {
    assert!(matches!(chunk_reports("  \n\t"), Err(ExtractError::EmptyInput)));
    assert!(matches!(
        parse_reports("", &ClinicalInputs::default(), &default_policy()),
        Err(ExtractError::EmptyInput)
    ));
}

// --- metadata ---

#[test]
fn dates_in_supported_formats() {
    assert_eq!(parse_date("1/2/2024"), Some(date(2024, 1, 2)));
    assert_eq!(parse_date("01-02-2024"), Some(date(2024, 1, 2)));
    assert_eq!(parse_date("2024-01-02"), Some(date(2024, 1, 2)));
    assert_eq!(parse_date("3/4/55"), Some(date(1955, 3, 4)));
    assert_eq!(parse_date("2/30/2024"), None);
    assert_eq!(parse_date("2024"), None);
}

#[test]
fn collected_and_dob() {
    let chunk = "Provider: X\nDOB/Age: 5/6/1955 (68)\nCollected: 3/4/2024 10:15";
    assert_eq!(parse_collected(chunk), Some(date(2024, 3, 4)));
    assert_eq!(parse_dob(chunk), Some(date(1955, 5, 6)));
    assert_eq!(parse_dob("DOB: 1950-07-08"), Some(date(1950, 7, 8)));
    assert_eq!(parse_collected("Provider: X"), None);
}

// --- isolator ---

#[test]
fn isolator_bounds_and_filters_block() {
    let chunk = "Provider: Y\n\
Clinical History\n\
A. ignored before header\n\
FINAL PATHOLOGIC DIAGNOSIS\n\
A. LEFT BASE\n\
- BENIGN PROSTATIC TISSUE. SEE\n\
COMMENT\n\
\n\
Immunohistochemistry results support the diagnosis.\n\
** Report Electronically Signed by Dr Z\n\
B. RIGHT BASE\n\
- HGPIN\n\
Gross Description\n\
C. after terminator";

    assert_eq!(
        isolate_diagnosis(chunk),
        vec![
            "A. LEFT BASE",
            "- BENIGN PROSTATIC TISSUE. SEE COMMENT",
            "B. RIGHT BASE",
            "- HGPIN",
        ]
    );
}

#[test]
fn isolator_without_header_is_empty() {
    assert!(isolate_diagnosis("Provider: X\nA. LEFT BASE\n- BENIGN").is_empty());
}

#[test]
fn specimen_section_header_terminates() {
    let chunk = "FINAL PATHOLOGIC DIAGNOSIS\nA. LEFT BASE\nSpecimen(s) Received: A. left base";
    assert_eq!(isolate_diagnosis(chunk), vec!["A. LEFT BASE"]);
}

// --- tokenizer ---

#[test]
fn tokenizer_flips_into_diagnosis_mode_once() {
    let lines = [
        "orphan line",
        "A: PROSTATE,",
        "LEFT MID",
        "-- ADENOCARCINOMA",
        "continued diagnosis",
        "- second finding",
        "B.",
        "RIGHT MID",
    ];
    let specimens = tokenize_specimens(&lines);
    assert_eq!(specimens.len(), 2);

    let a = &specimens[0];
    assert_eq!(a.label, 'A');
    assert_eq!(a.location_lines, vec!["PROSTATE,", "LEFT MID"]);
    assert_eq!(
        a.diagnosis_lines,
        vec!["ADENOCARCINOMA", "continued diagnosis", "second finding"]
    );
    assert!(a.in_diagnosis);

    let b = &specimens[1];
    assert_eq!(b.label, 'B');
    assert_eq!(b.location_lines, vec!["RIGHT MID"]);
    assert!(b.diagnosis_lines.is_empty());
}

#[test]
fn repeated_label_keeps_first_section() {
    let lines = [
        "A. LEFT APEX",
        "- ADENOCARCINOMA, INVOLVING 1 OF 2 CORES",
        "B. RIGHT APEX",
        "- BENIGN",
        "A. LEFT APEX AGAIN",
        "- ADENOCARCINOMA, INVOLVING 2 OF 2 CORES",
        "C. RIGHT BASE",
        "- BENIGN",
    ];
    let specimens = tokenize_specimens(&lines);
    let labels: Vec<char> = specimens.iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!['A', 'B', 'C']);
    assert_eq!(specimens[0].location_lines, vec!["LEFT APEX"]);
    assert_eq!(
        specimens[0].diagnosis_lines,
        vec!["ADENOCARCINOMA, INVOLVING 1 OF 2 CORES"]
    );
}

#[test]
fn repeated_label_does_not_inflate_aggregate() {
    let text = "Provider: X\n\
FINAL PATHOLOGIC DIAGNOSIS\n\
A. LEFT APEX\n\
- ADENOCARCINOMA, GLEASON SCORE 3+3=6, INVOLVING 1 OF 2 CORES.\n\
A. LEFT APEX\n\
- ADENOCARCINOMA, GLEASON SCORE 3+3=6, INVOLVING 2 OF 2 CORES.\n\
Comment";
    let batch = parse_reports(text, &clinical("<10", "T1c"), &default_policy()).unwrap();
    let report = &batch.reports[0];
    assert_eq!(report.specimens.len(), 1);
    assert_eq!(
        report.specimen('A').unwrap().cores_positive,
        Some(CoreFraction { positive: 1, total: 2 })
    );
    assert_eq!(report.aggregated_cores, CoreFraction { positive: 1, total: 14 });
}

#[test]
fn tokenizer_needs_a_header() {
    let lines = ["- ADENOCARCINOMA", "lowercase a) not a header"];
    assert!(tokenize_specimens(&lines).is_empty());
}

// --- end to end ---

#[test]
fn single_specimen_report() {
    let batch = parse_reports(SINGLE_APEX, &clinical("<10", "T1c"), &default_policy()).unwrap();
    assert_eq!(batch.reports.len(), 1);

    let report = &batch.reports[0];
    assert_eq!(report.collected, Some(date(2024, 1, 2)));
    assert_eq!(report.collected_label(), "1/2/2024");
    assert_eq!(report.specimens.len(), 1);

    let a = report.specimen('A').unwrap();
    assert_eq!(a.location, "Left Apex");
    assert_eq!(a.diagnosis, DiagnosisCategory::Adenocarcinoma);
    assert_eq!(a.grade_group.value(), 2);
    assert_eq!(a.cores_positive, Some(CoreFraction { positive: 2, total: 3 }));
    assert_eq!(a.max_involved_length_mm, Some(4.0));
    assert_eq!(
        a.core_lengths,
        vec![CoreLength {
            tumor_mm: 4.0,
            total_mm: 10.0
        }]
    );
    assert_eq!(
        a.summary(),
        "AdenoCA, GG=2, Cores=2/3(67%), Max Core w Cancer=4mm"
    );

    assert_eq!(report.aggregated_cores, CoreFraction { positive: 2, total: 14 });
    assert_eq!(report.max_grade_group.value(), 2);
    // One intermediate factor (grade group 2) with 2/14 cores.
    assert_eq!(report.risk_group, RiskGroup::IntermediateFavorable);
}

#[test]
fn grade_group_one_t1c_low_psa_is_very_low() {
    let text = SINGLE_APEX.replace("GRADE GROUP 2", "GRADE GROUP 1");
    let batch = parse_reports(&text, &clinical("<10", "T1c"), &default_policy()).unwrap();
    assert_eq!(batch.reports[0].risk_group, RiskGroup::VeryLow);
    assert_eq!(batch.worst_risk(), Some(RiskGroup::VeryLow));
    assert_eq!(batch.max_gleason_sum(), Some(6));
}

#[test]
fn target_lesion_clamps_and_extends_denominator() {
    let text = "Provider: X\n\
Collected: 2/3/2024\n\
FINAL PATHOLOGIC DIAGNOSIS\n\
A) PROSTATE, NEEDLE CORE BIOPSY - LEFT APEX:\n\
- ADENOCARCINOMA, GLEASON SCORE 3+3=6, INVOLVING 2 OF 3 CORES.\n\
B) PROSTATE, MRI DIRECTED NEEDLE BIOPSY, TARGET #1 LEFT ANTERIOR:\n\
- ADENOCARCINOMA, GLEASON SCORE 3+4=7, INVOLVING 4/6 CORES.\n\
Comment";
    let batch = parse_reports(text, &clinical("<10", "T1c"), &default_policy()).unwrap();
    let report = &batch.reports[0];

    let b = report.specimen('B').unwrap();
    assert!(b.is_target_lesion);
    assert_eq!(b.location, "Target 1");
    assert_eq!(b.leftover_site, "Left Anterior");
    assert_eq!(b.cores_positive, Some(CoreFraction { positive: 4, total: 6 }));

    // 2 from the apex plus the target counted as a single positive core.
    assert_eq!(report.aggregated_cores, CoreFraction { positive: 3, total: 15 });
    assert_eq!(report.max_grade_group.value(), 2);
}

#[test]
fn benign_only_report_uses_systematic_denominator() {
    let text = "Provider: X\nFINAL PATHOLOGIC DIAGNOSIS\nA. LEFT BASE\n- BENIGN PROSTATIC TISSUE\nComment";
    let batch = parse_reports(text, &ClinicalInputs::default(), &default_policy()).unwrap();
    let report = &batch.reports[0];
    assert_eq!(report.aggregated_cores, CoreFraction { positive: 0, total: 14 });
    assert_eq!(report.max_grade_group.value(), 0);
    assert_eq!(report.specimens[0].summary(), "Benign");
}

#[test]
fn configured_policy_and_override_change_denominator() {
    let policy = AggregationPolicy {
        systematic_cores: 12,
    };
    let batch = parse_reports(SINGLE_APEX, &clinical("<10", "T1c"), &policy).unwrap();
    assert_eq!(batch.reports[0].aggregated_cores.total, 12);

    let overridden = ClinicalInputs {
        total_cores_override: Some(3),
        ..clinical("<10", "T1c")
    };
    let batch = parse_reports(SINGLE_APEX, &overridden, &policy).unwrap();
    let report = &batch.reports[0];
    assert_eq!(report.aggregated_cores, CoreFraction { positive: 2, total: 3 });
    // 2/3 of cores positive pushes a single-factor case to unfavorable.
    assert_eq!(report.risk_group, RiskGroup::IntermediateUnfavorable);
}

#[test]
fn reports_sorted_newest_first_with_undated_last() {
    let text = "Provider: first\nCollected: 1/2/2023\nDOB: 4/5/1950\n\
FINAL PATHOLOGIC DIAGNOSIS\nA. LEFT BASE\n- ADENOCARCINOMA, GRADE GROUP 1, 1 OF 2 CORES\n\
Provider: undated\n\
FINAL PATHOLOGIC DIAGNOSIS\nA. LEFT BASE\n- BENIGN\n\
Provider: latest\nCollected: 3/4/2024\nDOB: 6/7/1960\n\
FINAL PATHOLOGIC DIAGNOSIS\nA. LEFT BASE\n- ADENOCARCINOMA, GRADE GROUP 4, 2 OF 2 CORES\n";
    let batch = parse_reports(text, &clinical("<10", "T1c"), &default_policy()).unwrap();

    let dates: Vec<String> = batch.reports.iter().map(|r| r.collected_label()).collect();
    assert_eq!(dates, vec!["3/4/2024", "1/2/2023", "Unknown"]);

    assert_eq!(batch.date_of_birth, Some(date(1950, 4, 5)));
    assert_eq!(batch.worst_risk(), Some(RiskGroup::High));
    assert_eq!(batch.max_gleason_sum(), Some(8));
}

#[test]
fn batch_serializes_to_json() {
    let batch = parse_reports(SINGLE_APEX, &clinical("<10", "T1c"), &default_policy()).unwrap();
    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json["reports"][0]["risk_group"], "intermediate_favorable");
    assert_eq!(json["reports"][0]["collected"], "2024-01-02");
    assert_eq!(json["reports"][0]["specimens"][0]["label"], "A");
}

use std::sync::LazyLock;

use prostrat_core::models::specimen::DiagnosisCategory;

use crate::rules::{Rule, first_match};

/// Diagnosis keywords, most specific first.
pub static CATEGORY_RULES: LazyLock<Vec<Rule<DiagnosisCategory>>> = LazyLock::new(|| {
    vec![
        Rule::new("acinar_adenocarcinoma", r"(?i)acinar adenocarcinoma", |_| {
            Some(DiagnosisCategory::AcinarAdenocarcinoma)
        }),
        Rule::new("ductal_adenocarcinoma", r"(?i)ductal adenocarcinoma", |_| {
            Some(DiagnosisCategory::DuctalAdenocarcinoma)
        }),
        Rule::new("transitional_cell", r"(?i)transitional cell carcinoma", |_| {
            Some(DiagnosisCategory::TransitionalCellCarcinoma)
        }),
        Rule::new("squamous_cell", r"(?i)squamous cell carcinoma", |_| {
            Some(DiagnosisCategory::SquamousCellCarcinoma)
        }),
        Rule::new(
            "small_cell",
            r"(?i)small cell neuroendocrine carcinoma|small cell carcinoma",
            |_| Some(DiagnosisCategory::SmallCellCarcinoma),
        ),
        Rule::new(
            "large_cell",
            r"(?i)large cell neuroendocrine carcinoma|large cell carcinoma",
            |_| Some(DiagnosisCategory::LargeCellCarcinoma),
        ),
        Rule::new("adenocarcinoma", r"(?i)adenocarcinoma", |_| {
            Some(DiagnosisCategory::Adenocarcinoma)
        }),
        Rule::new(
            "focal_asap",
            r"(?i)focal atypical small acinar proliferation|focal asap",
            |_| Some(DiagnosisCategory::FocalAsap),
        ),
        Rule::new(
            "focal_hgpin",
            r"(?i)focal high grade prostatic intraepithelial neoplasia|focal hgpin",
            |_| Some(DiagnosisCategory::FocalHgpin),
        ),
        Rule::new("asap", r"(?i)asap|atypical small acinar proliferation", |_| {
            Some(DiagnosisCategory::Asap)
        }),
        Rule::new(
            "hgpin",
            r"(?i)hgpin|high grade prostatic intraepithelial neoplasia",
            |_| Some(DiagnosisCategory::Hgpin),
        ),
        Rule::new("prostatitis", r"(?i)prostatitis", |_| {
            Some(DiagnosisCategory::Prostatitis)
        }),
        Rule::new("inflammation", r"(?i)inflammation", |_| {
            Some(DiagnosisCategory::Inflammation)
        }),
        Rule::new("benign", r"(?i)benign|negative", |_| Some(DiagnosisCategory::Benign)),
        Rule::new("bph", r"(?i)bph", |_| Some(DiagnosisCategory::Bph)),
    ]
});

/// First matching category in priority order, `Unknown` when none match.
pub fn classify_diagnosis(text: &str) -> DiagnosisCategory {
    first_match(&CATEGORY_RULES, text).unwrap_or(DiagnosisCategory::Unknown)
}

use jiff::civil::Date;
use prostrat_core::models::clinical::ClinicalInputs;
use prostrat_core::models::nomogram::{NomogramInputs, NomogramStage};
use prostrat_core::models::report::EncounterReport;

/// Whole years from `dob` to `today`; `None` unless the result is positive.
pub fn age_on(dob: Date, today: Date) -> Option<u32> {
    let mut years = i32::from(today.year()) - i32::from(dob.year());
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).ok().filter(|&age| age > 0)
}

/// Derive nomogram inputs from one parsed encounter.
///
/// `date_of_birth` is the batch-level DOB (first one seen across reports);
/// the report's own DOB is used only when the batch has none.
pub fn from_report(
    report: &EncounterReport,
    clinical: &ClinicalInputs,
    date_of_birth: Option<Date>,
    today: Date,
) -> NomogramInputs {
    let grade_group = match report.max_grade_group.value() {
        0 => NomogramInputs::DEFAULT_GRADE_GROUP,
        g => g,
    };
    let age = date_of_birth
        .or(report.date_of_birth)
        .and_then(|dob| age_on(dob, today))
        .unwrap_or(NomogramInputs::DEFAULT_AGE);

    NomogramInputs {
        age,
        psa: clinical.psa.numeric(),
        grade_group,
        stage: NomogramStage::from_clinical(&clinical.stage),
        positive_cores: report.aggregated_cores.positive,
        negative_cores: report.aggregated_cores.negative(),
    }
}

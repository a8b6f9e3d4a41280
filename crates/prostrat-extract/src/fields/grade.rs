use std::sync::LazyLock;

use prostrat_core::models::grade::GradeGroup;

use crate::rules::{Rule, capture_number, first_match};

/// An explicit grade group wins; a Gleason score is the fallback.
pub static GRADE_RULES: LazyLock<Vec<Rule<GradeGroup>>> = LazyLock::new(|| {
    vec![
        Rule::new("grade_group", r"(?i)grade\s+group\s+(\d+)", |caps| {
            let value: u8 = capture_number(caps, 1)?;
            GradeGroup::new(value).ok().filter(|g| g.is_graded())
        }),
        Rule::new(
            "gleason",
            r"(?i)gleason\s*(?:score\s*)?(\d+)\s*\+\s*(\d+)\s*(?:=\s*(\d+))?",
            |caps| {
                let primary: u8 = capture_number(caps, 1)?;
                let secondary: u8 = capture_number(caps, 2)?;
                let sum = capture_number(caps, 3).unwrap_or(primary.saturating_add(secondary));
                Some(GradeGroup::from_gleason(primary, sum))
            },
        ),
    ]
});

/// Grade group for a specimen, `GradeGroup::NONE` when ungraded.
pub fn extract_grade_group(text: &str) -> GradeGroup {
    first_match(&GRADE_RULES, text).unwrap_or(GradeGroup::NONE)
}

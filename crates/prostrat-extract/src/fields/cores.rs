use std::sync::LazyLock;

use prostrat_core::models::specimen::CoreFraction;
use regex::Captures;
use tracing::warn;

use crate::rules::{Rule, capture_number, first_match};

const FRAGMENTED: &str = r"(?:partially\s+fragmented|fragmented)?";

fn fraction(caps: &Captures<'_>) -> Option<CoreFraction> {
    let positive: u32 = capture_number(caps, 1)?;
    let total: u32 = capture_number(caps, 2)?;
    let fraction = CoreFraction::new(positive, total);
    if fraction.is_none() {
        warn!(positive, total, "ignoring core fraction with positive > total or empty total");
    }
    fraction
}

fn single_core(_: &Captures<'_>) -> Option<CoreFraction> {
    CoreFraction::new(1, 1)
}

/// Involved-core phrasings in priority order, then the single-focus fallbacks.
pub static CORE_RULES: LazyLock<Vec<Rule<CoreFraction>>> = LazyLock::new(|| {
    vec![
        Rule::new(
            "involving_x_of_y",
            &format!(
                r"(?i)involving\s*(\d+)\s*of\s*(\d+)\s*{FRAGMENTED}\s*(?:core|cores|prostatic tissue|needle\s*biopsies)"
            ),
            fraction,
        ),
        Rule::new(
            "involving_x_slash_y",
            &format!(r"(?i)involving\s*(\d+)/(\d+)\s*{FRAGMENTED}\s*(?:core|cores|needle\s*biopsies)"),
            fraction,
        ),
        Rule::new(
            "x_of_y",
            &format!(r"(?i)(\d+)\s*of\s*(\d+)\s*{FRAGMENTED}\s*(?:core|cores|needle\s*biopsies)"),
            fraction,
        ),
        Rule::new(
            "x_slash_y",
            &format!(r"(?i)(\d+)/(\d+)\s*{FRAGMENTED}\s*(?:core|cores|needle\s*biopsies)"),
            fraction,
        ),
        Rule::new(
            "involving_all_cores",
            r"(?i)involving\s+all\s+cores\s*\(\s*(\d+)\s*of\s*(\d+)\s*(?:core|cores?)\s*\)",
            fraction,
        ),
        Rule::new(
            "small_focus",
            r"(?is)a small focus.*adenocarcinoma|adenocarcinoma.*a small focus",
            single_core,
        ),
        Rule::new(
            "fragmented_cores_banner",
            r"(?i)INVOLVING FRAGMENTED CORES \(TUMOR MEASURES [\d.]+ mm IN [\d.]+ mm OF FRAGMENTED CORES\)",
            single_core,
        ),
    ]
});

/// Positive-core fraction, `None` when no phrasing matches.
pub fn extract_cores_positive(text: &str) -> Option<CoreFraction> {
    first_match(&CORE_RULES, text)
}

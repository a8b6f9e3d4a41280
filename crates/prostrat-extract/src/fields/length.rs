//! Tumor extent: the maximum involved length and every
//! "tumor measures V mm in W mm" observation.

use std::sync::LazyLock;

use prostrat_core::models::specimen::CoreLength;
use regex::Captures;

use crate::rules::{Rule, all_matches, capture_number};

const NUMBER: &str = r"(\d+(?:\.\d+)?)";

/// Value for a `< V` measurement: V - 0.1, floored at 0.1 below 0.2.
pub fn less_than(value: f64) -> f64 {
    if value >= 0.2 { value - 0.1 } else { 0.1 }
}

fn exact(caps: &Captures<'_>) -> Option<f64> {
    capture_number(caps, 1)
}

fn below(caps: &Captures<'_>) -> Option<f64> {
    capture_number(caps, 1).map(less_than)
}

pub static LENGTH_RULES: LazyLock<Vec<Rule<f64>>> = LazyLock::new(|| {
    let core = r"(?:core|cores|needle\s*biops(?:y|ies))?\b";
    vec![
        Rule::new(
            "measures_in_core",
            &format!(r"(?i)tumor\s+measures\s+{NUMBER}\s*mm\s+in\s+a?n?\s*{NUMBER}\s*mm\s*{core}"),
            exact,
        ),
        Rule::new(
            "measures_below_in_core",
            &format!(r"(?i)tumor\s+measures\s*<\s*{NUMBER}\s*mm\s+in\s+a?n?\s*{NUMBER}\s*mm\s*{core}"),
            below,
        ),
        Rule::new(
            "length_of_involvement",
            &format!(r"(?i){NUMBER}\s*mm\s+length\s+of\s+involvement\b"),
            exact,
        ),
        Rule::new(
            "length_of_involvement_below",
            &format!(r"(?i)length\s+of\s+involvement\s*<\s*{NUMBER}"),
            below,
        ),
        Rule::new(
            "measures_in_fragmented",
            &format!(r"(?i)tumor\s+measures\s+{NUMBER}\s*mm\s+in\s+{NUMBER}\s*mm\s+of\s+fragmented\s+cores?"),
            exact,
        ),
        Rule::new(
            "measures_below_in_fragmented",
            &format!(r"(?i)tumor\s+measures\s*<\s*{NUMBER}\s*mm\s+in\s+{NUMBER}\s*mm\s+of\s+fragmented\s+cores?"),
            below,
        ),
        Rule::new("measures", &format!(r"(?i)tumor\s+measures\s+{NUMBER}\s*mm\b"), exact),
        Rule::new(
            "measures_below",
            &format!(r"(?i)tumor\s+measures\s*<\s*{NUMBER}\s*mm\b"),
            below,
        ),
    ]
});

/// Largest involved length in mm across every measurement phrasing.
pub fn max_involved_length(text: &str) -> Option<f64> {
    all_matches(&LENGTH_RULES, text).into_iter().reduce(f64::max)
}

fn observation(caps: &Captures<'_>) -> Option<CoreLength> {
    let tumor: f64 = capture_number(caps, 2)?;
    let total_mm: f64 = capture_number(caps, 3)?;
    let tumor_mm = if caps.get(1).is_some() { less_than(tumor) } else { tumor };
    Some(CoreLength { tumor_mm, total_mm })
}

pub static CORE_LENGTH_RULES: LazyLock<Vec<Rule<CoreLength>>> = LazyLock::new(|| {
    vec![
        Rule::new(
            "tumor_in_core",
            &format!(
                r"(?i)tumor\s+measures\s*(<)?\s*{NUMBER}(?:\s*mm)?\s+in\s+a?n?\s*{NUMBER}(?:\s*mm)?\s*(?:core|cores|needle\s*biops(?:y|ies)|prostate\s+tissue)"
            ),
            observation,
        ),
        Rule::new(
            "tumor_in_fragmented",
            &format!(
                r"(?i)tumor\s+measures\s*(<)?\s*{NUMBER}(?:\s*mm)?\s+in\s+{NUMBER}(?:\s*mm)?\s+of\s+fragmented\s+cores"
            ),
            observation,
        ),
    ]
});

/// Tumor/core length pairs, in rule order then text order.
pub fn core_lengths(text: &str) -> Vec<CoreLength> {
    all_matches(&CORE_LENGTH_RULES, text)
}

use std::sync::LazyLock;

use regex::Regex;

static PATTERN_4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pattern\s*4\s*=\s*(<?\d+%)").unwrap());
static PATTERN_5: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pattern\s*5\s*=\s*(<?\d+%)").unwrap());
static TERTIARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tertiary\s*pattern\s*(\d+)\s+(<?\d+%)").unwrap());

/// Pattern 4/5 percentages and any tertiary pattern, e.g.
/// `Pattern 4=10%, Tertiary Tert5=<5%`.
pub fn pattern_distribution(text: &str) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(caps) = PATTERN_4.captures(text) {
        parts.push(format!("Pattern 4={}", &caps[1]));
    }
    if let Some(caps) = PATTERN_5.captures(text) {
        parts.push(format!("Pattern 5={}", &caps[1]));
    }
    if let Some(caps) = TERTIARY.captures(text) {
        parts.push(format!("Tertiary Tert{}={}", &caps[1], &caps[2]));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

//! Encounter metadata outside the diagnosis block: collection date and
//! date of birth.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;

static COLLECTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Collected:\s*([0-9/-]+)").unwrap());
static DOB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)DOB:\s*([0-9/-]+)").unwrap());
static DOB_AGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)DOB/Age:\s*([0-9/-]+)").unwrap());

/// Collection date of the specimens in this chunk.
pub fn parse_collected(chunk: &str) -> Option<Date> {
    let token = COLLECTED.captures(chunk)?.get(1)?.as_str();
    parse_date(token)
}

/// Patient date of birth, from `DOB:` or else `DOB/Age:`.
pub fn parse_dob(chunk: &str) -> Option<Date> {
    let caps = DOB.captures(chunk).or_else(|| DOB_AGE.captures(chunk))?;
    parse_date(caps.get(1)?.as_str())
}

/// Parse `M/D/YYYY`, `M-D-YYYY` or `YYYY-MM-DD`.
///
/// Two-digit years pivot at 50: `49` is 2049, `50` is 1950.
pub fn parse_date(token: &str) -> Option<Date> {
    let parts: Vec<&str> = token
        .trim()
        .split(['/', '-'])
        .filter(|p| !p.is_empty())
        .collect();
    let [a, b, c] = parts.as_slice() else {
        return None;
    };

    let (year, month, day) = if a.len() == 4 {
        (a.parse::<i16>().ok()?, b.parse::<i8>().ok()?, c.parse::<i8>().ok()?)
    } else {
        (expand_year(c)?, a.parse::<i8>().ok()?, b.parse::<i8>().ok()?)
    };
    Date::new(year, month, day).ok()
}

fn expand_year(token: &str) -> Option<i16> {
    let year: i16 = token.parse().ok()?;
    match (token.len(), year) {
        (2, 0..=49) => Some(2000 + year),
        (2, _) => Some(1900 + year),
        (4, _) => Some(year),
        _ => None,
    }
}

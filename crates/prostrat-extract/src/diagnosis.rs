//! Locate and bound the final-diagnosis narrative within one chunk.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

static SEE_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bsee\s*$").unwrap());
static COMMENT_HEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^comment\b").unwrap());
static FINAL_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^FINAL\s+PATHOLOGIC\s+DIAGNOSIS").unwrap());

/// Lines that close the diagnosis block.
static TERMINATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^comment\s*$",
        r"(?i)^Gross\s+Description\s*$",
        r"(?i)^Clinical\s+History\s*$",
        r"(?i)^Specimen\(s\)\s*Received",
        r"(?i)^FHIR\s+Pathology",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Boilerplate dropped from inside the block.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)disclaimer|immunohistochemistry|\*\*\s*Report\s*Electronically\s*Signed\s*by|electronically\s*signed\s*by",
    )
    .unwrap()
});

/// Trimmed, non-blank lines with "... See" / "Comment ..." continuations joined.
fn merged_lines(chunk: &str) -> Vec<String> {
    let raw: Vec<&str> = chunk.lines().map(str::trim).collect();
    let mut merged = Vec::with_capacity(raw.len());

    let mut i = 0;
    while i < raw.len() {
        let line = raw[i];
        i += 1;
        if line.is_empty() {
            continue;
        }
        match raw.get(i) {
            Some(next) if SEE_TAIL.is_match(line) && COMMENT_HEAD.is_match(next) => {
                merged.push(format!("{line} {next}"));
                i += 1;
            }
            _ => merged.push(line.to_string()),
        }
    }
    merged
}

/// Retained diagnosis lines, in order.
///
/// Capturing starts after the `FINAL PATHOLOGIC DIAGNOSIS` header and stops
/// at the first terminator line. Empty when the header never appears.
pub fn isolate_diagnosis(chunk: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut capturing = false;

    for line in merged_lines(chunk) {
        if FINAL_HEADER.is_match(&line) {
            capturing = true;
            continue;
        }
        if !capturing {
            continue;
        }
        if TERMINATORS.iter().any(|t| t.is_match(&line)) {
            break;
        }
        if NOISE.is_match(&line) {
            trace!(line = %line, "dropped boilerplate line");
            continue;
        }
        lines.push(line);
    }

    debug!(lines = lines.len(), "isolated diagnosis block");
    lines
}

//! Split isolated diagnosis lines into labeled specimen records.

use std::sync::LazyLock;

use prostrat_core::models::specimen::Specimen;
use regex::Regex;
use tracing::{debug, warn};

use crate::fields::extract_specimen;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\S\r\n]*([A-Z])[.):]+\s*(.*)").unwrap());
static LEADING_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-+\s*").unwrap());

/// Lines collected for one specimen before field extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSpecimen {
    pub label: char,
    pub location_lines: Vec<String>,
    pub diagnosis_lines: Vec<String>,
    /// Set by the first `-` line; never reverts.
    pub in_diagnosis: bool,
}

impl RawSpecimen {
    fn open(label: char, trailing: &str) -> Self {
        let trailing = trailing.trim();
        RawSpecimen {
            label,
            location_lines: if trailing.is_empty() {
                Vec::new()
            } else {
                vec![trailing.to_string()]
            },
            ..RawSpecimen::default()
        }
    }

    fn push(&mut self, line: &str) {
        if line.starts_with('-') {
            self.in_diagnosis = true;
            self.diagnosis_lines
                .push(LEADING_DASHES.replace(line, "").into_owned());
        } else if self.in_diagnosis {
            self.diagnosis_lines.push(line.to_string());
        } else {
            self.location_lines.push(line.to_string());
        }
    }

    /// Location lines joined with single spaces.
    pub fn location_text(&self) -> String {
        self.location_lines.join(" ")
    }

    /// Diagnosis lines joined, whitespace collapsed.
    pub fn diagnosis_text(&self) -> String {
        self.diagnosis_lines
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Group lines under their specimen headers. Lines before the first header
/// are ignored.
///
/// Labels are unique in the result: a repeated header and the lines under
/// it are dropped, keeping the first section for that label.
pub fn tokenize_specimens<S: AsRef<str>>(lines: &[S]) -> Vec<RawSpecimen> {
    let mut specimens: Vec<RawSpecimen> = Vec::new();
    let mut current: Option<RawSpecimen> = None;

    for line in lines {
        let line = line.as_ref();
        if let Some(caps) = HEADER.captures(line) {
            let label = caps[1].chars().next().unwrap_or('?');
            let trailing = caps.get(2).map_or("", |m| m.as_str());
            specimens.extend(current.take());
            if specimens.iter().any(|s| s.label == label) {
                warn!(label = %label, "repeated specimen label, section ignored");
                continue;
            }
            current = Some(RawSpecimen::open(label, trailing));
        } else if let Some(open) = current.as_mut() {
            open.push(line);
        }
    }
    specimens.extend(current);
    specimens
}

/// Tokenize and run field extraction on every specimen.
pub fn parse_specimens<S: AsRef<str>>(lines: &[S]) -> Vec<Specimen> {
    let specimens: Vec<Specimen> = tokenize_specimens(lines)
        .iter()
        .map(extract_specimen)
        .collect();
    debug!(specimens = specimens.len(), "parsed specimens");
    specimens
}

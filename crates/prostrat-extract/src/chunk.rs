use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ExtractError;

static PROVIDER_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^Provider:\s").unwrap());

/// Split a pasted blob into one chunk per encounter.
///
/// Each chunk starts at a line beginning with `Provider:`. Text before the
/// first anchor belongs to no encounter and is dropped; chunks are trimmed
/// and empty ones discarded.
pub fn chunk_reports(raw: &str) -> Result<Vec<&str>, ExtractError> {
    if raw.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let starts: Vec<usize> = PROVIDER_ANCHOR.find_iter(raw).map(|m| m.start()).collect();
    if starts.is_empty() {
        return Err(ExtractError::NoProviderAnchor);
    }

    let chunks: Vec<&str> = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(raw.len());
            raw[start..end].trim()
        })
        .filter(|chunk| !chunk.is_empty())
        .collect();

    debug!(chunks = chunks.len(), "split report text");
    Ok(chunks)
}

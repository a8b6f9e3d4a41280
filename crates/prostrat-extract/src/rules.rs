//! Ordered `(pattern, handler)` rule lists.
//!
//! Extraction phrasings are tried in a fixed priority order. Keeping each
//! list as data makes that order inspectable from tests instead of being
//! implied by a chain of `if let` blocks.

use regex::{Captures, Regex};
use tracing::trace;

/// A named pattern and the handler that turns its captures into a value.
pub struct Rule<T> {
    pub name: &'static str,
    pub pattern: Regex,
    pub handler: fn(&Captures<'_>) -> Option<T>,
}

impl<T> Rule<T> {
    /// Build a rule from a constant pattern. Only called from `LazyLock`
    /// initializers, so an invalid pattern is a programming error.
    pub fn new(name: &'static str, pattern: &str, handler: fn(&Captures<'_>) -> Option<T>) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("rule {name} has an invalid pattern: {e}"));
        Rule {
            name,
            pattern,
            handler,
        }
    }
}

/// First rule whose pattern matches and whose handler accepts the captures.
pub fn first_match<T>(rules: &[Rule<T>], text: &str) -> Option<T> {
    rules.iter().find_map(|rule| {
        let caps = rule.pattern.captures(text)?;
        let value = (rule.handler)(&caps);
        if value.is_some() {
            trace!(rule = rule.name, "rule matched");
        }
        value
    })
}

/// Every accepted match of every rule, rule by rule in list order.
pub fn all_matches<T>(rules: &[Rule<T>], text: &str) -> Vec<T> {
    rules
        .iter()
        .flat_map(|rule| {
            rule.pattern
                .captures_iter(text)
                .filter_map(move |caps| (rule.handler)(&caps))
        })
        .collect()
}

/// Rule names in priority order.
pub fn rule_names<T>(rules: &[Rule<T>]) -> Vec<&'static str> {
    rules.iter().map(|rule| rule.name).collect()
}

/// Parse capture group `index` as a number.
pub(crate) fn capture_number<N: std::str::FromStr>(caps: &Captures<'_>, index: usize) -> Option<N> {
    caps.get(index)?.as_str().parse().ok()
}

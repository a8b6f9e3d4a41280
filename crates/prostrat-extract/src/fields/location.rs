use std::sync::LazyLock;

use regex::Regex;

/// Normalized site text for one specimen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation {
    pub location: String,
    pub is_target: bool,
    pub leftover_site: String,
}

/// Container phrase to strip; `all` replaces every occurrence instead of the first.
struct Boilerplate {
    pattern: Regex,
    all: bool,
}

static BOILERPLATE: LazyLock<Vec<Boilerplate>> = LazyLock::new(|| {
    [
        (r":\s*$", false),
        (r"(?i)^PROSTATE\s*,?\s*", false),
        (r"(?i)\bNEEDLE\s*(CORE\s*)?BIOPSY\b", false),
        (r"(?i)\bNEEDLE\s*BX\b", false),
        (r"(?i)\bMRI\s*(directed|software\s*fusion)\b", false),
        (r"(?i)\bLESION\s*ZONE\b", true),
        (r"(?i)\bLESION\b", true),
    ]
    .into_iter()
    .map(|(p, all)| Boilerplate {
        pattern: Regex::new(p).unwrap(),
        all,
    })
    .collect()
});

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*[-,]\s*").unwrap());
static TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\btarget\s*#?\s*(\d+)\b").unwrap());

/// Strip boilerplate and the specimen's own label, then split out a
/// `target N` token if present.
pub fn normalize_location(text: &str, label: char) -> ParsedLocation {
    let mut loc = text.to_string();
    for rule in BOILERPLATE.iter() {
        loc = if rule.all {
            rule.pattern.replace_all(&loc, "").into_owned()
        } else {
            rule.pattern.replace(&loc, "").into_owned()
        };
    }

    let label_pattern = format!(r"(?i)\b{}\b\s*", regex::escape(&label.to_string()));
    if let Ok(own_label) = Regex::new(&label_pattern) {
        loc = own_label.replace(&loc, "").into_owned();
    }
    let loc = SEPARATORS.replace_all(&loc, " ").trim().to_string();

    match TARGET.captures(&loc) {
        Some(caps) => {
            let token = caps.get(0).map_or(0..0, |m| m.range());
            let mut rest = loc.clone();
            rest.replace_range(token, "");
            ParsedLocation {
                location: format!("Target {}", &caps[1]),
                is_target: true,
                leftover_site: capitalize_words(rest.trim()),
            }
        }
        None => ParsedLocation {
            location: capitalize_words(&loc),
            is_target: false,
            leftover_site: String::new(),
        },
    }
}

/// Title-case each whitespace-separated word.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

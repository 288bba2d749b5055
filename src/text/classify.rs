//! Predicates for lines that should never end up in an ingredient or
//! instruction list: section headers and metadata captured by scraping.
//!
//! Both are pattern-based and conservative. Missing a header is acceptable;
//! discarding a real ingredient or step is not.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static HEADER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(ingredients|instructions|preparation|directions|steps|method)\s*$",
        r"^to make ",
        r"^how to ",
        r"^\d+\s+(ingredients|instructions|preparation|directions|steps|method)\s*$",
        r"^instructions?preparation\s*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

#[allow(clippy::expect_used)]
static METADATA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^ingredients?\s*\(",
        r"^instructions?\s*:?\s*$",
        r"^\(us cup",
        r"^\(.*cup.*\)$",
        r"^serves?:",
        r"^yield:",
        r"^prep time:",
        r"^cook time:",
        r"^total time:",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True for labels like "Ingredients", "2 Instructions" or "How to serve".
pub fn is_section_header(text: &str) -> bool {
    let folded = fold(text);
    HEADER_PATTERNS.iter().any(|re| re.is_match(&folded))
}

/// True for unit notes, yield lines and time lines.
pub fn is_metadata(text: &str) -> bool {
    let folded = fold(text);
    METADATA_PATTERNS.iter().any(|re| re.is_match(&folded))
}

/// True if the line should be dropped from ingredient and instruction lists.
pub fn is_noise(text: &str) -> bool {
    is_section_header(text) || is_metadata(text)
}

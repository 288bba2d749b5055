//! String-level cleanup for scraped list items.

use regex::Regex;
use std::sync::LazyLock;

/// List-marker glyph some recipe plugins render in front of each item.
pub const CHECKBOX: char = '▢';

#[allow(clippy::expect_used)]
static CHECKBOX_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"▢\s*").expect("valid regex"));

#[allow(clippy::expect_used)]
static DOUBLED_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\(([^)]+)\)\)").expect("valid regex"));

#[allow(clippy::expect_used)]
static SPACED_DOUBLED_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\(([^)]+)\)\)").expect("valid regex"));

#[allow(clippy::expect_used)]
static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid regex"));

/// Removes every checkbox glyph and the whitespace following it, then trims.
pub fn strip_checkboxes(text: &str) -> String {
    CHECKBOX_RUN.replace_all(text, "").trim().to_string()
}

/// Splits on checkbox glyphs and newlines, dropping empty pieces.
///
/// Never returns an empty vector: if nothing survives, the original string
/// is returned unchanged as the only element.
pub fn split_items(text: &str) -> Vec<String> {
    let items: Vec<String> = text
        .split([CHECKBOX, '\n'])
        .map(strip_checkboxes)
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        vec![text.to_string()]
    } else {
        items
    }
}

/// Collapses doubled parentheses and trims whitespace inside each group.
///
/// `((8 oz))` and `( (8 oz))` both become `(8 oz)`; `( packed )` becomes
/// `(packed)`. Checkboxes are stripped first since they show up inside
/// parenthesized qualifiers.
pub fn normalize_parentheses(text: &str) -> String {
    let text = strip_checkboxes(text);
    let text = DOUBLED_PARENS.replace_all(&text, "(${1})");
    let text = SPACED_DOUBLED_PARENS.replace_all(&text, "(${1})");
    // A second pass catches pairs exposed by the spaced collapse.
    let text = DOUBLED_PARENS.replace_all(&text, "(${1})");
    let text = PAREN_GROUP.replace_all(&text, |caps: &regex::Captures| {
        format!("({})", caps[1].trim())
    });
    text.trim().to_string()
}

/// Collapses runs of whitespace (including newlines) into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

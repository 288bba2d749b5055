//! Turns raw scraped ingredient and instruction strings into clean,
//! deduplicated, order-preserving lists.
//!
//! Both lists go through the same stages: per-item cleaning, header and
//! metadata filtering, exact-duplicate removal and fragment collapse. Only
//! the cleaning rules and the fragment thresholds differ.

use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::classify::is_noise;
use super::sanitize::{
    collapse_whitespace, normalize_parentheses, split_items, strip_checkboxes, CHECKBOX,
};

#[allow(clippy::expect_used)]
static INSTRUCTION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^instructions?").expect("valid regex"));

#[allow(clippy::expect_used)]
static NUMBERED_HEADER_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s+(preparation|instructions|directions|steps|method)\s*$")
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
static NUMBERED_HEADER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s+(preparation|instructions|directions|steps|method)\s+")
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
static HEADER_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(preparation|instructions|directions|steps|method)\s*$")
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
static HEADER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(preparation|instructions|directions|steps|method)\s+")
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
static STEP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\s+").expect("valid regex"));

/// Thresholds for the fragment-collapse stage.
#[derive(Debug, Clone, Copy)]
struct FragmentRules {
    /// Keys shorter than this (in chars) are dropped as fragments...
    min_len: usize,
    /// ...unless purely numeric, or a single letter when this is set.
    keep_single_letter: bool,
    /// Minimum length difference for one key to count as a fragment of another.
    min_gap: usize,
}

const INGREDIENT_RULES: FragmentRules = FragmentRules {
    min_len: 3,
    keep_single_letter: true,
    min_gap: 5,
};

const INSTRUCTION_RULES: FragmentRules = FragmentRules {
    min_len: 5,
    keep_single_letter: false,
    min_gap: 10,
};

/// Cleans a list of raw ingredient strings.
pub fn normalize_ingredients<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut cleaned = Vec::new();

    for item in raw {
        let item = item.as_ref().trim();
        if item.is_empty() {
            continue;
        }

        let pieces = if item.contains(CHECKBOX) {
            split_items(item)
        } else {
            vec![item.to_string()]
        };

        cleaned.extend(
            pieces
                .iter()
                .map(|piece| collapse_whitespace(&normalize_parentheses(piece)))
                .filter(|piece| !piece.is_empty() && !is_noise(piece)),
        );
    }

    let result = collapse_fragments(dedupe_exact(cleaned), INGREDIENT_RULES);
    debug!(
        "normalize_ingredients: {} raw -> {} clean",
        raw.len(),
        result.len()
    );
    result
}

/// Cleans a list of raw instruction strings.
pub fn normalize_instructions<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut cleaned = Vec::new();

    for item in raw {
        let item = item.as_ref();
        if item.trim().is_empty() {
            continue;
        }

        // Several glyphs mean several steps were rendered into one element.
        let pieces = if item.matches(CHECKBOX).count() >= 2 {
            split_items(item)
        } else {
            vec![item.to_string()]
        };

        cleaned.extend(
            pieces
                .iter()
                .map(|piece| clean_instruction_text(piece))
                .filter(|piece| !piece.is_empty() && !is_noise(piece)),
        );
    }

    let result = collapse_fragments(dedupe_exact(cleaned), INSTRUCTION_RULES);
    debug!(
        "normalize_instructions: {} raw -> {} clean",
        raw.len(),
        result.len()
    );
    result
}

/// Strips checkboxes, fused header tokens and step numbers from one step.
///
/// Returns an empty string when nothing but a header remains.
pub fn clean_instruction_text(text: &str) -> String {
    let text = strip_checkboxes(text);
    let text = strip_instruction_token(&text);

    if NUMBERED_HEADER_ONLY.is_match(text) {
        return String::new();
    }
    let text = NUMBERED_HEADER_PREFIX.replace(text, "");
    let text = text.trim();

    if HEADER_ONLY.is_match(text) {
        return String::new();
    }
    let text = HEADER_PREFIX.replace(text, "");
    let text = STEP_NUMBER.replace(text.trim(), "");

    collapse_whitespace(&text)
}

/// Drops a leading "Instruction(s)" that was glued onto the next word by
/// the page markup, as in "InstructionsPreparation". A following lowercase
/// letter means the word is something else ("Instructional").
fn strip_instruction_token(text: &str) -> &str {
    if let Some(token) = INSTRUCTION_TOKEN.find(text) {
        let rest = &text[token.end()..];
        if rest.chars().next().map_or(true, |c| !c.is_lowercase()) {
            return rest.trim();
        }
    }
    text
}

/// Removes case- and whitespace-insensitive duplicates. First one wins.
fn dedupe_exact(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.trim().to_lowercase()))
        .collect()
}

fn is_numeric(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_digit())
}

fn is_single_letter(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// Drops short fragments and partial copies of other items.
///
/// For each item, the first already-kept item it stands in a containment
/// relation with decides the outcome: a shorter contained item is dropped,
/// a longer containing item evicts the kept one and is appended. Only one
/// relation is resolved per item, so chains of partial overlaps are not
/// guaranteed to end at the globally longest string.
fn collapse_fragments(items: Vec<String>, rules: FragmentRules) -> Vec<String> {
    // (key, item) in output order; keys are trimmed and lower-cased.
    let mut kept: Vec<(String, String)> = Vec::new();

    for item in items {
        let key = item.trim().to_lowercase();
        if kept.iter().any(|(seen, _)| *seen == key) {
            continue;
        }

        let len = key.chars().count();
        if len < rules.min_len
            && !is_numeric(&key)
            && !(rules.keep_single_letter && is_single_letter(&key))
        {
            debug!("Dropping short fragment: {:?}", item);
            continue;
        }

        let mut is_fragment = false;
        for index in 0..kept.len() {
            let seen = &kept[index].0;
            let seen_len = seen.chars().count();

            if len < seen_len && seen.contains(&key) && seen_len - len >= rules.min_gap {
                debug!("Dropping {:?}, fragment of {:?}", item, kept[index].1);
                is_fragment = true;
                break;
            }
            if len > seen_len && key.contains(seen.as_str()) && len - seen_len >= rules.min_gap {
                debug!("Replacing {:?} with longer {:?}", kept[index].1, item);
                kept.remove(index);
                break;
            }
        }

        if !is_fragment {
            kept.push((key, item));
        }
    }

    kept.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_checkbox_split_and_metadata() {
        let raw = [
            "▢ 2 cups flour▢1 tsp salt",
            "2 cups flour",
            "Ingredients (US cup = 240ml)",
        ];
        assert_eq!(normalize_ingredients(&raw), vec!["2 cups flour", "1 tsp salt"]);
    }

    #[test]
    fn test_ingredients_keep_short_tokens() {
        let raw = ["1", "g", "2 cups whole milk", "ab"];
        assert_eq!(
            normalize_ingredients(&raw),
            vec!["1", "g", "2 cups whole milk"]
        );
    }

    #[test]
    fn test_ingredients_drop_headers_and_empty() {
        let raw = ["Ingredients", "", "   ", "For the sauce:", "1 onion", "Serves: 4"];
        assert_eq!(
            normalize_ingredients(&raw),
            vec!["For the sauce:", "1 onion"]
        );
    }

    #[test]
    fn test_ingredients_case_insensitive_duplicates() {
        let raw = ["1 Cup Sugar", "1 cup sugar ", "1 CUP SUGAR"];
        assert_eq!(normalize_ingredients(&raw), vec!["1 Cup Sugar"]);
    }

    #[test]
    fn test_ingredients_fragment_dropped() {
        let raw = ["400g chicken thighs, boneless", "chicken thighs"];
        assert_eq!(
            normalize_ingredients(&raw),
            vec!["400g chicken thighs, boneless"]
        );
    }

    #[test]
    fn test_ingredients_small_gap_kept() {
        // "sea salt" is only 4 chars longer than "salt"
        let raw = ["salt", "sea salt"];
        assert_eq!(normalize_ingredients(&raw), vec!["salt", "sea salt"]);
    }

    #[test]
    fn test_longer_item_evicts_earlier_fragment() {
        let raw = [
            "Preheat oven",
            "Chop the onions finely",
            "Preheat oven to 375°F and grease a pan",
        ];
        assert_eq!(
            normalize_instructions(&raw),
            vec![
                "Chop the onions finely",
                "Preheat oven to 375°F and grease a pan"
            ]
        );
    }

    #[test]
    fn test_instructions_fragment_collapse() {
        let raw = ["Preheat oven", "Preheat oven to 375°F and grease a pan"];
        assert_eq!(
            normalize_instructions(&raw),
            vec!["Preheat oven to 375°F and grease a pan"]
        );
    }

    #[test]
    fn test_instructions_headers_and_numbers() {
        let raw = [
            "InstructionsPreparation",
            "1 Preparation",
            "1. Boil the water in a large pot.",
            "2 Preparation Cut the gobi into florets.",
            "Directions Season with salt and pepper.",
            "Method",
        ];
        assert_eq!(
            normalize_instructions(&raw),
            vec![
                "Boil the water in a large pot.",
                "Cut the gobi into florets.",
                "Season with salt and pepper."
            ]
        );
    }

    #[test]
    fn test_instructions_whitespace_collapsed() {
        let raw = ["Whisk   the eggs\n  with the\tsugar."];
        assert_eq!(
            normalize_instructions(&raw),
            vec!["Whisk the eggs with the sugar."]
        );
    }

    #[test]
    fn test_instructions_multi_checkbox_split() {
        let raw = ["▢ Mix the dry ingredients. ▢ Add the eggs and milk. ▢ Bake 20 minutes."];
        assert_eq!(
            normalize_instructions(&raw),
            vec![
                "Mix the dry ingredients.",
                "Add the eggs and milk.",
                "Bake 20 minutes."
            ]
        );
    }

    #[test]
    fn test_instructions_two_checkboxes_split() {
        let raw = ["▢ Boil the pasta until al dente. ▢ Drain and toss with butter."];
        assert_eq!(
            normalize_instructions(&raw),
            vec!["Boil the pasta until al dente.", "Drain and toss with butter."]
        );
    }

    #[test]
    fn test_instructions_single_checkbox_not_split() {
        // One glyph is stripped in place, not treated as a step boundary
        let raw = ["Mix well▢ then bake it"];
        assert_eq!(normalize_instructions(&raw), vec!["Mix wellthen bake it"]);
    }

    #[test]
    fn test_ingredients_inner_whitespace_collapsed() {
        let raw = ["1 cup\n  flour", "2 cups  sugar", "2 cups sugar"];
        assert_eq!(
            normalize_ingredients(&raw),
            vec!["1 cup flour", "2 cups sugar"]
        );
    }

    #[test]
    fn test_instructions_short_items_dropped() {
        let raw = ["Stir", "42", "Serve warm with crusty bread."];
        assert_eq!(
            normalize_instructions(&raw),
            vec!["42", "Serve warm with crusty bread."]
        );
    }

    #[test]
    fn test_clean_instruction_text() {
        assert_eq!(clean_instruction_text("InstructionsMix well"), "Mix well");
        assert_eq!(
            clean_instruction_text("Instructional videos help a lot"),
            "Instructional videos help a lot"
        );
        assert_eq!(clean_instruction_text("3 Steps"), "");
        assert_eq!(clean_instruction_text("Steps"), "");
        assert_eq!(clean_instruction_text("12 Stir constantly."), "Stir constantly.");
        assert_eq!(clean_instruction_text("▢ 4. Let it rest."), "Let it rest.");
    }

    #[test]
    fn test_fragment_first_match_wins() {
        // The new item relates to the first kept item only; the later one
        // is left untouched even though it is also contained.
        let raw = ["simmer gently", "stir", "simmer gently and stir often for ten minutes"];
        let rules = FragmentRules {
            min_len: 1,
            keep_single_letter: false,
            min_gap: 5,
        };
        let items = raw.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            collapse_fragments(items, rules),
            vec!["stir", "simmer gently and stir often for ten minutes"]
        );
    }
}

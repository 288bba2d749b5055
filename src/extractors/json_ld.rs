use super::{Extraction, Extractor, ParsingContext};
use crate::error::ScrapeError;
use crate::model::RawRecipe;
use crate::text::{is_noise, split_items, CHECKBOX};
use html_escape::decode_html_entities;
use log::debug;
use regex::Regex;
use scraper::Selector;
use serde_json::Value;
use std::sync::LazyLock;

/// Reads schema.org `Recipe` objects from `application/ld+json` scripts.
pub struct JsonLdExtractor;

#[allow(clippy::expect_used)]
static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?$")
        .expect("valid regex")
});

fn decode_html_symbols(text: &str) -> String {
    // for some reason need to decode twice to get the correct string
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(kind)) => kind.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| kind.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

/// Finds the Recipe object in a parsed block: the root itself, the first
/// matching entry of a root array, or the first matching `@graph` entry.
fn find_recipe(json_ld: &Value) -> Option<&Value> {
    if let Some(items) = json_ld.as_array() {
        return items.iter().find(|item| is_recipe_type(item));
    }
    if is_recipe_type(json_ld) {
        return Some(json_ld);
    }
    json_ld
        .get("@graph")
        .and_then(Value::as_array)
        .and_then(|items| items.iter().find(|item| is_recipe_type(item)))
}

/// String form of a scalar, or the text/name of an object.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(obj) => obj
            .get("text")
            .or_else(|| obj.get("name"))
            .map(value_to_string)
            .unwrap_or_else(|| value.to_string()),
        Value::Array(_) => value.to_string(),
    }
}

fn clean_list(items: impl IntoIterator<Item = String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| decode_html_symbols(item.trim()))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Re-splits a list that arrived as one glyph-separated string, then drops
/// headers that some sites embed inside the structured data itself.
fn finish_list(mut items: Vec<String>) -> Vec<String> {
    if items.len() == 1 && items[0].contains(CHECKBOX) {
        items = split_items(&items[0]);
    }
    items.retain(|item| !is_noise(item));
    items
}

fn extract_ingredients(recipe: &Value) -> Vec<String> {
    let items = match (recipe.get("recipeIngredient"), recipe.get("ingredients")) {
        (Some(Value::Array(items)), _) => clean_list(items.iter().map(value_to_string)),
        (Some(Value::String(text)), _) => clean_list([text.clone()]),
        (_, Some(Value::Array(items))) => clean_list(items.iter().map(value_to_string)),
        (_, Some(value)) if !value.is_null() => clean_list([value_to_string(value)]),
        _ => Vec::new(),
    };
    finish_list(items)
}

fn collect_steps(value: &Value, steps: &mut Vec<String>) {
    match value {
        Value::String(text) => steps.push(text.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_steps(item, steps)),
        Value::Object(obj) => {
            if let Some(text) = obj.get("text") {
                steps.push(value_to_string(text));
            } else if let Some(items) = obj.get("itemListElement") {
                // HowToSection
                collect_steps(items, steps);
            } else if let Some(name) = obj.get("name").and_then(Value::as_str) {
                steps.push(name.to_string());
            }
        }
        _ => {}
    }
}

fn extract_instructions(recipe: &Value) -> Vec<String> {
    let mut steps = Vec::new();
    if let Some(instructions) = recipe.get("recipeInstructions") {
        collect_steps(instructions, &mut steps);
    }
    finish_list(clean_list(steps))
}

fn extract_yield(recipe: &Value) -> Option<String> {
    let value = ["recipeYield", "yield"]
        .iter()
        .filter_map(|key| recipe.get(*key))
        .find(|value| !value.is_null())?;

    let text = match value {
        Value::Array(items) => {
            let options: Vec<String> = items.iter().map(value_to_string).collect();
            // Prefer "4 servings" over a bare "4"
            options
                .iter()
                .find(|s| s.contains(char::is_alphabetic))
                .or_else(|| options.first())
                .cloned()
                .unwrap_or_default()
        }
        other => value_to_string(other),
    };

    let text = decode_html_symbols(text.trim());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Converts a schema.org time value to whole minutes.
///
/// Numbers are returned as-is, integer strings are parsed, and ISO 8601
/// durations such as `PT1H30M` are folded into minutes. Anything else is
/// treated as absent.
pub fn parse_time(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|minutes| u32::try_from(minutes).ok())
            .or_else(|| {
                n.as_f64()
                    .filter(|minutes| *minutes >= 0.0 && *minutes <= f64::from(u32::MAX))
                    .map(|minutes| minutes as u32)
            }),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u32>()
                .ok()
                .or_else(|| parse_iso_duration(text))
        }
        _ => None,
    }
}

fn parse_iso_duration(text: &str) -> Option<u32> {
    let caps = ISO_DURATION.captures(text)?;
    let part = |index: usize| -> Option<u32> {
        caps.get(index)
            .map_or(Some(0), |m| m.as_str().parse::<u32>().ok())
    };

    let days = part(1)?;
    let hours = part(2)?;
    let minutes = part(3)?;
    let seconds = caps
        .get(4)
        .map_or(Some(0.0), |m| m.as_str().parse::<f64>().ok())?;

    Some(
        days.saturating_mul(24 * 60)
            .saturating_add(hours.saturating_mul(60))
            .saturating_add(minutes)
            .saturating_add((seconds / 60.0).round() as u32),
    )
}

fn sanitize_json(json_str: &str) -> String {
    json_str
        .trim()
        .replace("<!--", "")
        .replace("-->", "")
        .replace(",]", "]")
        .replace(",}", "}")
}

fn parse_block(raw_json: &str) -> Result<Value, ScrapeError> {
    serde_json::from_str::<Value>(&sanitize_json(raw_json))
        .map_err(|e| ScrapeError::MalformedStructuredData(e.to_string()))
}

fn convert_to_recipe(recipe: &Value, url: &str) -> RawRecipe {
    RawRecipe {
        title: recipe
            .get("name")
            .map(|name| decode_html_symbols(value_to_string(name).trim()))
            .unwrap_or_default(),
        ingredients: extract_ingredients(recipe),
        instructions: extract_instructions(recipe),
        serves: extract_yield(recipe),
        total_time_minutes: recipe.get("totalTime").and_then(parse_time),
        source_url: url.to_string(),
    }
}

impl Extractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "json_ld"
    }

    fn extract(&self, context: &ParsingContext) -> Extraction {
        debug!("JsonLdExtractor: Starting parse for URL: {}", context.url);
        let Ok(selector) = Selector::parse("script[type='application/ld+json']") else {
            return Extraction::NotFound;
        };

        for (index, script) in context.document.select(&selector).enumerate() {
            let json_ld = match parse_block(&script.inner_html()) {
                Ok(json_ld) => json_ld,
                Err(e) => {
                    debug!("JsonLdExtractor: Skipping script {}: {}", index, e);
                    continue;
                }
            };

            if let Some(recipe) = find_recipe(&json_ld) {
                let recipe = convert_to_recipe(recipe, &context.url);
                debug!(
                    "JsonLdExtractor: Found recipe {:?} in script {} ({} ingredients, {} instructions)",
                    recipe.title,
                    index,
                    recipe.ingredients.len(),
                    recipe.instructions.len()
                );
                return Extraction::Found(recipe);
            }
            debug!("JsonLdExtractor: No recipe in script {}", index);
        }

        debug!("JsonLdExtractor: No valid recipe found in any JSON-LD script");
        Extraction::NotFound
    }
}

use super::{Extraction, Extractor, ParsingContext};
use crate::model::{RawRecipe, UNTITLED_RECIPE};
use crate::text::{is_noise, split_items, CHECKBOX};
use log::debug;
use scraper::{Html, Selector};

/// Fallback extractor that scans common recipe-plugin markup.
pub struct HtmlClassExtractor;

/// Tried in order; the first selector with any match wins.
const INGREDIENT_SELECTORS: &[&str] = &[
    "[itemprop='recipeIngredient']",
    ".ingredient",
    ".ingredients li",
    "[class*='ingredient']",
];

const INSTRUCTION_SELECTORS: &[&str] = &[
    "[itemprop='recipeInstructions'] li",
    "[itemprop='recipeInstructions'] p",
    ".instruction",
    ".instructions li",
    "[class*='instruction']",
];

/// Trimmed text content of every element matching `selector`, in document
/// order. An unparsable selector matches nothing.
pub fn element_texts(document: &Html, selector: &str) -> Vec<String> {
    match Selector::parse(selector) {
        Ok(selector) => document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

fn first_text(document: &Html, selector: &str) -> Option<String> {
    element_texts(document, selector)
        .into_iter()
        .next()
        .filter(|text| !text.is_empty())
}

fn extract_title(document: &Html) -> String {
    first_text(document, "h1")
        .or_else(|| meta_content(document, "meta[property='og:title']"))
        .or_else(|| first_text(document, "title"))
        .unwrap_or_else(|| UNTITLED_RECIPE.to_string())
}

fn collect_list(document: &Html, selectors: &[&str], field: &str) -> Vec<String> {
    for selector in selectors {
        let texts = element_texts(document, selector);
        if texts.is_empty() {
            continue;
        }

        debug!(
            "HtmlClassExtractor: Found {} {} candidates using selector: {}",
            texts.len(),
            field,
            selector
        );
        let mut items: Vec<String> = texts
            .into_iter()
            .filter(|text| !text.is_empty() && !is_noise(text))
            .collect();

        if items.len() == 1 && items[0].contains(CHECKBOX) {
            items = split_items(&items[0]);
        }
        return items;
    }
    Vec::new()
}

impl Extractor for HtmlClassExtractor {
    fn name(&self) -> &'static str {
        "html_class"
    }

    fn extract(&self, context: &ParsingContext) -> Extraction {
        debug!("Attempting to extract recipe using HTML class matchers");
        let document = &context.document;

        let ingredients = collect_list(document, INGREDIENT_SELECTORS, "ingredients");
        let instructions = collect_list(document, INSTRUCTION_SELECTORS, "instructions");

        if ingredients.is_empty() && instructions.is_empty() {
            debug!("HtmlClassExtractor: Could not extract recipe content from HTML");
            return Extraction::NotFound;
        }

        let title = extract_title(document);
        debug!(
            "HtmlClassExtractor: {:?} with {} ingredients, {} instructions",
            title,
            ingredients.len(),
            instructions.len()
        );

        Extraction::Found(RawRecipe {
            title,
            ingredients,
            instructions,
            serves: None,
            total_time_minutes: None,
            source_url: context.url.clone(),
        })
    }
}

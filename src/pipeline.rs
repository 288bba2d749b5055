//! Fetch, extract, clean and render a recipe page.
//!
//! ```text
//! Fetching -> ExtractingStructured -> Validating -> Formatting -> Done
//!                  | nothing usable        ^
//!                  v                       |
//!             ExtractingHeuristic ---------+
//! ```
//!
//! Any stage may end in `Failed`. Only fetching touches the network; the
//! rest is synchronous and can be driven directly with [`process_document`].

use crate::error::ScrapeError;
use crate::extractors::{
    Extraction, Extractor, HtmlClassExtractor, JsonLdExtractor, ParsingContext,
};
use crate::fetchers::Fetcher;
use crate::formatter::{format_markdown, FormatOptions};
use crate::model::{CleanRecipe, RawRecipe, RenderedRecipe, UNTITLED_RECIPE};
use crate::text::{normalize_ingredients, normalize_instructions};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    ExtractingStructured,
    ExtractingHeuristic,
    Validating,
    Formatting,
    Done,
    Failed,
}

fn enter(stage: Stage) -> Stage {
    debug!("pipeline: -> {:?}", stage);
    stage
}

fn fail(stage: Stage, err: ScrapeError) -> ScrapeError {
    warn!("pipeline: {:?} -> {:?}: {}", stage, Stage::Failed, err);
    err
}

/// Fetches `url` and turns the page into a rendered recipe.
pub async fn process(
    url: &str,
    fetcher: &dyn Fetcher,
    options: &FormatOptions,
) -> Result<RenderedRecipe, ScrapeError> {
    let stage = enter(Stage::Fetching);
    let html = fetcher.fetch(url).await.map_err(|e| fail(stage, e))?;
    process_document(&html, url, options)
}

/// Runs extraction, cleanup and formatting on an already-fetched page.
pub fn process_document(
    html: &str,
    url: &str,
    options: &FormatOptions,
) -> Result<RenderedRecipe, ScrapeError> {
    let context = ParsingContext::new(url, html);
    let raw = extract(&context)?;

    enter(Stage::Validating);
    let recipe = clean(raw);

    enter(Stage::Formatting);
    let markdown = format_markdown(&recipe, options);

    enter(Stage::Done);
    Ok(RenderedRecipe {
        title: recipe.title,
        markdown,
        serves: recipe.serves,
        total_time_minutes: recipe.total_time_minutes,
    })
}

/// Tries structured data first, then the HTML heuristics.
///
/// Fails with [`ScrapeError::UnsupportedSite`] when neither yields any
/// ingredients.
pub fn extract(context: &ParsingContext) -> Result<RawRecipe, ScrapeError> {
    let extractors: [(&dyn Extractor, Stage); 2] = [
        (&JsonLdExtractor, Stage::ExtractingStructured),
        (&HtmlClassExtractor, Stage::ExtractingHeuristic),
    ];

    let mut stage = Stage::ExtractingStructured;
    for (extractor, extractor_stage) in extractors {
        stage = enter(extractor_stage);
        match extractor.extract(context) {
            Extraction::Found(recipe) if recipe.is_usable() => {
                debug!("pipeline: {} produced a usable recipe", extractor.name());
                return Ok(recipe);
            }
            Extraction::Found(_) => {
                debug!("pipeline: {} found a recipe without ingredients", extractor.name());
            }
            Extraction::NotFound => {
                debug!("pipeline: {} found nothing", extractor.name());
            }
        }
    }

    Err(fail(stage, ScrapeError::UnsupportedSite))
}

/// Normalizes both lists and fills in a missing title.
pub fn clean(raw: RawRecipe) -> CleanRecipe {
    let title = if raw.title.trim().is_empty() {
        UNTITLED_RECIPE.to_string()
    } else {
        raw.title
    };

    CleanRecipe {
        title,
        ingredients: normalize_ingredients(&raw.ingredients),
        instructions: normalize_instructions(&raw.instructions),
        serves: raw.serves,
        total_time_minutes: raw.total_time_minutes,
        source_url: raw.source_url,
    }
}

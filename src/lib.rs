//! Extract recipes from web pages into clean, deduplicated markdown.
//!
//! A page is searched for schema.org JSON-LD first and for common recipe
//! markup second. The ingredient and instruction lists are then stripped of
//! layout artifacts (checkbox glyphs, glued-on section headers, repeated or
//! truncated lines) and rendered as markdown.

pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod formatter;
pub mod model;
pub mod pipeline;
pub mod text;

pub use builder::{RecipeScraper, RecipeScraperBuilder};
pub use error::ScrapeError;
pub use formatter::FormatOptions;
pub use model::{CleanRecipe, RawRecipe, RenderedRecipe};
pub use pipeline::process_document;

use crate::config::HttpConfig;
use crate::error::validate_url;
use crate::fetchers::RequestFetcher;

/// Scrapes `url` with default settings.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_scraper::ScrapeError> {
/// let recipe = recipe_scraper::extract_recipe("https://example.com/recipe").await?;
/// println!("{}", recipe.markdown);
/// # Ok(())
/// # }
/// ```
pub async fn extract_recipe(url: &str) -> Result<RenderedRecipe, ScrapeError> {
    extract_recipe_with_options(url, &HttpConfig::default(), &FormatOptions::default()).await
}

/// Scrapes `url` with explicit HTTP and formatting settings.
pub async fn extract_recipe_with_options(
    url: &str,
    http: &HttpConfig,
    format: &FormatOptions,
) -> Result<RenderedRecipe, ScrapeError> {
    validate_url(url)?;
    let fetcher = RequestFetcher::new(http)?;
    pipeline::process(url, &fetcher, format).await
}

use std::time::Duration;

use crate::config::{load_config, ScraperConfig};
use crate::error::validate_url;
use crate::fetchers::{Fetcher, RequestFetcher};
use crate::pipeline;
use crate::{RenderedRecipe, ScrapeError};

/// Builder for configuring and running a recipe extraction
#[derive(Default)]
pub struct RecipeScraperBuilder {
    url: Option<String>,
    config: Option<ScraperConfig>,
    timeout: Option<Duration>,
    include_time: Option<bool>,
    include_yield: Option<bool>,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl RecipeScraperBuilder {
    /// Set the recipe page to scrape
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Use an explicit configuration instead of loading config.toml and
    /// the environment
    pub fn config(mut self, config: ScraperConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a timeout for the HTTP request
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .url("https://example.com/recipe")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Whether to render the "Total Time" line (default: true)
    pub fn include_time(mut self, include: bool) -> Self {
        self.include_time = Some(include);
        self
    }

    /// Whether to render the "Serves" line (default: true)
    pub fn include_yield(mut self, include: bool) -> Self {
        self.include_yield = Some(include);
        self
    }

    /// Fetch pages with a custom [`Fetcher`] instead of HTTP
    pub fn fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Build and run the extraction
    ///
    /// # Errors
    /// Returns `ScrapeError` if:
    /// - No URL was specified, or it is not an http(s) URL
    /// - The configuration cannot be loaded
    /// - The page cannot be fetched
    /// - No recipe with ingredients can be found on the page
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_scraper::RecipeScraper;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeScraper::builder()
    ///     .url("https://example.com/recipe")
    ///     .include_time(false)
    ///     .build()
    ///     .await?;
    /// println!("{}\n\n{}", recipe.title, recipe.markdown);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<RenderedRecipe, ScrapeError> {
        let url = self.url.ok_or_else(|| {
            ScrapeError::BuilderError("No URL specified. Use .url()".to_string())
        })?;
        validate_url(&url)?;

        let mut config = match self.config {
            Some(config) => config,
            None => load_config()?,
        };
        if let Some(timeout) = self.timeout {
            config.http.timeout = timeout.as_secs().max(1);
        }
        if let Some(include) = self.include_time {
            config.format.include_time = include;
        }
        if let Some(include) = self.include_yield {
            config.format.include_yield = include;
        }

        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(RequestFetcher::new(&config.http)?),
        };

        pipeline::process(&url, fetcher.as_ref(), &config.format).await
    }
}

/// Main entry point for the builder API
pub struct RecipeScraper;

impl RecipeScraper {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    ///
    /// let builder = RecipeScraper::builder();
    /// ```
    pub fn builder() -> RecipeScraperBuilder {
        RecipeScraperBuilder::default()
    }
}

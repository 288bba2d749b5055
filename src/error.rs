use thiserror::Error;

/// Errors that can occur while scraping a recipe
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The URL is missing, malformed, or not http(s)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error or non-success HTTP status
    #[error("Failed to fetch: {0}")]
    FetchFailure(String),

    /// Neither extractor produced a usable ingredient list
    #[error("Could not extract recipe data from this URL. The site may not be supported.")]
    UnsupportedSite,

    /// A single JSON-LD block could not be parsed. Recovered internally.
    #[error("Malformed structured data: {0}")]
    MalformedStructuredData(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::FetchFailure(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ScrapeError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        ScrapeError::BuilderError(format!("Invalid header value: {err}"))
    }
}

/// Validates that `url` is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<(), ScrapeError> {
    if url.trim().is_empty() {
        return Err(ScrapeError::InvalidInput("URL is required".to_string()));
    }
    let parsed = reqwest::Url::parse(url)
        .map_err(|_| ScrapeError::InvalidInput("Invalid URL format".to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ScrapeError::InvalidInput(format!(
            "Unsupported URL scheme: {scheme}"
        ))),
    }
}

use crate::error::ScrapeError;
use async_trait::async_trait;

mod request;

pub use request::RequestFetcher;

/// Retrieves the HTML of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

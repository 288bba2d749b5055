use crate::model::RawRecipe;
use scraper::Html;

mod html_class;
mod json_ld;

pub use html_class::{element_texts, HtmlClassExtractor};
pub use json_ld::{parse_time, JsonLdExtractor};

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}

/// Outcome of one extraction strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Found(RawRecipe),
    NotFound,
}

pub trait Extractor {
    fn name(&self) -> &'static str;
    fn extract(&self, context: &ParsingContext) -> Extraction;
}

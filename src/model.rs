use serde::Serialize;

/// Title used when a page offers none.
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

/// Recipe data as found on the page, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub serves: Option<String>,
    pub total_time_minutes: Option<u32>,
    pub source_url: String,
}

impl RawRecipe {
    /// A recipe without ingredients triggers the fallback extractor or fails.
    pub fn is_usable(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

/// Recipe with cleaned, deduplicated ingredient and instruction lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub serves: Option<String>,
    pub total_time_minutes: Option<u32>,
    pub source_url: String,
}

/// Final extraction result. The markdown body never contains the title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedRecipe {
    pub title: String,
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serves: Option<String>,
    #[serde(rename = "totalTime", skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<u32>,
}

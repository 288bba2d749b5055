use crate::model::CleanRecipe;
use serde::Deserialize;

/// Which optional metadata lines to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FormatOptions {
    #[serde(default = "default_true")]
    pub include_time: bool,
    #[serde(default = "default_true")]
    pub include_yield: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_time: true,
            include_yield: true,
        }
    }
}

/// Renders a cleaned recipe as markdown.
///
/// The title is left out since callers display it separately. Ingredients
/// become a bullet list and instructions a 1-indexed numbered list, in the
/// order given.
pub fn format_markdown(recipe: &CleanRecipe, options: &FormatOptions) -> String {
    let mut markdown = format!("**Link to original recipe:** {}\n\n", recipe.source_url);

    if options.include_yield {
        if let Some(serves) = recipe.serves.as_deref().filter(|s| !s.is_empty()) {
            markdown.push_str(&format!("**Serves:** {serves}\n"));
        }
    }
    if options.include_time {
        // zero means the page gave a duration without any hours or minutes
        if let Some(minutes) = recipe.total_time_minutes.filter(|m| *m > 0) {
            markdown.push_str(&format!("**Total Time:** {minutes} mins\n"));
        }
    }

    markdown.push_str("\n## Ingredients\n\n");
    for ingredient in &recipe.ingredients {
        markdown.push_str(&format!("- {ingredient}\n"));
    }

    markdown.push_str("\n## Instructions\n\n");
    for (i, instruction) in recipe.instructions.iter().enumerate() {
        markdown.push_str(&format!("{}. {}\n", i + 1, instruction));
    }

    markdown
}

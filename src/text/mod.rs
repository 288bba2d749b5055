//! Text cleanup for scraped recipe lists.

pub mod classify;
pub mod normalize;
pub mod sanitize;

pub use classify::{is_metadata, is_noise, is_section_header};
pub use normalize::{clean_instruction_text, normalize_ingredients, normalize_instructions};
pub use sanitize::{normalize_parentheses, split_items, strip_checkboxes, CHECKBOX};

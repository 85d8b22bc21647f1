//! Categories group transactions and give them a colored badge.
//!
//! This module contains:
//! - The `Category` model and the default categories created on first use
//! - Case-insensitive lookup by name and the color palettes for new categories
//! - The view for the category name suggestions

mod domain;
mod suggestions;

pub use domain::{
    Category, CategoryId, DEFAULT_CATEGORIES, NewCategory, find_category_by_name, pick_color,
    random_seed,
};
pub use suggestions::{CATEGORY_SUGGESTIONS_ID, category_suggestions_view};

#[cfg(test)]
pub use domain::palette;

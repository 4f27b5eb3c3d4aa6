//! Presentation helpers for a rendering layer.
//!
//! Nothing here mutates state; cards are rebuilt from the collections after
//! every change and carry the index an edit/delete action must be sent back with.

mod cards;
mod highlight;

pub use cards::{category_cards, recipe_cards, CardAction, CategoryCard, RecipeCard};
pub use highlight::{highlight_html, highlight_with};

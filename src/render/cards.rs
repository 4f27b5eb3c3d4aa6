use html_escape::encode_text;

use super::highlight::highlight_html;
use crate::categories::CategoryCollection;
use crate::collection::RecipeCollection;
use crate::model::SearchField;
use crate::search::Highlight;

/// What activating a card does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Browsing: navigate to the page keyed by recipe title or category name
    Open { key: String },
    /// Editing: offer edit and delete for the record at `index`
    Manage { index: usize },
}

/// One recipe in a rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub index: usize,
    /// Escaped title, with the search match marked when it is in the title
    pub title_html: String,
    /// Escaped category, with the search match marked when it is in the category
    pub category_html: String,
    /// Escaped code, with the search match marked when it is in the code
    pub code_html: String,
    pub photo: String,
    pub action: CardAction,
}

/// One category in a rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub index: usize,
    /// Title-cased, escaped name
    pub label_html: String,
    pub action: CardAction,
}

fn marked(text: &str, field: SearchField, highlight: Option<&Highlight>) -> String {
    match highlight {
        Some(h) if h.field == field => highlight_html(text, Some(h.range())),
        _ => encode_text(text).into_owned(),
    }
}

/// Cards for the current view of `collection`, scoped to `category` if given
pub fn recipe_cards(collection: &RecipeCollection, category: Option<&str>) -> Vec<RecipeCard> {
    let editing = collection.is_editing();

    collection
        .matches(category)
        .map(|m| {
            let highlight = m.highlight.as_ref();
            RecipeCard {
                index: m.index,
                title_html: marked(&m.recipe.title, SearchField::Title, highlight),
                category_html: marked(&m.recipe.category, SearchField::Category, highlight),
                code_html: marked(&m.recipe.code, SearchField::Code, highlight),
                photo: m.recipe.photo.clone(),
                action: if editing {
                    CardAction::Manage { index: m.index }
                } else {
                    CardAction::Open {
                        key: m.recipe.title.clone(),
                    }
                },
            }
        })
        .collect()
}

/// Cards for every stored category
pub fn category_cards(categories: &CategoryCollection) -> Vec<CategoryCard> {
    let editing = categories.is_editing();

    categories
        .view()
        .map(|entry| CategoryCard {
            index: entry.index,
            label_html: encode_text(&entry.display).into_owned(),
            action: if editing {
                CardAction::Manage { index: entry.index }
            } else {
                CardAction::Open {
                    key: entry.name.to_string(),
                }
            },
        })
        .collect()
}

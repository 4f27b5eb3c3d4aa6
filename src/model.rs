use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// `title` is the lookup key used across pages. Uniqueness is not enforced;
/// lookups by title return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation date in `YYYY-MM-DD` form, only set for recipes added in place
    #[serde(
        default,
        rename = "dateAdded",
        alias = "date_added",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<String>,
}

/// Input for [`RecipeCollection::add`](crate::RecipeCollection::add)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub category: Option<String>,
    pub code: Option<String>,
}

impl NewRecipe {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Replacement values for [`RecipeCollection::update`](crate::RecipeCollection::update).
///
/// A field is only committed when it is present and non-empty after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub code: Option<String>,
}

impl RecipeUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Recipe fields that free-text search can look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Category,
    Code,
}

impl SearchField {
    /// Search scope of the plain category pages
    pub const TITLE_ONLY: &'static [SearchField] = &[SearchField::Title];

    /// Search scope of the "all recipes" index
    pub const ALL: &'static [SearchField] =
        &[SearchField::Title, SearchField::Category, SearchField::Code];

    /// The text of this field on `recipe`
    pub fn value(self, recipe: &Recipe) -> &str {
        match self {
            SearchField::Title => &recipe.title,
            SearchField::Category => &recipe.category,
            SearchField::Code => &recipe.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_recipe_defaults() {
        let recipe: Recipe = serde_json::from_str(r#"{"title": "Pancakes"}"#).unwrap();
        assert_eq!(recipe.title, "Pancakes");
        assert!(recipe.category.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.date_added, None);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result: Result<Recipe, _> = serde_json::from_str(r#"{"category": "LUNCH"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_date_added_accepts_both_spellings() {
        let camel: Recipe =
            serde_json::from_str(r#"{"title": "Tea", "dateAdded": "2024-01-02"}"#).unwrap();
        let snake: Recipe =
            serde_json::from_str(r#"{"title": "Tea", "date_added": "2024-01-02"}"#).unwrap();
        assert_eq!(camel, snake);

        let json = serde_json::to_string(&camel).unwrap();
        assert!(json.contains("\"dateAdded\":\"2024-01-02\""));
    }

    #[test]
    fn test_search_field_value() {
        let recipe = Recipe {
            title: "Pancakes".to_string(),
            category: "BREAKFAST".to_string(),
            code: "B-01".to_string(),
            ..Default::default()
        };
        assert_eq!(SearchField::Title.value(&recipe), "Pancakes");
        assert_eq!(SearchField::Category.value(&recipe), "BREAKFAST");
        assert_eq!(SearchField::Code.value(&recipe), "B-01");
    }

    #[test]
    fn test_search_field_deserializes_lowercase() {
        let fields: Vec<SearchField> =
            serde_json::from_str(r#"["title", "category", "code"]"#).unwrap();
        assert_eq!(fields, SearchField::ALL);
    }
}

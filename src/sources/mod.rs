//! Where the initial recipe list comes from.
//!
//! A source is consulted once per page view. [`load_or_empty`] turns any
//! failure into an empty list so the page still renders.

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use async_trait::async_trait;
use log::{info, warn};

use crate::error::CatalogError;
use crate::model::Recipe;

/// A provider of the initial recipe list
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Human-readable location, used in log messages
    fn describe(&self) -> String;

    /// Fetch and decode the full recipe list
    async fn fetch(&self) -> Result<Vec<Recipe>, CatalogError>;
}

/// Records held in memory, for embedders that already have the data
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Recipe>,
}

impl StaticSource {
    pub fn new(records: Vec<Recipe>) -> Self {
        Self { records }
    }

    /// Decode a JSON array of recipes
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(parse_recipes(json)?))
    }
}

#[async_trait]
impl RecipeSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory recipes", self.records.len())
    }

    async fn fetch(&self) -> Result<Vec<Recipe>, CatalogError> {
        Ok(self.records.clone())
    }
}

/// Decode a JSON array of recipes
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Fetch from `source`, substituting an empty list on any failure
pub async fn load_or_empty(source: &dyn RecipeSource) -> Vec<Recipe> {
    match source.fetch().await {
        Ok(records) => {
            info!("Loaded {} recipes from {}", records.len(), source.describe());
            records
        }
        Err(e) => {
            warn!("Failed to load recipes from {}: {}", source.describe(), e);
            Vec::new()
        }
    }
}

/// Pick an HTTP or file source depending on what `location` looks like
pub fn source_for(
    location: &str,
    timeout: Option<std::time::Duration>,
) -> Result<Box<dyn RecipeSource>, CatalogError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSource;

    #[async_trait]
    impl RecipeSource for BrokenSource {
        fn describe(&self) -> String {
            "broken".to_string()
        }

        async fn fetch(&self) -> Result<Vec<Recipe>, CatalogError> {
            Err(CatalogError::StoreError("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_load_or_empty_swallows_errors() {
        assert!(load_or_empty(&BrokenSource).await.is_empty());
    }

    #[tokio::test]
    async fn test_static_source_from_json() {
        let source =
            StaticSource::from_json(r#"[{"title": "Pancakes", "category": "BREAKFAST"}]"#)
                .unwrap();
        let records = load_or_empty(&source).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "BREAKFAST");
    }

    #[test]
    fn test_parse_recipes_rejects_object() {
        assert!(parse_recipes(r#"{"title": "Pancakes"}"#).is_err());
    }

    #[test]
    fn test_source_for_picks_by_scheme() {
        let http = source_for("https://example.com/recipes.json", None).unwrap();
        assert_eq!(http.describe(), "https://example.com/recipes.json");

        let file = source_for("data/recipes.json", None).unwrap();
        assert_eq!(file.describe(), "data/recipes.json");
    }
}

use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::categories::{CategoryCollection, DEFAULT_CATEGORIES};
use crate::collection::RecipeCollection;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::{Recipe, SearchField};
use crate::sources::{load_or_empty, FileSource, HttpSource, RecipeSource, StaticSource};
use crate::store::{restore_categories, FileStore, KeyValueStore};

/// Represents where the initial recipe list comes from
pub enum RecipeInput {
    /// Fetch the JSON array from a URL
    Url(String),
    /// Read the JSON array from a local file
    Path(PathBuf),
    /// Use records already in memory
    Records(Vec<Recipe>),
    /// Any other source
    Source(Box<dyn RecipeSource>),
}

/// Builder for configuring and loading a [`Catalog`]
#[derive(Default)]
pub struct CatalogBuilder {
    input: Option<RecipeInput>,
    timeout: Option<Duration>,
    search_fields: Option<Vec<SearchField>>,
    persist_categories: bool,
    reject_duplicate_categories: Option<bool>,
    default_categories: Option<Vec<String>>,
    store: Option<Box<dyn KeyValueStore>>,
}

impl CatalogBuilder {
    /// Load recipes from a URL
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Catalog;
    ///
    /// let builder = Catalog::builder()
    ///     .url("https://example.com/recipes.json");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.input = Some(RecipeInput::Url(url.into()));
        self
    }

    /// Load recipes from a local JSON file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(RecipeInput::Path(path.into()));
        self
    }

    /// Start from records already in memory
    pub fn records(mut self, records: Vec<Recipe>) -> Self {
        self.input = Some(RecipeInput::Records(records));
        self
    }

    /// Load recipes from a custom source
    pub fn source(mut self, source: Box<dyn RecipeSource>) -> Self {
        self.input = Some(RecipeInput::Source(source));
        self
    }

    /// Set a timeout for the HTTP fetch
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Catalog;
    /// use std::time::Duration;
    ///
    /// let builder = Catalog::builder()
    ///     .url("https://example.com/recipes.json")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Fields the search term is matched against (title only by default)
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::{Catalog, SearchField};
    ///
    /// let builder = Catalog::builder()
    ///     .path("recipes.json")
    ///     .search_fields(SearchField::ALL);
    /// ```
    pub fn search_fields(mut self, fields: &[SearchField]) -> Self {
        self.search_fields = Some(fields.to_vec());
        self
    }

    /// Persist the category list to the store after every change
    pub fn persist_categories(mut self, persist: bool) -> Self {
        self.persist_categories = persist;
        self
    }

    /// Whether adding an existing category name is refused (default true)
    pub fn reject_duplicate_categories(mut self, reject: bool) -> Self {
        self.reject_duplicate_categories = Some(reject);
        self
    }

    /// Category names used when the store holds none
    pub fn default_categories(mut self, categories: Vec<String>) -> Self {
        self.default_categories = Some(categories);
        self
    }

    /// Store the category list is read from and written to
    pub fn category_store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Apply everything a [`CatalogConfig`] specifies.
    ///
    /// A configured source only replaces the input when one was not set already.
    pub fn from_config(mut self, config: &CatalogConfig) -> Self {
        if self.input.is_none() {
            if let Some(location) = &config.source {
                self = if is_url(location) {
                    self.url(location.as_str())
                } else {
                    self.path(location.as_str())
                };
            }
        }

        self.timeout = Some(config.timeout());
        self.search_fields = Some(config.search.fields.clone());
        self.persist_categories = config.categories.persist;
        self.reject_duplicate_categories = Some(config.categories.reject_duplicates);
        self.default_categories = Some(config.categories.defaults.clone());

        if config.categories.persist && self.store.is_none() {
            self.store = Some(Box::new(FileStore::new(config.categories.store_dir())));
        }
        self
    }

    /// Load the recipes and assemble the catalog
    ///
    /// A source that cannot be read yields an empty recipe list; the failure
    /// is only logged.
    ///
    /// # Errors
    /// Returns `CatalogError` if:
    /// - No recipe source was specified
    /// - The HTTP client cannot be constructed
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_catalog::Catalog;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let catalog = Catalog::builder()
    ///     .url("https://example.com/recipes.json")
    ///     .build()
    ///     .await?;
    /// println!("{} recipes", catalog.recipes().len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Catalog, CatalogError> {
        let input = self.input.ok_or_else(|| {
            CatalogError::BuilderError(
                "No recipe source specified. Use .url(), .path() or .records()".to_string(),
            )
        })?;

        let source: Box<dyn RecipeSource> = match input {
            RecipeInput::Url(url) => Box::new(HttpSource::new(url, self.timeout)?),
            RecipeInput::Path(path) => Box::new(FileSource::new(path)),
            RecipeInput::Records(records) => Box::new(StaticSource::new(records)),
            RecipeInput::Source(source) => source,
        };

        let fields = self
            .search_fields
            .unwrap_or_else(|| SearchField::TITLE_ONLY.to_vec());
        let mut recipes = RecipeCollection::with_search_fields(&fields);
        recipes.load(load_or_empty(source.as_ref()).await);

        let mut categories =
            CategoryCollection::new(self.reject_duplicate_categories.unwrap_or(true));
        let restored = match (&self.store, self.persist_categories) {
            (Some(store), true) => restore_categories(store.as_ref()),
            _ => None,
        };
        categories.load(restored.unwrap_or_else(|| {
            self.default_categories.unwrap_or_else(|| {
                DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
            })
        }));

        let catalog = Catalog::new(recipes, categories);
        Ok(match self.store {
            Some(store) => catalog.with_store(store, self.persist_categories),
            None => catalog,
        })
    }
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

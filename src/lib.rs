//! In-memory recipe catalog.
//!
//! A [`RecipeCollection`] holds the recipes of one page view and answers the
//! filtered, searched view a rendering layer draws; a [`CategoryCollection`]
//! does the same for category names. [`Catalog`] ties both to a recipe source
//! and an optional category store.

pub mod builder;
pub mod catalog;
pub mod categories;
pub mod collection;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod search;
pub mod sources;
pub mod store;
pub mod uniffi_bindings;

pub use builder::{CatalogBuilder, RecipeInput};
pub use catalog::Catalog;
pub use categories::{CategoryCollection, CategoryEntry, DEFAULT_CATEGORIES};
pub use collection::{EditMode, RecipeCollection, RecipeMatch};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use model::{NewRecipe, Recipe, RecipeUpdate, SearchField};
pub use search::Highlight;
pub use sources::{load_or_empty, FileSource, HttpSource, RecipeSource, StaticSource};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Load a catalog from a URL or file path with default settings
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = recipe_catalog::load_catalog("https://example.com/recipes.json").await?;
/// for recipe in catalog.recipes().view(Some("breakfast")) {
///     println!("{}", recipe.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn load_catalog(location: &str) -> Result<Catalog, CatalogError> {
    let source = sources::source_for(location, None)?;
    Catalog::builder().source(source).build().await
}

/// Load a catalog as described by `catalog.toml` and `RECIPE_CATALOG__*` variables
pub async fn load_catalog_from_config() -> Result<Catalog, CatalogError> {
    let config = CatalogConfig::load()?;
    Catalog::builder().from_config(&config).build().await
}

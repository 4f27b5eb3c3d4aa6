//! UniFFI bindings for recipe-catalog
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The catalog object guards its collection with a mutex so the host UI can call
//! into it from any thread; loading wraps the async source in its own tokio runtime.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::{
    load_or_empty, CatalogError, HttpSource, NewRecipe, Recipe, RecipeCollection, RecipeUpdate,
    SearchField,
};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub title: String,
    pub category: String,
    pub code: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub notes: String,
    pub story: String,
    pub photo: String,
    pub tags: Vec<String>,
    /// `YYYY-MM-DD`, only for recipes added in place
    pub date_added: Option<String>,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            title: recipe.title,
            category: recipe.category,
            code: recipe.code,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            notes: recipe.notes,
            story: recipe.story,
            photo: recipe.photo,
            tags: recipe.tags,
            date_added: recipe.date_added,
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            title: ffi.title,
            category: ffi.category,
            code: ffi.code,
            ingredients: ffi.ingredients,
            instructions: ffi.instructions,
            notes: ffi.notes,
            story: ffi.story,
            photo: ffi.photo,
            tags: ffi.tags,
            date_added: ffi.date_added,
        }
    }
}

/// FFI-compatible search field enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiSearchField {
    Title,
    Category,
    Code,
}

impl From<SearchField> for FfiSearchField {
    fn from(field: SearchField) -> Self {
        match field {
            SearchField::Title => FfiSearchField::Title,
            SearchField::Category => FfiSearchField::Category,
            SearchField::Code => FfiSearchField::Code,
        }
    }
}

/// Matched span within one field, as byte offsets into that field's UTF-8 text
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiHighlight {
    pub field: FfiSearchField,
    pub start: u64,
    pub end: u64,
}

/// One entry of the filtered view
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeMatch {
    /// Position in the full record list, to pass back to update/remove
    pub index: u64,
    pub recipe: FfiRecipe,
    pub highlight: Option<FfiHighlight>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiCatalogError {
    /// Failed to fetch recipes
    FetchError { message: String },
    /// Recipe data is not valid
    ParseError { message: String },
    /// Builder configuration error
    BuilderError { message: String },
    /// Key/value store failure
    StoreError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiCatalogError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiCatalogError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiCatalogError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiCatalogError::StoreError { message } => write!(f, "Store error: {}", message),
            FfiCatalogError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiCatalogError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiCatalogError {}

impl From<CatalogError> for FfiCatalogError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::FetchError(_)
            | CatalogError::HttpStatus { .. }
            | CatalogError::IoError(_) => FfiCatalogError::FetchError { message },
            CatalogError::ParseError(_) => FfiCatalogError::ParseError { message },
            CatalogError::BuilderError(_) => FfiCatalogError::BuilderError { message },
            CatalogError::StoreError(_) => FfiCatalogError::StoreError { message },
            CatalogError::ConfigError(_) => FfiCatalogError::ConfigError { message },
        }
    }
}

/// A recipe collection shared with the host application
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiRecipeCatalog {
    inner: Mutex<RecipeCollection>,
}

impl FfiRecipeCatalog {
    fn from_collection(collection: RecipeCollection) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(collection),
        })
    }

    fn collection(&self) -> MutexGuard<'_, RecipeCollection> {
        // Every operation leaves the collection consistent, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn search_fields(search_all_fields: bool) -> &'static [SearchField] {
    if search_all_fields {
        SearchField::ALL
    } else {
        SearchField::TITLE_ONLY
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiRecipeCatalog {
    /// Create an empty catalog
    ///
    /// # Arguments
    /// * `search_all_fields` - match the search term against category and code as well as title
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(search_all_fields: bool) -> Arc<Self> {
        Self::from_collection(RecipeCollection::with_search_fields(search_fields(
            search_all_fields,
        )))
    }

    /// Replace the records with a JSON array of recipes
    pub fn load_json(&self, json: String) -> Result<(), FfiCatalogError> {
        let records = crate::sources::parse_recipes(&json)?;
        self.collection().load(records);
        Ok(())
    }

    pub fn count(&self) -> u64 {
        self.collection().len() as u64
    }

    pub fn set_edit_mode(&self, editing: bool) {
        self.collection().set_edit_mode(editing);
    }

    pub fn is_editing(&self) -> bool {
        self.collection().is_editing()
    }

    pub fn set_search_term(&self, term: String) {
        self.collection().set_search_term(term);
    }

    /// Current filtered view, optionally scoped to a category
    pub fn view(&self, category: Option<String>) -> Vec<FfiRecipeMatch> {
        let collection = self.collection();
        collection
            .matches(category.as_deref())
            .map(|m| FfiRecipeMatch {
                index: m.index as u64,
                recipe: m.recipe.clone().into(),
                highlight: m.highlight.map(|h| FfiHighlight {
                    field: h.field.into(),
                    start: h.start as u64,
                    end: h.end as u64,
                }),
            })
            .collect()
    }

    pub fn find_by_title(&self, title: String) -> Option<FfiRecipe> {
        self.collection()
            .find_by_title(&title)
            .map(|recipe| recipe.clone().into())
    }

    pub fn add(&self, title: String, category: Option<String>, code: Option<String>) -> bool {
        self.collection().add(NewRecipe {
            title,
            category,
            code,
        })
    }

    pub fn update(
        &self,
        index: u64,
        title: Option<String>,
        category: Option<String>,
        code: Option<String>,
    ) -> bool {
        let Ok(index) = usize::try_from(index) else {
            return false;
        };
        self.collection().update(
            index,
            RecipeUpdate {
                title,
                category,
                code,
            },
        )
    }

    pub fn remove(&self, index: u64) -> bool {
        match usize::try_from(index) {
            Ok(index) => self.collection().remove(index),
            Err(_) => false,
        }
    }

    /// Pretty-printed JSON of the current records
    pub fn export(&self) -> Result<String, FfiCatalogError> {
        Ok(self.collection().export()?)
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiCatalogError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiCatalogError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Fetch the recipe JSON from a URL into a new catalog
///
/// # Arguments
/// * `url` - Location of the recipe JSON array
/// * `search_all_fields` - match the search term against category and code as well as title
/// * `timeout_seconds` - Optional timeout in seconds
///
/// # Returns
/// A catalog holding the fetched records, or no records if the fetch failed
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn load_catalog_from_url(
    url: String,
    search_all_fields: bool,
    timeout_seconds: Option<u64>,
) -> Result<Arc<FfiRecipeCatalog>, FfiCatalogError> {
    let rt = create_runtime()?;
    let source = HttpSource::new(url, timeout_seconds.map(Duration::from_secs))?;
    let records = rt.block_on(load_or_empty(&source));

    let mut collection = RecipeCollection::with_search_fields(search_fields(search_all_fields));
    collection.load(records);
    Ok(FfiRecipeCatalog::from_collection(collection))
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::categories::DEFAULT_CATEGORIES;
use crate::model::SearchField;

/// Catalog configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// URL or filesystem path of the recipe JSON
    #[serde(default)]
    pub source: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Free-text search settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Category list settings
    #[serde(default)]
    pub categories: CategoriesConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: None,
            timeout: default_timeout(),
            search: SearchConfig::default(),
            categories: CategoriesConfig::default(),
        }
    }
}

/// Which recipe fields the search term is matched against
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_search_fields")]
    pub fields: Vec<SearchField>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: default_search_fields(),
        }
    }
}

/// Persistence and de-duplication policy for the category list
#[derive(Debug, Deserialize, Clone)]
pub struct CategoriesConfig {
    /// Write the category list to the store after every change
    #[serde(default)]
    pub persist: bool,
    /// Refuse to add a name that is already present
    #[serde(default = "default_reject_duplicates")]
    pub reject_duplicates: bool,
    /// Directory used by the file-backed store
    #[serde(default)]
    pub store_dir: Option<String>,
    /// Names used when nothing has been persisted yet
    #[serde(default = "default_categories")]
    pub defaults: Vec<String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            persist: false,
            reject_duplicates: default_reject_duplicates(),
            store_dir: None,
            defaults: default_categories(),
        }
    }
}

impl CategoriesConfig {
    pub fn store_dir(&self) -> &str {
        self.store_dir.as_deref().unwrap_or(DEFAULT_STORE_DIR)
    }
}

/// Directory for the file-backed category store when none is configured
pub const DEFAULT_STORE_DIR: &str = ".recipe-catalog";

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_search_fields() -> Vec<SearchField> {
    SearchField::TITLE_ONLY.to_vec()
}

fn default_reject_duplicates() -> bool {
    true
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CATALOG__ prefix
    /// 2. catalog.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CATALOG__CATEGORIES__PERSIST
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`CatalogConfig::load`] for the precedence rules.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("catalog").required(false))
        // Use double underscore for nested: RECIPE_CATALOG__SEARCH__FIELDS
        .add_source(
            Environment::with_prefix("RECIPE_CATALOG")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("search.fields")
                .with_list_parse_key("categories.defaults")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

//! Durable key/value storage for the category list.
//!
//! The collections never touch a store themselves; [`Catalog`](crate::Catalog)
//! reads the list once at startup and writes it back after each category mutation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};

use crate::categories::CategoryCollection;
use crate::error::CatalogError;

/// Key under which the category names are stored
pub const CATEGORIES_KEY: &str = "categories";

/// Minimal synchronous string store, in the shape of browser-local storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError>;
}

/// Store keeping one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-process store, mostly for tests and embedders without a filesystem
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        let values = self
            .values
            .lock()
            .map_err(|e| CatalogError::StoreError(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| CatalogError::StoreError(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted category names, if any
pub fn read_categories(store: &dyn KeyValueStore) -> Result<Option<Vec<String>>, CatalogError> {
    match store.get(CATEGORIES_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Persisted category names, or `None` when nothing usable is stored.
///
/// A corrupt or unreadable entry is logged and treated as missing.
pub fn restore_categories(store: &dyn KeyValueStore) -> Option<Vec<String>> {
    match read_categories(store) {
        Ok(Some(categories)) => {
            debug!("Restored {} categories from store", categories.len());
            Some(categories)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Ignoring stored categories: {}", e);
            None
        }
    }
}

/// Write the full category list under [`CATEGORIES_KEY`]
pub fn save_categories(
    store: &dyn KeyValueStore,
    categories: &CategoryCollection,
) -> Result<(), CatalogError> {
    let json = serde_json::to_string(categories.categories())?;
    store.set(CATEGORIES_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get(CATEGORIES_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        store.set(CATEGORIES_KEY, "[\"SOUPS\"]").unwrap();
        assert!(dir.path().join("nested").join("categories.json").exists());
        assert_eq!(
            store.get(CATEGORIES_KEY).unwrap().as_deref(),
            Some("[\"SOUPS\"]")
        );
    }

    #[test]
    fn test_save_and_restore_categories() {
        let store = MemoryStore::new();
        let mut categories = CategoryCollection::new(true);
        categories.add("soups");
        categories.add("salads");
        save_categories(&store, &categories).unwrap();

        let restored = restore_categories(&store).unwrap();
        assert_eq!(restored, vec!["SOUPS".to_string(), "SALADS".to_string()]);
    }

    #[test]
    fn test_corrupt_entry_is_ignored() {
        let store = MemoryStore::new();
        store.set(CATEGORIES_KEY, "not json").unwrap();
        assert!(read_categories(&store).is_err());
        assert_eq!(restore_categories(&store), None);
    }
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::fs;

use super::{parse_recipes, RecipeSource};
use crate::error::CatalogError;
use crate::model::Recipe;

/// Reads the recipe JSON from the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecipeSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Recipe>, CatalogError> {
        debug!("Reading recipes from {}", self.path.display());
        let json = fs::read_to_string(&self.path).await?;
        parse_recipes(&json)
    }
}

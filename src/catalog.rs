use log::{debug, warn};

use crate::builder::CatalogBuilder;
use crate::categories::CategoryCollection;
use crate::collection::{EditMode, RecipeCollection};
use crate::error::CatalogError;
use crate::model::{NewRecipe, Recipe, RecipeUpdate};
use crate::store::{save_categories, KeyValueStore};

/// State behind one page view: the recipes, the category list and, optionally,
/// the store the category list is persisted to.
pub struct Catalog {
    recipes: RecipeCollection,
    categories: CategoryCollection,
    store: Option<Box<dyn KeyValueStore>>,
    persist_categories: bool,
}

impl Catalog {
    /// Creates a new builder for loading a catalog
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::Catalog;
    ///
    /// let builder = Catalog::builder().path("recipes.json");
    /// ```
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Catalog without persistence
    pub fn new(recipes: RecipeCollection, categories: CategoryCollection) -> Self {
        Self {
            recipes,
            categories,
            store: None,
            persist_categories: false,
        }
    }

    /// Attach a store; when `persist` is set every category change is written to it
    pub fn with_store(mut self, store: Box<dyn KeyValueStore>, persist: bool) -> Self {
        self.store = Some(store);
        self.persist_categories = persist;
        self
    }

    /// Recipe list; mutate it through the catalog so the edit mode stays
    /// shared with the category list.
    pub fn recipes(&self) -> &RecipeCollection {
        &self.recipes
    }

    pub fn load_recipes(&mut self, records: Vec<Recipe>) {
        self.recipes.load(records);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.recipes.set_search_term(term);
    }

    pub fn add_recipe(&mut self, new: NewRecipe) -> bool {
        self.recipes.add(new)
    }

    pub fn update_recipe(&mut self, index: usize, update: RecipeUpdate) -> bool {
        self.recipes.update(index, update)
    }

    pub fn remove_recipe(&mut self, index: usize) -> bool {
        self.recipes.remove(index)
    }

    /// Category list; mutate it through [`add_category`](Self::add_category) and
    /// [`remove_category`](Self::remove_category) so changes reach the store.
    pub fn categories(&self) -> &CategoryCollection {
        &self.categories
    }

    pub fn persists_categories(&self) -> bool {
        self.persist_categories && self.store.is_some()
    }

    pub fn add_category(&mut self, name: &str) -> bool {
        let added = self.categories.add(name);
        if added {
            self.persist();
        }
        added
    }

    pub fn remove_category(&mut self, index: usize) -> bool {
        let removed = self.categories.remove(index);
        if removed {
            self.persist();
        }
        removed
    }

    /// Edit mode is UI-wide, so both collections switch together
    pub fn set_edit_mode(&mut self, editing: bool) {
        self.recipes.set_edit_mode(editing);
        self.categories.set_edit_mode(editing);
    }

    pub fn toggle_edit_mode(&mut self) -> EditMode {
        let editing = !self.recipes.is_editing();
        self.set_edit_mode(editing);
        self.recipes.edit_mode()
    }

    pub fn export_recipes(&self) -> Result<String, CatalogError> {
        self.recipes.export()
    }

    pub fn export_categories(&self) -> Result<String, CatalogError> {
        self.categories.export()
    }

    fn persist(&self) {
        if !self.persist_categories {
            return;
        }
        let Some(store) = &self.store else {
            return;
        };

        match save_categories(store.as_ref(), &self.categories) {
            Ok(()) => debug!("Persisted {} categories", self.categories.len()),
            Err(e) => warn!("Failed to persist categories: {}", e),
        }
    }
}

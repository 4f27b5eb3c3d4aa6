use log::debug;

use crate::collection::EditMode;
use crate::error::CatalogError;

/// Category list shown on a fresh homepage
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "BREAKFAST",
    "LUNCH",
    "DINNER",
    "SIDE DISHES",
    "APPETIZERS & SNACKS",
    "DESSERTS",
    "DRINKS",
    "ALCOHOL DRINKS",
    "CHILDREN’S",
    "HOMEMADE INGREDIENTS",
    "HOW-TO & TECHNIQUES",
];

/// A category as presented to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry<'a> {
    pub index: usize,
    /// Stored, upper-cased name; also the navigation key
    pub name: &'a str,
    /// Title-cased name for display
    pub display: String,
}

/// Ordered list of upper-cased category names with its own edit mode
#[derive(Debug, Clone)]
pub struct CategoryCollection {
    categories: Vec<String>,
    mode: EditMode,
    reject_duplicates: bool,
}

impl Default for CategoryCollection {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CategoryCollection {
    pub fn new(reject_duplicates: bool) -> Self {
        Self {
            categories: Vec::new(),
            mode: EditMode::Browsing,
            reject_duplicates,
        }
    }

    /// Collection seeded with [`DEFAULT_CATEGORIES`]
    pub fn with_defaults(reject_duplicates: bool) -> Self {
        let mut collection = Self::new(reject_duplicates);
        collection.load(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect());
        collection
    }

    /// Replace the held names wholesale.
    ///
    /// Names go through the same normalisation as [`add`](Self::add): blanks
    /// are dropped, and so are repeats when duplicates are rejected.
    pub fn load(&mut self, categories: Vec<String>) {
        self.categories.clear();
        for name in &categories {
            self.add(name);
        }
        debug!(
            "Loaded {} categories ({} supplied)",
            self.categories.len(),
            categories.len()
        );
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn rejects_duplicates(&self) -> bool {
        self.reject_duplicates
    }

    pub fn edit_mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn set_edit_mode(&mut self, editing: bool) {
        let mode = EditMode::from_flag(editing);
        if mode != self.mode {
            debug!("Category edit mode: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn toggle_edit_mode(&mut self) -> EditMode {
        self.set_edit_mode(!self.is_editing());
        self.mode
    }

    /// Append `name` trimmed and upper-cased.
    ///
    /// Returns false for a blank name, or for an exact duplicate of a stored
    /// name when duplicates are rejected.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim().to_uppercase();
        if name.is_empty() {
            return false;
        }
        if self.reject_duplicates && self.categories.contains(&name) {
            debug!("Category '{}' already exists", name);
            return false;
        }

        debug!("Adding category '{}'", name);
        self.categories.push(name);
        true
    }

    /// Remove the name at `index`. Returns false if out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            debug!(
                "Ignoring category removal at index {} (have {})",
                index,
                self.categories.len()
            );
            return false;
        }

        let removed = self.categories.remove(index);
        debug!("Removed category '{}'", removed);
        true
    }

    /// Names in stored order, with a title-cased display form
    pub fn view(&self) -> impl Iterator<Item = CategoryEntry<'_>> + '_ {
        self.categories
            .iter()
            .enumerate()
            .map(|(index, name)| CategoryEntry {
                index,
                name: name.as_str(),
                display: title_case(name),
            })
    }

    /// Pretty-printed JSON array of the stored names
    pub fn export(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.categories)?)
    }
}

/// Capitalize the first letter of every whitespace-separated word and lowercase the rest
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

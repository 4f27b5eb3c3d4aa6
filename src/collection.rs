use chrono::{Local, NaiveDate};
use log::debug;

use crate::error::CatalogError;
use crate::model::{NewRecipe, Recipe, RecipeUpdate, SearchField};
use crate::search::{eq_ignore_case, Highlight, SearchTerm};

/// Whether list rendering exposes navigation or mutation affordances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Browsing,
    Editing,
}

impl EditMode {
    pub fn from_flag(editing: bool) -> Self {
        if editing {
            EditMode::Editing
        } else {
            EditMode::Browsing
        }
    }

    pub fn is_editing(self) -> bool {
        self == EditMode::Editing
    }
}

/// One entry of a filtered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeMatch<'a> {
    /// Position in the underlying record list, the target for update/remove
    pub index: usize,
    pub recipe: &'a Recipe,
    /// Matched span, present only while a search term is active
    pub highlight: Option<Highlight>,
}

/// The recipe list of one page view together with its edit mode and search term
#[derive(Debug, Clone)]
pub struct RecipeCollection {
    records: Vec<Recipe>,
    mode: EditMode,
    search_term: String,
    search_fields: Vec<SearchField>,
}

impl Default for RecipeCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeCollection {
    /// Empty collection searching titles only
    pub fn new() -> Self {
        Self::with_search_fields(SearchField::TITLE_ONLY)
    }

    /// Empty collection whose search term is matched against `fields`, in order
    pub fn with_search_fields(fields: &[SearchField]) -> Self {
        Self {
            records: Vec::new(),
            mode: EditMode::Browsing,
            search_term: String::new(),
            search_fields: fields.to_vec(),
        }
    }

    /// Replace the held records wholesale
    pub fn load(&mut self, records: Vec<Recipe>) {
        debug!("Loaded {} recipes", records.len());
        self.records = records;
    }

    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search_fields(&self) -> &[SearchField] {
        &self.search_fields
    }

    /// First record whose title equals `title` exactly
    pub fn find_by_title(&self, title: &str) -> Option<&Recipe> {
        self.records.iter().find(|recipe| recipe.title == title)
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
            debug!("Recipe edit mode: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Flip between browsing and editing, returning the new state
    pub fn toggle_edit_mode(&mut self) -> EditMode {
        self.set_edit_mode(!self.is_editing());
        self.mode
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Records eligible for display, in insertion order.
    ///
    /// A record is included when its category equals `category` ignoring case
    /// (or no category is given) and the search term is empty or occurs in one
    /// of the search fields ignoring case. Calling it again restarts the view.
    pub fn view(&self, category: Option<&str>) -> impl Iterator<Item = &Recipe> + '_ {
        self.matches(category).map(|m| m.recipe)
    }

    /// Same selection as [`view`](Self::view), with record indices and the matched span
    pub fn matches(&self, category: Option<&str>) -> impl Iterator<Item = RecipeMatch<'_>> + '_ {
        let category = category.map(str::to_owned);
        let term = SearchTerm::new(&self.search_term);

        self.records
            .iter()
            .enumerate()
            .filter(move |(_, recipe)| match &category {
                Some(category) => eq_ignore_case(&recipe.category, category),
                None => true,
            })
            .filter_map(move |(index, recipe)| {
                if term.is_empty() {
                    return Some(RecipeMatch {
                        index,
                        recipe,
                        highlight: None,
                    });
                }

                let highlight = self.search_fields.iter().find_map(|&field| {
                    term.find_in(field.value(recipe)).map(|range| Highlight {
                        field,
                        start: range.start,
                        end: range.end,
                    })
                })?;

                Some(RecipeMatch {
                    index,
                    recipe,
                    highlight: Some(highlight),
                })
            })
    }

    /// Append a recipe dated today. Returns false if the title is blank.
    pub fn add(&mut self, new: NewRecipe) -> bool {
        self.add_dated(new, Local::now().date_naive())
    }

    /// Append a recipe with an explicit creation date. Returns false if the title is blank.
    pub fn add_dated(&mut self, new: NewRecipe, date: NaiveDate) -> bool {
        let title = new.title.trim();
        if title.is_empty() {
            debug!("Ignoring recipe without a title");
            return false;
        }

        let recipe = Recipe {
            title: title.to_string(),
            category: new.category.map(|c| c.trim().to_string()).unwrap_or_default(),
            code: new.code.map(|c| c.trim().to_string()).unwrap_or_default(),
            date_added: Some(date.format("%Y-%m-%d").to_string()),
            ..Default::default()
        };

        debug!("Adding recipe '{}' at index {}", recipe.title, self.records.len());
        self.records.push(recipe);
        true
    }

    /// Overwrite the supplied, non-blank fields of the record at `index`.
    ///
    /// Returns true if at least one field took a new value; an out-of-range index
    /// or an update without usable or differing values leaves the collection unchanged.
    pub fn update(&mut self, index: usize, update: RecipeUpdate) -> bool {
        let len = self.records.len();
        let Some(recipe) = self.records.get_mut(index) else {
            debug!("Ignoring update at index {} (have {})", index, len);
            return false;
        };

        let mut changed = false;
        for (slot, value) in [
            (&mut recipe.title, update.title),
            (&mut recipe.category, update.category),
            (&mut recipe.code, update.code),
        ] {
            if let Some(value) = value {
                let value = value.trim();
                if !value.is_empty() && value != slot.as_str() {
                    *slot = value.to_string();
                    changed = true;
                }
            }
        }

        if changed {
            debug!("Updated recipe at index {}", index);
        }
        changed
    }

    /// Remove the record at `index`, shifting later records down. Returns false if out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            debug!(
                "Ignoring removal at index {} (have {})",
                index,
                self.records.len()
            );
            return false;
        }

        let removed = self.records.remove(index);
        debug!("Removed recipe '{}' from index {}", removed.title, index);
        true
    }

    /// Pretty-printed JSON snapshot of the current records
    pub fn export(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

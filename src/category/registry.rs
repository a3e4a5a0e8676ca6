//! Category registry
//!
//! This module provides:
//! - Category registration and lookup by id
//! - The declared processing order
//! - Default category definitions

use std::collections::HashMap;

use super::{Category, CategoryKind};
use crate::error::{Result, catalog as catalog_error};

/// Registry of all known categories, in declared order
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    by_id: HashMap<String, usize>,
}

impl CategoryRegistry {
    /// Create a new registry with the given categories
    pub fn new(categories: Vec<Category>) -> Self {
        let by_id: HashMap<String, usize> = categories
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id.clone(), idx))
            .collect();

        Self { categories, by_id }
    }

    /// Get a category by its id
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id).and_then(|&idx| self.categories.get(idx))
    }

    /// Get all categories in declared order
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Categories the user may opt into
    pub fn optional(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.required)
    }

    /// Resolve ids to categories, in declared order, with required categories included
    ///
    /// The order of `ids` does not matter; duplicates collapse.
    ///
    /// # Errors
    ///
    /// `UnknownCategory` for the first id that is not registered.
    pub fn resolve(&self, ids: &[String]) -> Result<Vec<&Category>> {
        if let Some(unknown) = ids.iter().find(|id| !self.by_id.contains_key(id.as_str())) {
            return Err(catalog_error::unknown_category(unknown.clone()));
        }

        Ok(self
            .categories
            .iter()
            .filter(|c| c.required || ids.iter().any(|id| *id == c.id))
            .collect())
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(default_categories())
    }
}

/// Get default category definitions, in processing order
fn default_categories() -> Vec<Category> {
    use CategoryKind::{Deferred, Serial};

    vec![
        Category::new("homebrew", "Homebrew", Serial).required(),
        Category::new("browser", "Browsers", Deferred),
        Category::new("editor", "Code editors", Deferred),
        Category::new("terminal", "Terminals", Deferred),
        Category::new("node", "Node.js runtime", Serial),
        Category::new("shell", "Shell profile", Serial),
        Category::new("git", "Git and SSH", Serial),
        Category::new("communication", "Communication apps", Deferred),
        Category::new("productivity", "Productivity apps", Deferred),
        Category::new("design", "Design tools", Deferred),
        Category::new("ai", "AI tools", Deferred),
        Category::new("api", "API tools", Deferred),
        Category::new("database", "Database clients", Deferred),
        Category::new("java", "Java tools", Deferred),
        Category::new("js-package-manager", "JavaScript package managers", Deferred),
    ]
}

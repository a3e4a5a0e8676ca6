//! Tool categories
//!
//! A category pairs a catalog with a scheduling kind. Serial categories
//! mutate state shared by the whole run (shell profile, global git config,
//! SSH keys) and install inline, one candidate at a time. Deferred
//! categories only queue work for the concurrent join at the end of the run.

mod registry;

pub use registry::CategoryRegistry;

use crate::catalog::{Catalog, CatalogStore};
use crate::error::{Result, catalog as catalog_error};

/// How a category's installs are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Installed inline before the next category is processed
    Serial,
    /// Queued and installed concurrently after every category was processed
    Deferred,
}

/// One category of tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub kind: CategoryKind,
    /// Always processed; a catalog failure aborts the run
    pub required: bool,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            required: false,
        }
    }

    /// Mark the category as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_serial(&self) -> bool {
        self.kind == CategoryKind::Serial
    }

    /// Load and validate this category's catalog
    ///
    /// Entries that ask for inputs need a prompt right before they run, which
    /// only inline installs can give them.
    pub fn load(&self, store: &CatalogStore) -> Result<Catalog> {
        let catalog = store.load(&self.id)?;

        if !self.is_serial() {
            if let Some(entry) = catalog.entries().iter().find(|e| !e.inputs.is_empty()) {
                return Err(catalog_error::invalid(
                    &self.id,
                    format!(
                        "'{}' declares inputs, which only serial categories support",
                        entry.key
                    ),
                ));
            }
        }

        Ok(catalog)
    }

    /// Prompt shown when choosing this category's tools
    pub fn selection_prompt(&self) -> String {
        format!("Select the {} you want to install", self.title.to_lowercase())
    }
}

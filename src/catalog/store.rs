//! Catalog storage
//!
//! Catalogs ship inside the binary. A catalog directory can override any of
//! them file by file (`<dir>/<category>.json`) or add catalogs for categories
//! that have no embedded default.

use std::fs;
use std::path::PathBuf;

use super::{Catalog, embedded};
use crate::error::{Result, catalog as catalog_error};

/// Source of catalog data
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dir: Option<PathBuf>,
    embedded: bool,
}

impl CatalogStore {
    /// Embedded catalogs, optionally overridden from `dir`
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            embedded: true,
        }
    }

    /// Catalogs read from `dir` only, without embedded fallback
    #[cfg(test)]
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            embedded: false,
        }
    }

    /// Load the catalog of `category`
    ///
    /// # Errors
    ///
    /// `CatalogNotFound` when neither source has the category,
    /// `CatalogParseFailed`/`CatalogInvalid` when its data is malformed.
    pub fn load(&self, category: &str) -> Result<Catalog> {
        if let Some(ref dir) = self.dir {
            let path = dir.join(format!("{}.json", category));
            if path.is_file() {
                tracing::debug!(category, path = %path.display(), "loading catalog from file");
                let json = fs::read_to_string(&path).map_err(|e| {
                    catalog_error::parse_failed(category, format!("{}: {}", path.display(), e))
                })?;
                return Catalog::from_json(category, &json);
            }
        }

        if self.embedded {
            if let Some(json) = embedded::lookup(category) {
                tracing::debug!(category, "loading embedded catalog");
                return Catalog::from_json(category, json);
            }
        }

        Err(catalog_error::not_found(category))
    }
}

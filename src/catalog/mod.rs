//! Catalogs of installable tools
//!
//! This module provides:
//! - [`CandidateDescriptor`]: one installable tool and the commands to probe and install it
//! - [`Catalog`]: the ordered, immutable candidate list of one category, indexed by key
//! - [`CatalogStore`]: where catalogs are read from (embedded defaults or a directory)

mod embedded;
mod store;

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{Result, catalog as catalog_error};

pub use store::CatalogStore;

/// A host command, run through the system shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CommandSpec(String);

impl CommandSpec {
    #[cfg(test)]
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value asked from the user before an inline install runs.
///
/// The answer is exported to the install command as the environment
/// variable `name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputSpec {
    pub name: String,
    pub prompt: String,
    #[serde(default)]
    pub default: Option<String>,
}

/// One installable unit in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandidateDescriptor {
    /// Unique within its catalog
    pub key: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Exit status 0 means the tool is already present
    #[serde(rename = "check")]
    pub presence_check: CommandSpec,
    #[serde(rename = "install")]
    pub install_action: CommandSpec,
    #[serde(default)]
    pub inputs: Vec<InputSpec>,
}

/// Ordered candidate list for one category
///
/// Keys are unique inside a catalog; two catalogs may reuse a key.
#[derive(Debug, Clone)]
pub struct Catalog {
    category: String,
    entries: Vec<CandidateDescriptor>,
    by_key: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate keys
    pub fn new(category: impl Into<String>, entries: Vec<CandidateDescriptor>) -> Result<Self> {
        let category = category.into();
        let mut by_key = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(catalog_error::invalid(
                    &category,
                    format!("entry #{} has an empty key", idx + 1),
                ));
            }
            if by_key.insert(entry.key.clone(), idx).is_some() {
                return Err(catalog_error::invalid(
                    &category,
                    format!("duplicate key '{}'", entry.key),
                ));
            }
        }

        Ok(Self {
            category,
            entries,
            by_key,
        })
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(category: &str, json: &str) -> Result<Self> {
        let entries: Vec<CandidateDescriptor> = serde_json::from_str(json)
            .map_err(|e| catalog_error::parse_failed(category, e.to_string()))?;
        Self::new(category, entries)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn entries(&self) -> &[CandidateDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a candidate by key
    pub fn get(&self, key: &str) -> Option<&CandidateDescriptor> {
        self.by_key.get(key).and_then(|&idx| self.entries.get(idx))
    }

    /// Keep the entries whose flag is `true`, preserving order.
    ///
    /// `keep` is positional and must have one flag per entry; missing flags
    /// drop the entry.
    pub fn retain_by(&self, keep: &[bool]) -> Catalog {
        let entries: Vec<CandidateDescriptor> = self
            .entries
            .iter()
            .zip(keep)
            .filter(|(_, keep)| **keep)
            .map(|(entry, _)| entry.clone())
            .collect();

        let by_key = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.key.clone(), idx))
            .collect();

        Catalog {
            category: self.category.clone(),
            entries,
            by_key,
        }
    }
}

//! User selection
//!
//! The orchestration core only sees the [`Selector`] trait: given an ordered
//! list of items it blocks until the user answers with a subset of keys.
//! The core does not trust the answer; keys without a matching candidate are
//! dropped when tasks are built.

mod auto;
mod interactive;

use std::fmt;

pub use auto::AutoSelector;
pub use interactive::InteractiveSelector;

use crate::catalog::{CandidateDescriptor, Catalog};
use crate::category::Category;
use crate::error::Result;

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub key: String,
    pub label: String,
    pub description: String,
}

impl SelectItem {
    /// Items for every candidate of `catalog`, in catalog order
    pub fn from_catalog(catalog: &Catalog) -> Vec<SelectItem> {
        catalog.entries().iter().map(SelectItem::from).collect()
    }
}

impl From<&CandidateDescriptor> for SelectItem {
    fn from(candidate: &CandidateDescriptor) -> Self {
        Self {
            key: candidate.key.clone(),
            label: candidate.display_name.clone(),
            description: candidate.description.clone(),
        }
    }
}

impl From<&Category> for SelectItem {
    fn from(category: &Category) -> Self {
        Self {
            key: category.id.clone(),
            label: category.title.clone(),
            description: String::new(),
        }
    }
}

// Single line per item: multi-line content breaks inquire's list layout
impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{} - {}", self.label, self.description)
        }
    }
}

/// Interactive collaborator that narrows lists and answers questions
pub trait Selector {
    /// Let the user pick a subset of `items`, returning the chosen keys.
    ///
    /// Cancelling the prompt selects nothing.
    fn select(&self, prompt: &str, items: &[SelectItem]) -> Result<Vec<String>>;

    /// Ask for a free-text value; `None` when the user gives no answer.
    fn ask(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>>;
}

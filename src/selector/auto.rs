//! Non-interactive selection

use super::{SelectItem, Selector};
use crate::error::Result;

/// Selects every item and accepts every default, without prompting
#[derive(Debug, Default)]
pub struct AutoSelector;

impl Selector for AutoSelector {
    fn select(&self, _prompt: &str, items: &[SelectItem]) -> Result<Vec<String>> {
        Ok(items.iter().map(|item| item.key.clone()).collect())
    }

    fn ask(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        if default.is_none() {
            tracing::debug!(prompt, "no default available without a terminal prompt");
        }
        Ok(default.map(str::to_string))
    }
}

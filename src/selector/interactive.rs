//! Terminal prompts backed by inquire

use inquire::{MultiSelect, Text};

use super::{SelectItem, Selector};
use crate::error::Result;

const PAGE_SIZE: usize = 10;

/// Checkbox lists and text prompts on the terminal
#[derive(Debug, Default)]
pub struct InteractiveSelector;

impl Selector for InteractiveSelector {
    fn select(&self, prompt: &str, items: &[SelectItem]) -> Result<Vec<String>> {
        if items.is_empty() {
            return Ok(vec![]);
        }

        println!();

        let Some(selection) = MultiSelect::new(prompt, items.to_vec())
            .with_page_size(PAGE_SIZE)
            .with_help_message(
                "  ↑↓ navigate  space select  → all  ← none  enter confirm  type to filter  esc skip",
            )
            .prompt_skippable()?
        else {
            return Ok(vec![]);
        };

        Ok(selection.into_iter().map(|item| item.key).collect())
    }

    fn ask(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        let mut text = Text::new(prompt).with_help_message("esc to skip");
        if let Some(default) = default {
            text = text.with_default(default);
        }

        let answer = text.prompt_skippable()?;
        Ok(answer
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty()))
    }
}

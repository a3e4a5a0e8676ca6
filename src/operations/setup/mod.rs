//! Setup operation
//!
//! Entry point of a run: choose categories, wire the collaborators together
//! and hand control to the [`SetupOrchestrator`].

pub mod orchestrator;
pub mod report;

pub use orchestrator::SetupOrchestrator;
pub use report::SetupReport;

use crate::catalog::CatalogStore;
use crate::category::{Category, CategoryRegistry};
use crate::config::Settings;
use crate::error::Result;
use crate::exec::ShellRunner;
use crate::selector::{AutoSelector, InteractiveSelector, SelectItem, Selector};
use crate::ui::{self, display};

const CATEGORY_PROMPT: &str = "Which categories do you want to set up?";

/// Decide which categories this run processes, in declared order.
///
/// Configured ids win; `select_all` takes everything; otherwise the user
/// picks among the optional categories. Required categories are always
/// included.
pub fn choose_categories<'r>(
    registry: &'r CategoryRegistry,
    settings: &Settings,
    selector: &dyn Selector,
) -> Result<Vec<&'r Category>> {
    if !settings.categories.is_empty() {
        return registry.resolve(&settings.categories);
    }
    if settings.select_all {
        return Ok(registry.all().iter().collect());
    }

    let items: Vec<SelectItem> = registry.optional().map(SelectItem::from).collect();
    let chosen: Vec<String> = selector
        .select(CATEGORY_PROMPT, &items)?
        .into_iter()
        .filter(|id| {
            let known = registry.get(id).is_some();
            if !known {
                tracing::warn!(category = %id, "ignoring unknown category from selection");
            }
            known
        })
        .collect();

    registry.resolve(&chosen)
}

/// Run the whole setup with the real shell and terminal
pub async fn run(settings: &Settings) -> Result<SetupReport> {
    let registry = CategoryRegistry::default();
    let store = CatalogStore::new(settings.catalog_dir.clone());
    let runner = ShellRunner::default();

    let selector: Box<dyn Selector> = if settings.select_all {
        Box::new(AutoSelector)
    } else {
        Box::new(InteractiveSelector)
    };

    let categories = choose_categories(&registry, settings, selector.as_ref())?;
    tracing::debug!(
        categories = ?categories.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        "running categories"
    );

    display::start_banner(settings.dry_run);

    let reporter = ui::progress_reporter(!settings.dry_run);
    let report = SetupOrchestrator::new(&store, &runner, selector.as_ref())
        .with_settings(settings)
        .run(&categories, reporter.as_ref())
        .await?;

    display::summary(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevsetupError;
    use crate::test_fixtures::ScriptedSelector;

    fn ids(categories: &[&Category]) -> Vec<String> {
        categories.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_configured_categories_skip_prompt() {
        let registry = CategoryRegistry::default();
        let settings = Settings {
            categories: vec!["git".to_string(), "browser".to_string()],
            ..Settings::default()
        };
        let selector = ScriptedSelector::select_all();

        let chosen = choose_categories(&registry, &settings, &selector).unwrap();
        assert_eq!(ids(&chosen), vec!["homebrew", "browser", "git"]);
        assert!(selector.prompts().is_empty());
    }

    #[test]
    fn test_unknown_configured_category_is_error() {
        let registry = CategoryRegistry::default();
        let settings = Settings {
            categories: vec!["browsers".to_string()],
            ..Settings::default()
        };

        let err = choose_categories(&registry, &settings, &ScriptedSelector::select_all())
            .unwrap_err();
        assert!(matches!(err, DevsetupError::UnknownCategory { ref id } if id == "browsers"));
    }

    #[test]
    fn test_select_all_takes_every_category() {
        let registry = CategoryRegistry::default();
        let settings = Settings {
            select_all: true,
            ..Settings::default()
        };
        let selector = ScriptedSelector::select_all();

        let chosen = choose_categories(&registry, &settings, &selector).unwrap();
        assert_eq!(chosen.len(), registry.all().len());
        assert!(selector.prompts().is_empty());
    }

    #[test]
    fn test_prompt_offers_optional_categories_only() {
        let registry = CategoryRegistry::default();
        let selector = ScriptedSelector::new(vec![vec!["ai", "nonsense", "editor"]]);

        let chosen = choose_categories(&registry, &Settings::default(), &selector).unwrap();
        assert_eq!(ids(&chosen), vec!["homebrew", "editor", "ai"]);

        let offered = &selector.offered()[0];
        assert!(!offered.contains(&"homebrew".to_string()));
        assert_eq!(offered.len(), registry.optional().count());
        assert_eq!(selector.prompts(), vec![CATEGORY_PROMPT]);
    }

    #[test]
    fn test_empty_prompt_answer_still_runs_required() {
        let registry = CategoryRegistry::default();
        let selector = ScriptedSelector::new(vec![vec![]]);

        let chosen = choose_categories(&registry, &Settings::default(), &selector).unwrap();
        assert_eq!(ids(&chosen), vec!["homebrew"]);
    }
}

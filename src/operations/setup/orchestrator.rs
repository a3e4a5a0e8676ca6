//! Main orchestrator for the setup run
//!
//! Two phases:
//! 1. Selection, one category at a time in declared order: load the catalog,
//!    probe it, let the user choose, then either install inline (serial
//!    categories) or queue tasks (deferred categories).
//! 2. Concurrent join: every queued task starts at once and the run waits
//!    for all of them to settle.
//!
//! Serial installs finish before the next category is even loaded. The queue
//! is only appended to during phase 1 and only read during phase 2.

use std::num::NonZeroUsize;
use std::time::Duration;

use super::report::{CategoryReport, CategoryStatus, SetupReport};
use crate::catalog::CatalogStore;
use crate::category::{Category, CategoryKind};
use crate::config::Settings;
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::probe::Probe;
use crate::selector::{SelectItem, Selector};
use crate::task::{self, BuildOutput, DeferredTask, TaskExecutor};
use crate::ui::{ProgressReporter, display};

/// Drives category processing and the final concurrent join
pub struct SetupOrchestrator<'a, R: CommandRunner> {
    store: &'a CatalogStore,
    selector: &'a dyn Selector,
    probe: Probe<'a, R>,
    executor: TaskExecutor<'a, R>,
    dry_run: bool,
}

impl<'a, R: CommandRunner> SetupOrchestrator<'a, R> {
    pub fn new(store: &'a CatalogStore, runner: &'a R, selector: &'a dyn Selector) -> Self {
        Self {
            store,
            selector,
            probe: Probe::new(runner),
            executor: TaskExecutor::new(runner),
            dry_run: false,
        }
    }

    /// Apply timeouts, probe concurrency and dry-run mode
    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_probe_limits(settings.probe_timeout(), settings.probe_concurrency())
            .with_install_timeout(settings.install_timeout())
            .with_dry_run(settings.dry_run)
    }

    pub fn with_probe_limits(
        mut self,
        timeout: Option<Duration>,
        concurrency: Option<NonZeroUsize>,
    ) -> Self {
        self.probe = self.probe.with_timeout(timeout).with_concurrency(concurrency);
        self
    }

    pub fn with_install_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.executor = self.executor.with_timeout(timeout);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.executor = self.executor.with_dry_run(dry_run);
        self.dry_run = dry_run;
        self
    }

    /// Process `categories` in order, then install every queued task concurrently.
    ///
    /// # Errors
    ///
    /// A catalog failure in a required category, or a failed prompt.
    /// Catalog failures in other categories only skip that category, and
    /// failed installs are reported in the result.
    pub async fn run(
        &self,
        categories: &[&Category],
        reporter: &dyn ProgressReporter,
    ) -> Result<SetupReport> {
        let mut queue: Vec<DeferredTask> = Vec::new();
        let mut reports = Vec::with_capacity(categories.len());

        for category in categories {
            display::category_header(category);

            let report = match self.process_category(category, &mut queue).await {
                Ok(report) => report,
                Err(err) if err.is_catalog_load_error() && !category.required => {
                    tracing::warn!(category = %category.id, error = %err, "skipping category");
                    display::category_skipped(&err);
                    CategoryReport::new(
                        category,
                        CategoryStatus::Skipped {
                            reason: err.to_string(),
                        },
                    )
                }
                Err(err) => return Err(err),
            };
            reports.push(report);
        }

        if !queue.is_empty() {
            display::join_header(queue.len());
        }
        let run = self.executor.join_all(queue, reporter).await;

        Ok(SetupReport {
            categories: reports,
            run,
            dry_run: self.dry_run,
        })
    }

    async fn process_category(
        &self,
        category: &Category,
        queue: &mut Vec<DeferredTask>,
    ) -> Result<CategoryReport> {
        let catalog = category.load(self.store)?;
        let absent = self.probe.filter_absent(&catalog).await;
        tracing::debug!(
            category = %category.id,
            total = catalog.len(),
            absent = absent.len(),
            "probed category"
        );

        if absent.is_empty() {
            display::all_present(category);
            return Ok(CategoryReport::new(category, CategoryStatus::AllPresent));
        }

        let selected = self.selector.select(
            &category.selection_prompt(),
            &SelectItem::from_catalog(&absent),
        )?;
        let BuildOutput {
            tasks,
            unknown_keys,
        } = task::build(&selected, &absent);

        if tasks.is_empty() {
            display::nothing_selected();
        }

        let mut missing_input = Vec::new();
        let status = match category.kind {
            CategoryKind::Serial => {
                let mut settled = Vec::with_capacity(tasks.len());
                for task in tasks {
                    let resolved = if self.dry_run {
                        Ok(task)
                    } else {
                        self.resolve_inputs(task)?
                    };
                    match resolved {
                        Ok(task) => {
                            let done = self.executor.run_inline(task).await;
                            display::inline_result(&done);
                            settled.push(done);
                        }
                        Err(skipped) => missing_input.push(skipped),
                    }
                }
                CategoryStatus::Installed { settled }
            }
            CategoryKind::Deferred => {
                let count = tasks.len();
                if count > 0 {
                    display::queued(count);
                }
                queue.extend(tasks);
                CategoryStatus::Queued
            }
        };

        let mut report = CategoryReport::new(category, status);
        report.unknown_keys = unknown_keys;
        report.missing_input = missing_input;
        Ok(report)
    }

    /// Ask for every input the task declares. Not called in dry-run mode.
    ///
    /// Returns the task with its environment filled in, or the task name when
    /// an input was left unanswered.
    fn resolve_inputs(
        &self,
        mut task: DeferredTask,
    ) -> Result<std::result::Result<DeferredTask, String>> {
        for input in &task.candidate.inputs {
            match self
                .selector
                .ask(&input.prompt, input.default.as_deref())?
            {
                Some(value) => task.env.push((input.name.clone(), value)),
                None => {
                    tracing::warn!(task = %task.name, input = %input.name, "no value given, skipping");
                    display::input_missing(&task, &input.name);
                    return Ok(Err(task.name));
                }
            }
        }
        Ok(Ok(task))
    }
}

//! Outcome of a setup run

use std::fmt;

use crate::category::Category;
use crate::task::{DeferredTask, FailureReason, RunResult, TaskOutcome};

/// What happened to one category during selection
#[derive(Debug)]
pub enum CategoryStatus {
    /// The catalog could not be loaded
    Skipped { reason: String },
    /// Every candidate was already installed
    AllPresent,
    /// Serial category: tasks ran inline, in selection order
    Installed { settled: Vec<DeferredTask> },
    /// Deferred category: tasks were queued for the concurrent join
    Queued,
}

#[derive(Debug)]
pub struct CategoryReport {
    pub title: String,
    pub status: CategoryStatus,
    /// Selected keys that matched no candidate
    pub unknown_keys: Vec<String>,
    /// Serial tasks dropped because an input was left unanswered
    pub missing_input: Vec<String>,
}

impl CategoryReport {
    pub fn new(category: &Category, status: CategoryStatus) -> Self {
        Self {
            title: category.title.clone(),
            status,
            unknown_keys: vec![],
            missing_input: vec![],
        }
    }
}

/// A contained problem worth repeating in the final summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice<'a> {
    CategorySkipped {
        category: &'a str,
        reason: &'a str,
    },
    UnknownKey {
        category: &'a str,
        key: &'a str,
    },
    InputMissing {
        category: &'a str,
        task: &'a str,
    },
    InlineFailed {
        category: &'a str,
        task: &'a str,
        reason: &'a FailureReason,
    },
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CategorySkipped { category, reason } => {
                write!(f, "{} was skipped: {}", category, reason)
            }
            Notice::UnknownKey { category, key } => {
                write!(f, "{}: ignored unknown selection '{}'", category, key)
            }
            Notice::InputMissing { category, task } => {
                write!(f, "{}: {} was not installed, an input was left empty", category, task)
            }
            Notice::InlineFailed {
                category,
                task,
                reason,
            } => write!(f, "{}: {} failed: {}", category, task, reason),
        }
    }
}

/// Everything a run did, consumed by the final summary
#[derive(Debug)]
pub struct SetupReport {
    pub categories: Vec<CategoryReport>,
    /// Result of the concurrent join over deferred tasks
    pub run: RunResult,
    pub dry_run: bool,
}

impl SetupReport {
    /// Inline tasks of serial categories, in the order they ran
    pub fn inline_tasks(&self) -> impl Iterator<Item = &DeferredTask> {
        self.categories
            .iter()
            .filter_map(|c| match &c.status {
                CategoryStatus::Installed { settled } => Some(settled.iter()),
                _ => None,
            })
            .flatten()
    }

    /// Problems recorded during selection, in category order
    pub fn notices(&self) -> Vec<Notice<'_>> {
        let mut notices = Vec::new();

        for report in &self.categories {
            let category = report.title.as_str();
            match &report.status {
                CategoryStatus::Skipped { reason } => notices.push(Notice::CategorySkipped {
                    category,
                    reason: reason.as_str(),
                }),
                CategoryStatus::Installed { settled } => {
                    for task in settled {
                        if let Some(TaskOutcome::Failure(reason)) = task.outcome() {
                            notices.push(Notice::InlineFailed {
                                category,
                                task: task.name.as_str(),
                                reason,
                            });
                        }
                    }
                }
                CategoryStatus::AllPresent | CategoryStatus::Queued => {}
            }

            notices.extend(
                report
                    .missing_input
                    .iter()
                    .map(|task| Notice::InputMissing {
                        category,
                        task: task.as_str(),
                    }),
            );
            notices.extend(report.unknown_keys.iter().map(|key| Notice::UnknownKey {
                category,
                key: key.as_str(),
            }));
        }

        notices
    }
}

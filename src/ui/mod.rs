//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting for the concurrent install phase
//! - Interactive progress bars using indicatif
//! - Silent progress for tests, dry runs and non-terminal output
//!
//! Reporters take `&self` because every running task reports through the
//! same instance.

pub mod display;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::task::DeferredTask;

/// Progress reporter for the concurrent install phase
pub trait ProgressReporter: Send + Sync {
    /// The join is about to start `total` tasks
    fn begin(&self, total: usize);

    fn task_started(&self, task: &DeferredTask);

    fn task_settled(&self, task: &DeferredTask);

    /// Every task settled
    fn finish(&self);
}

/// Interactive progress reporter with a visual progress bar
pub struct InteractiveProgressReporter {
    pb: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(0);
        pb.set_style(style);

        Self { pb }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn begin(&self, total: usize) {
        self.pb.set_length(total as u64);
        self.pb.enable_steady_tick(Duration::from_millis(120));
    }

    fn task_started(&self, task: &DeferredTask) {
        self.pb.set_message(task.description.clone());
    }

    fn task_settled(&self, task: &DeferredTask) {
        let ok = task.outcome().is_some_and(|o| o.is_success());
        let mark = if ok { "✓" } else { "✗" };
        self.pb.println(format!("  {} {}", mark, task.name));
        self.pb.inc(1);
    }

    fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

/// Silent progress reporter
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn begin(&self, _total: usize) {}

    fn task_started(&self, _task: &DeferredTask) {}

    fn task_settled(&self, _task: &DeferredTask) {}

    fn finish(&self) {}
}

/// Pick the reporter for the current output
pub fn progress_reporter(interactive: bool) -> Box<dyn ProgressReporter> {
    if interactive && console::Term::stderr().is_term() {
        Box::new(InteractiveProgressReporter::new())
    } else {
        Box::new(SilentProgressReporter)
    }
}

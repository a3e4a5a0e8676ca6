//! Task execution
//!
//! The executor owns starting tasks. Serial categories run their tasks one at
//! a time through [`TaskExecutor::run_inline`]; the queued tasks of every
//! deferred category start together in [`TaskExecutor::join_all`], which
//! waits for each of them to settle. One failure never cancels another task.

use std::time::Duration;

use futures::future;

use super::{DeferredTask, FailureReason, TaskOutcome};
use crate::exec::{CommandFailure, CommandOutput, CommandRunner};
use crate::ui::{ProgressReporter, SilentProgressReporter};

/// Aggregate of a concurrent join
#[derive(Debug)]
pub struct RunResult {
    pub succeeded: usize,
    pub failed: usize,
    /// Settled tasks, in queue order
    pub tasks: Vec<DeferredTask>,
}

impl RunResult {
    fn new(tasks: Vec<DeferredTask>) -> Self {
        let succeeded = tasks
            .iter()
            .filter(|t| t.outcome().is_some_and(TaskOutcome::is_success))
            .count();

        Self {
            succeeded,
            failed: tasks.len() - succeeded,
            tasks,
        }
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    /// Failed tasks with their reasons
    pub fn failures(&self) -> impl Iterator<Item = (&DeferredTask, &FailureReason)> {
        self.tasks.iter().filter_map(|task| match task.outcome() {
            Some(TaskOutcome::Failure(reason)) => Some((task, reason)),
            _ => None,
        })
    }
}

/// Starts tasks and classifies their outcomes
pub struct TaskExecutor<'a, R: CommandRunner> {
    runner: &'a R,
    timeout: Option<Duration>,
    dry_run: bool,
}

impl<'a, R: CommandRunner> TaskExecutor<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self {
            runner,
            timeout: None,
            dry_run: false,
        }
    }

    /// Bound each install's runtime
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Settle tasks as successful without running their install commands
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run one task to completion
    pub async fn run_inline(&self, task: DeferredTask) -> DeferredTask {
        self.execute(task, &SilentProgressReporter).await
    }

    /// Start every task at once and wait until all of them settled
    pub async fn join_all(
        &self,
        tasks: Vec<DeferredTask>,
        reporter: &dyn ProgressReporter,
    ) -> RunResult {
        reporter.begin(tasks.len());

        let settled =
            future::join_all(tasks.into_iter().map(|task| self.execute(task, reporter))).await;

        reporter.finish();
        RunResult::new(settled)
    }

    async fn execute(
        &self,
        mut task: DeferredTask,
        reporter: &dyn ProgressReporter,
    ) -> DeferredTask {
        task.start();
        reporter.task_started(&task);

        let outcome = if self.dry_run {
            tracing::info!(task = %task.name, command = %task.action(), "dry run, not installing");
            TaskOutcome::Success
        } else {
            classify(
                self.runner
                    .run(task.action(), &task.env, self.timeout)
                    .await,
            )
        };

        if let TaskOutcome::Failure(ref reason) = outcome {
            tracing::warn!(task = %task.name, key = task.key(), %reason, "installation failed");
        }

        task.settle(outcome);
        reporter.task_settled(&task);
        task
    }
}

fn classify(result: Result<CommandOutput, CommandFailure>) -> TaskOutcome {
    match result {
        Ok(output) if output.success() => TaskOutcome::Success,
        Ok(output) => TaskOutcome::Failure(FailureReason::Exit {
            code: output.code,
            message: output.last_error_line().map(str::to_string),
        }),
        Err(CommandFailure::Spawn(reason)) => TaskOutcome::Failure(FailureReason::Spawn(reason)),
        Err(CommandFailure::TimedOut(limit)) => {
            TaskOutcome::Failure(FailureReason::TimedOut(limit))
        }
    }
}

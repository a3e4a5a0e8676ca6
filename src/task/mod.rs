//! Deferred units of installation work
//!
//! A [`DeferredTask`] is inert data: it names the candidate to install and
//! tracks its state. Nothing runs until a [`TaskExecutor`] starts it, so
//! tasks from every category can be built before the first install begins.
//!
//! State machine: `Queued -> Running -> Settled(Success | Failure)`.
//! There is no retry and no cancellation.

mod builder;
mod executor;

use std::fmt;
use std::time::Duration;

pub use builder::{BuildOutput, build};
pub use executor::{RunResult, TaskExecutor};

use crate::catalog::{CandidateDescriptor, CommandSpec};

/// Why a task settled as a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The install command exited non-zero (`None` when killed by a signal)
    Exit {
        code: Option<i32>,
        message: Option<String>,
    },
    /// The install command could not be started
    Spawn(String),
    TimedOut(Duration),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Exit { code, message } => {
                match code {
                    Some(code) => write!(f, "exited with status {}", code)?,
                    None => write!(f, "terminated by a signal")?,
                }
                if let Some(message) = message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
            FailureReason::Spawn(reason) => write!(f, "failed to start: {}", reason),
            FailureReason::TimedOut(limit) => write!(f, "timed out after {}s", limit.as_secs()),
        }
    }
}

/// Terminal outcome of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    Failure(FailureReason),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    Queued,
    Running,
    Settled(TaskOutcome),
}

/// A built, not yet started install
#[derive(Debug, Clone)]
pub struct DeferredTask {
    pub name: String,
    pub description: String,
    pub candidate: CandidateDescriptor,
    /// Extra environment for the install command
    pub env: Vec<(String, String)>,
    state: TaskState,
}

impl DeferredTask {
    pub fn new(candidate: CandidateDescriptor) -> Self {
        Self {
            name: candidate.display_name.clone(),
            description: format!("{} installation", candidate.display_name),
            candidate,
            env: vec![],
            state: TaskState::Queued,
        }
    }

    pub fn key(&self) -> &str {
        &self.candidate.key
    }

    pub fn action(&self) -> &CommandSpec {
        &self.candidate.install_action
    }

    #[cfg(test)]
    pub fn state(&self) -> &TaskState {
        &self.state
    }

    /// Outcome once settled
    pub fn outcome(&self) -> Option<&TaskOutcome> {
        match &self.state {
            TaskState::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub(crate) fn start(&mut self) {
        debug_assert_eq!(self.state, TaskState::Queued, "task started twice");
        self.state = TaskState::Running;
    }

    pub(crate) fn settle(&mut self, outcome: TaskOutcome) {
        debug_assert_eq!(self.state, TaskState::Running, "task settled without running");
        self.state = TaskState::Settled(outcome);
    }
}

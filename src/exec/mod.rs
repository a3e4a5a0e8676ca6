//! Host command execution
//!
//! Probes and installs both go through [`CommandRunner`], so the
//! orchestration logic can be exercised without spawning real processes.

mod shell;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::CommandSpec;

pub use shell::ShellRunner;

/// Captured result of a command that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// First non-empty stdout line, e.g. a version string
    pub fn first_line(&self) -> Option<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }

    /// Last non-empty stderr line, falling back to stdout
    pub fn last_error_line(&self) -> Option<&str> {
        last_line(&self.stderr).or_else(|| last_line(&self.stdout))
    }
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).rfind(|line| !line.is_empty())
}

/// A command that did not run to completion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandFailure {
    #[error("failed to start: {0}")]
    Spawn(String),

    #[error("timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
}

/// Runs host commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with extra environment variables.
    ///
    /// A non-zero exit is not an `Err`; only spawning failures and timeouts are.
    async fn run(
        &self,
        command: &CommandSpec,
        env: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, CommandFailure>;
}

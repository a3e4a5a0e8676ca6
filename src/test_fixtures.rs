//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helpers to create catalogs on disk, scripted command
//! runners and scripted selectors with a single function call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeRunner, ScriptedSelector, create_temp_dir, write_catalog};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let temp = create_temp_dir();
//!     write_catalog(temp.path(), "browser", r#"[...]"#);
//!
//!     let runner = FakeRunner::new().exit("check", 1).succeed("install");
//!     let selector = ScriptedSelector::select_all();
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use crate::catalog::{CandidateDescriptor, Catalog, CommandSpec};
use crate::error::{DevsetupError, Result};
use crate::exec::{CommandFailure, CommandOutput, CommandRunner};
use crate::selector::{SelectItem, Selector};
use crate::task::DeferredTask;
use crate::ui::ProgressReporter;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `<dir>/<id>.json` with the given content.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_catalog(dir: &Path, id: &str, json: &str) {
    std::fs::write(dir.join(format!("{}.json", id)), json).expect("Failed to write catalog");
}

/// Catalog JSON for `(key, check, install)` triples
#[must_use]
pub fn catalog_json(entries: &[(&str, &str, &str)]) -> String {
    let entries: Vec<serde_json::Value> = entries
        .iter()
        .map(|(key, check, install)| {
            serde_json::json!({
                "key": key,
                "name": key.to_uppercase(),
                "check": check,
                "install": install,
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

/// Candidate whose display name is the upper-cased key
#[must_use]
pub fn candidate(key: &str, check: &str, install: &str) -> CandidateDescriptor {
    CandidateDescriptor {
        key: key.to_string(),
        display_name: key.to_uppercase(),
        description: String::new(),
        presence_check: CommandSpec::new(check),
        install_action: CommandSpec::new(install),
        inputs: vec![],
    }
}

/// In-memory catalog from `(key, check)` pairs; installs are `install <key>`
///
/// # Panics
///
/// Panics on duplicate keys.
#[must_use]
pub fn catalog_of(category: &str, entries: &[(&str, &str)]) -> Catalog {
    let entries = entries
        .iter()
        .map(|(key, check)| candidate(key, check, &format!("install {}", key)))
        .collect();
    Catalog::new(category, entries).expect("Failed to build catalog")
}

#[derive(Debug, Clone)]
enum Script {
    Output {
        code: i32,
        stdout: String,
        stderr: String,
        delay: Duration,
    },
    Spawn,
    Timeout,
}

#[derive(Default)]
struct RunLog {
    events: Vec<String>,
    commands: Vec<String>,
    timeouts: Vec<Option<Duration>>,
    env: HashMap<String, Vec<(String, String)>>,
}

/// Command runner answering from a script instead of a shell.
///
/// Every call is recorded as a `start:<command>` and a `finish:<command>`
/// event. Commands without a script exit with status 127, like a shell
/// would for a missing binary.
#[derive(Default)]
pub struct FakeRunner {
    scripts: HashMap<String, Script>,
    log: Mutex<RunLog>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(mut self, command: &str, script: Script) -> Self {
        self.scripts.insert(command.to_string(), script);
        self
    }

    fn output(self, command: &str, code: i32, stdout: &str, stderr: &str, delay: Duration) -> Self {
        self.script(
            command,
            Script::Output {
                code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                delay,
            },
        )
    }

    pub fn succeed(self, command: &str) -> Self {
        self.output(command, 0, "", "", Duration::ZERO)
    }

    pub fn succeed_with(self, command: &str, stdout: &str) -> Self {
        self.output(command, 0, stdout, "", Duration::ZERO)
    }

    pub fn succeed_after(self, command: &str, delay: Duration) -> Self {
        self.output(command, 0, "", "", delay)
    }

    pub fn exit(self, command: &str, code: i32) -> Self {
        self.output(command, code, "", "", Duration::ZERO)
    }

    pub fn fail_after(self, command: &str, code: i32, delay: Duration) -> Self {
        self.output(command, code, "", "", delay)
    }

    pub fn fail_with(self, command: &str, code: i32, stderr: &str) -> Self {
        self.output(command, code, "", stderr, Duration::ZERO)
    }

    pub fn spawn_error(self, command: &str) -> Self {
        self.script(command, Script::Spawn)
    }

    /// The command hits its timeout, or a zero-length one when none was given
    pub fn timeout(self, command: &str) -> Self {
        self.script(command, Script::Timeout)
    }

    pub fn events(&self) -> Vec<String> {
        self.log.lock().expect("run log poisoned").events.clone()
    }

    /// Commands in the order they started
    pub fn commands(&self) -> Vec<String> {
        self.log.lock().expect("run log poisoned").commands.clone()
    }

    pub fn timeouts(&self) -> Vec<Option<Duration>> {
        self.log.lock().expect("run log poisoned").timeouts.clone()
    }

    /// Environment of the last run of `command`
    pub fn env_for(&self, command: &str) -> Option<Vec<(String, String)>> {
        self.log
            .lock()
            .expect("run log poisoned")
            .env
            .get(command)
            .cloned()
    }

    fn record(&self, event: String) {
        self.log.lock().expect("run log poisoned").events.push(event);
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(
        &self,
        command: &CommandSpec,
        env: &[(String, String)],
        timeout: Option<Duration>,
    ) -> std::result::Result<CommandOutput, CommandFailure> {
        let cmd = command.as_str().to_string();
        {
            let mut log = self.log.lock().expect("run log poisoned");
            log.events.push(format!("start:{}", cmd));
            log.commands.push(cmd.clone());
            log.timeouts.push(timeout);
            log.env.insert(cmd.clone(), env.to_vec());
        }

        let result = match self.scripts.get(&cmd).cloned() {
            Some(Script::Output {
                code,
                stdout,
                stderr,
                delay,
            }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(CommandOutput {
                    code: Some(code),
                    stdout,
                    stderr,
                })
            }
            Some(Script::Spawn) => Err(CommandFailure::Spawn("scripted spawn failure".to_string())),
            Some(Script::Timeout) => Err(CommandFailure::TimedOut(timeout.unwrap_or_default())),
            None => Ok(CommandOutput {
                code: Some(127),
                stdout: String::new(),
                stderr: format!("sh: {}: command not found", cmd),
            }),
        };

        self.record(format!("finish:{}", cmd));
        result
    }
}

/// Selector replaying scripted answers.
///
/// Each `select` call pops the next scripted key list, or selects every
/// offered item once the script runs out. Each `ask` call pops the next
/// answer; `None` (or an exhausted script) falls back to the default.
#[derive(Default)]
pub struct ScriptedSelector {
    selections: Mutex<VecDeque<Vec<String>>>,
    answers: Mutex<VecDeque<Option<String>>>,
    offered: Mutex<Vec<Vec<String>>>,
    prompts: Mutex<Vec<String>>,
    failing: bool,
}

impl ScriptedSelector {
    pub fn new(selections: Vec<Vec<&str>>) -> Self {
        Self {
            selections: Mutex::new(
                selections
                    .into_iter()
                    .map(|keys| keys.into_iter().map(str::to_string).collect())
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn select_all() -> Self {
        Self::default()
    }

    /// Every prompt fails as if the terminal went away
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_answers(self, answers: Vec<Option<&str>>) -> Self {
        *self.answers.lock().expect("answers poisoned") = answers
            .into_iter()
            .map(|a| a.map(str::to_string))
            .collect();
        self
    }

    /// Keys offered by each `select` call
    pub fn offered(&self) -> Vec<Vec<String>> {
        self.offered.lock().expect("offered poisoned").clone()
    }

    /// Prompts shown so far, selections and questions alike
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts poisoned").clone()
    }

    fn check(&self, prompt: &str) -> Result<()> {
        self.prompts
            .lock()
            .expect("prompts poisoned")
            .push(prompt.to_string());
        if self.failing {
            return Err(DevsetupError::PromptFailed {
                message: "input device is not a TTY".to_string(),
            });
        }
        Ok(())
    }
}

impl Selector for ScriptedSelector {
    fn select(&self, prompt: &str, items: &[SelectItem]) -> Result<Vec<String>> {
        self.check(prompt)?;
        let keys: Vec<String> = items.iter().map(|i| i.key.clone()).collect();
        self.offered
            .lock()
            .expect("offered poisoned")
            .push(keys.clone());

        Ok(self
            .selections
            .lock()
            .expect("selections poisoned")
            .pop_front()
            .unwrap_or(keys))
    }

    fn ask(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        self.check(prompt)?;
        let answer = self
            .answers
            .lock()
            .expect("answers poisoned")
            .pop_front()
            .flatten();
        Ok(answer.or_else(|| default.map(str::to_string)))
    }
}

/// Progress reporter recording every callback
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("events poisoned").clone()
    }

    fn push(&self, event: String) {
        self.events.lock().expect("events poisoned").push(event);
    }
}

impl ProgressReporter for RecordingReporter {
    fn begin(&self, total: usize) {
        self.push(format!("begin:{}", total));
    }

    fn task_started(&self, task: &DeferredTask) {
        self.push(format!("started:{}", task.name));
    }

    fn task_settled(&self, task: &DeferredTask) {
        let state = if task.outcome().is_some_and(|o| o.is_success()) {
            "ok"
        } else {
            "failed"
        };
        self.push(format!("settled:{}:{}", task.name, state));
    }

    fn finish(&self) {
        self.push("finish".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_catalog_round_trips_through_store() {
        let temp = create_temp_dir();
        write_catalog(
            temp.path(),
            "cli",
            &catalog_json(&[("jq", "command -v jq", "brew install jq")]),
        );

        let catalog = crate::catalog::CatalogStore::directory(temp.path())
            .load("cli")
            .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].display_name, "JQ");
    }

    #[tokio::test]
    async fn test_unscripted_command_exits_127() {
        let runner = FakeRunner::new();
        let output = runner
            .run(&CommandSpec::new("nope"), &[], None)
            .await
            .unwrap();
        assert_eq!(output.code, Some(127));
        assert_eq!(runner.events(), vec!["start:nope", "finish:nope"]);
    }

    #[test]
    fn test_scripted_selector_falls_back_to_everything() {
        let selector = ScriptedSelector::new(vec![vec!["b"]]);
        let items = vec![
            SelectItem::from(&candidate("a", "x", "y")),
            SelectItem::from(&candidate("b", "x", "y")),
        ];

        assert_eq!(selector.select("first", &items).unwrap(), vec!["b"]);
        assert_eq!(selector.select("second", &items).unwrap(), vec!["a", "b"]);
        assert_eq!(selector.prompts(), vec!["first", "second"]);
    }
}

//! Shell-backed command runner

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::{CommandFailure, CommandOutput, CommandRunner};
use crate::catalog::CommandSpec;

/// Homebrew prefixes on Apple silicon and Intel, missing from PATH right
/// after a fresh Homebrew install.
const HOMEBREW_BIN_DIRS: &[&str] = &["/opt/homebrew/bin", "/usr/local/bin"];

/// Runs commands with `<shell> -c`, stdin closed and output captured
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
    extra_path: Vec<PathBuf>,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self {
            shell: PathBuf::from("/bin/sh"),
            extra_path: HOMEBREW_BIN_DIRS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl ShellRunner {
    /// Use a different shell binary
    #[cfg(test)]
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// PATH with the extra directories appended when absent
    fn search_path(&self) -> Option<OsString> {
        let mut paths: Vec<PathBuf> = std::env::var_os("PATH")
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();

        for dir in &self.extra_path {
            if !paths.contains(dir) {
                paths.push(dir.clone());
            }
        }

        std::env::join_paths(paths).ok()
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(
        &self,
        command: &CommandSpec,
        env: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, CommandFailure> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Own process group, so a timeout can take down everything the shell started
        #[cfg(unix)]
        cmd.process_group(0);

        if let Some(path) = self.search_path() {
            cmd.env("PATH", path);
        }
        cmd.envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        tracing::debug!(%command, "running command");

        let child = cmd
            .spawn()
            .map_err(|e| CommandFailure::Spawn(e.to_string()))?;
        let group = child.id();

        let output = match timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(output) => output,
                Err(_) => {
                    kill_group(group);
                    return Err(CommandFailure::TimedOut(limit));
                }
            },
            None => child.wait_with_output().await,
        }
        .map_err(|e| CommandFailure::Spawn(e.to_string()))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// SIGKILL every process left in the group led by `pid`.
///
/// The shell itself is already gone through `kill_on_drop` and reaped by
/// tokio; this reaches the processes it spawned.
#[cfg(unix)]
fn kill_group(pid: Option<u32>) {
    let Some(pgid) = pid.and_then(|p| libc::pid_t::try_from(p).ok()) else {
        return;
    };

    // SAFETY: killpg only sends a signal; `pgid` is the group created for our own child
    if unsafe { libc::killpg(pgid, libc::SIGKILL) } != 0 {
        tracing::debug!(
            pgid,
            error = %std::io::Error::last_os_error(),
            "process group already gone"
        );
    }
}

#[cfg(not(unix))]
fn kill_group(_pid: Option<u32>) {}

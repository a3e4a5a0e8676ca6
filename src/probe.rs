//! Presence detection
//!
//! A probe never fails: anything that prevents a definite "present" answer
//! (non-zero exit, missing binary, spawn failure, timeout) classifies the
//! candidate as absent, keeping the reason for diagnostics only.

use std::num::NonZeroUsize;
use std::time::Duration;

use futures::StreamExt;
use futures::future::join_all;

use crate::catalog::{CandidateDescriptor, Catalog};
use crate::exec::CommandRunner;

/// Outcome of one presence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub present: bool,
    /// Version line when present, failure reason otherwise
    pub detail: Option<String>,
}

impl ProbeResult {
    fn present(detail: Option<&str>) -> Self {
        Self {
            present: true,
            detail: detail.map(str::to_string),
        }
    }

    fn absent(detail: impl Into<String>) -> Self {
        Self {
            present: false,
            detail: Some(detail.into()),
        }
    }
}

/// Runs presence checks over catalogs
pub struct Probe<'a, R: CommandRunner> {
    runner: &'a R,
    timeout: Option<Duration>,
    concurrency: Option<NonZeroUsize>,
}

impl<'a, R: CommandRunner> Probe<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self {
            runner,
            timeout: None,
            concurrency: None,
        }
    }

    /// Bound each check's runtime
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cap the number of checks in flight at once
    pub fn with_concurrency(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.concurrency = limit;
        self
    }

    /// Check whether one candidate is already installed
    pub async fn check_presence(&self, candidate: &CandidateDescriptor) -> ProbeResult {
        let result = match self
            .runner
            .run(&candidate.presence_check, &[], self.timeout)
            .await
        {
            Ok(output) if output.success() => ProbeResult::present(output.first_line()),
            Ok(output) => ProbeResult::absent(match output.code {
                Some(code) => format!("check exited with status {}", code),
                None => "check was terminated by a signal".to_string(),
            }),
            Err(failure) => ProbeResult::absent(format!("check {}", failure)),
        };

        tracing::debug!(
            key = %candidate.key,
            present = result.present,
            detail = result.detail.as_deref().unwrap_or(""),
            "probed candidate"
        );
        result
    }

    /// Check every candidate of `catalog` concurrently; results keep catalog order
    pub async fn check_all(&self, catalog: &Catalog) -> Vec<ProbeResult> {
        let checks = catalog.entries().iter().map(|c| self.check_presence(c));

        match self.concurrency {
            Some(limit) => {
                futures::stream::iter(checks)
                    .buffered(limit.get())
                    .collect::<Vec<_>>()
                    .await
            }
            None => join_all(checks).await,
        }
    }

    /// The candidates of `catalog` that are not installed yet, in catalog order
    pub async fn filter_absent(&self, catalog: &Catalog) -> Catalog {
        let absent: Vec<bool> = self
            .check_all(catalog)
            .await
            .iter()
            .map(|result| !result.present)
            .collect();
        catalog.retain_by(&absent)
    }
}

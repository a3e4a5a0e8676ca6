//! Run settings
//!
//! Settings come from an optional YAML file and are then overridden by
//! command line flags:
//!
//! ```yaml
//! categories: [browser, editor, git]
//! catalog_dir: ~/dotfiles/catalogs
//! probe_timeout_secs: 30      # null disables
//! install_timeout_secs: 1800  # null disables
//! probe_concurrency: 8        # default: unbounded
//! select_all: false
//! dry_run: false
//! ```

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{DevsetupError, Result, config as config_error};

const CONFIG_DIR: &str = "devsetup";
const CONFIG_FILE: &str = "config.yaml";

const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_INSTALL_TIMEOUT_SECS: u64 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Categories to run; empty means ask
    pub categories: Vec<String>,
    pub catalog_dir: Option<PathBuf>,
    pub probe_timeout_secs: Option<u64>,
    pub install_timeout_secs: Option<u64>,
    pub probe_concurrency: Option<usize>,
    pub select_all: bool,
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: vec![],
            catalog_dir: None,
            probe_timeout_secs: Some(DEFAULT_PROBE_TIMEOUT_SECS),
            install_timeout_secs: Some(DEFAULT_INSTALL_TIMEOUT_SECS),
            probe_concurrency: None,
            select_all: false,
            dry_run: false,
        }
    }
}

impl Settings {
    /// `<config_dir>/devsetup/config.yaml`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load settings from `path`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.exists() => Err(config_error::not_found(path.display().to_string())),
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    tracing::debug!("no configuration file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)
            .map_err(|e| config_error::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content).map_err(|e| match e {
            DevsetupError::ConfigParseFailed { reason, .. } => {
                config_error::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Flags win over the file
    pub fn apply_cli(&mut self, cli: &Cli) {
        if !cli.categories.is_empty() {
            self.categories = cli.categories.clone();
        }
        if let Some(dir) = &cli.catalog_dir {
            self.catalog_dir = Some(dir.clone());
        }
        self.select_all |= cli.select_all;
        self.dry_run |= cli.dry_run;
    }

    pub fn validate(&self) -> Result<()> {
        if self.probe_concurrency == Some(0) {
            return Err(config_error::invalid(
                "probe_concurrency must be at least 1 (omit it for no limit)",
            ));
        }
        if self.probe_timeout_secs == Some(0) {
            return Err(config_error::invalid(
                "probe_timeout_secs must be positive (use null to disable)",
            ));
        }
        if self.install_timeout_secs == Some(0) {
            return Err(config_error::invalid(
                "install_timeout_secs must be positive (use null to disable)",
            ));
        }
        Ok(())
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_secs.map(Duration::from_secs)
    }

    pub fn install_timeout(&self) -> Option<Duration> {
        self.install_timeout_secs.map(Duration::from_secs)
    }

    pub fn probe_concurrency(&self) -> Option<NonZeroUsize> {
        self.probe_concurrency.and_then(NonZeroUsize::new)
    }
}

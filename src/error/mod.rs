//! Error types and handling for devsetup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`catalog`]: Catalog loading errors
//! - [`config`]: Configuration errors
//! - [`host`]: Host detection errors
//!
//! Probe ambiguity, unknown selection keys and failed installs are not errors:
//! they are recorded as data on the probe result, the build output and the
//! task outcome respectively.

pub mod catalog;
pub mod config;
pub mod host;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for devsetup operations
#[derive(Error, Diagnostic, Debug)]
pub enum DevsetupError {
    // Host errors
    #[error("Unsupported host operating system: {os}")]
    #[diagnostic(
        code(devsetup::host::unsupported),
        help("devsetup provisions {expected} workstations only")
    )]
    UnsupportedHost { os: String, expected: String },

    // Catalog errors
    #[error("No catalog found for category '{category}'")]
    #[diagnostic(
        code(devsetup::catalog::not_found),
        help("Add '{category}.json' to the catalog directory or remove the category from your selection")
    )]
    CatalogNotFound { category: String },

    #[error("Failed to parse catalog for category '{category}': {reason}")]
    #[diagnostic(code(devsetup::catalog::parse_failed))]
    CatalogParseFailed { category: String, reason: String },

    #[error("Invalid catalog for category '{category}': {message}")]
    #[diagnostic(code(devsetup::catalog::invalid))]
    CatalogInvalid { category: String, message: String },

    #[error("Unknown category: {id}")]
    #[diagnostic(
        code(devsetup::catalog::unknown_category),
        help(
            "Known categories: homebrew, browser, editor, terminal, node, shell, git, communication, productivity, design, ai, api, database, java, js-package-manager"
        )
    )]
    UnknownCategory { id: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(devsetup::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(devsetup::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(devsetup::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(devsetup::config::invalid))]
    ConfigInvalid { message: String },

    // Interaction errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(
        code(devsetup::prompt::failed),
        help("Run with --select-all to skip interactive prompts")
    )]
    PromptFailed { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(devsetup::fs::io_error))]
    IoError { message: String },
}

impl DevsetupError {
    /// Whether this error means a category's catalog could not be loaded.
    ///
    /// Such errors only abort the run for required categories; any other
    /// category is skipped.
    pub fn is_catalog_load_error(&self) -> bool {
        matches!(
            self,
            DevsetupError::CatalogNotFound { .. }
                | DevsetupError::CatalogParseFailed { .. }
                | DevsetupError::CatalogInvalid { .. }
        )
    }
}

impl From<std::io::Error> for DevsetupError {
    fn from(err: std::io::Error) -> Self {
        DevsetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DevsetupError {
    fn from(err: serde_yaml::Error) -> Self {
        DevsetupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for DevsetupError {
    fn from(err: inquire::InquireError) -> Self {
        DevsetupError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DevsetupError>;

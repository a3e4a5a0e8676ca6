//! Host detection
//!
//! Every catalog assumes macOS: Homebrew casks, `/Applications` bundles and
//! the macOS `ssh-keygen`. Anything else is refused before the first prompt.

use crate::error::{Result, host as host_error};

const SUPPORTED: &str = "macos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFamily {
    MacOs,
    Other(&'static str),
}

impl HostFamily {
    pub fn from_os(os: &'static str) -> Self {
        if os == SUPPORTED {
            HostFamily::MacOs
        } else {
            HostFamily::Other(os)
        }
    }
}

/// The operating system this binary runs on
pub fn detect() -> HostFamily {
    HostFamily::from_os(std::env::consts::OS)
}

/// Refuse to run anywhere but macOS
pub fn ensure_supported(host: HostFamily) -> Result<()> {
    match host {
        HostFamily::MacOs => Ok(()),
        HostFamily::Other(os) => Err(host_error::unsupported(os, "macOS")),
    }
}

//! Diagnostic logging
//!
//! User-facing output goes to stdout through `ui::display`. Diagnostics go
//! through `tracing` to stderr, filtered by `DEVSETUP_LOG` (an `EnvFilter`
//! directive) or by `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `devsetup=trace`
pub const LOG_ENV: &str = "DEVSETUP_LOG";

/// Filter used when `DEVSETUP_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "devsetup=debug"
    } else {
        "devsetup=warn"
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Fails only when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "devsetup=warn");
        assert_eq!(default_directive(true), "devsetup=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}

//! Setup command implementation
//!
//! Startup checks and settings are resolved here, then the async setup
//! operation runs on a single-threaded tokio runtime. Failed installs are
//! part of the report, so a run that reaches the summary always succeeds.

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::host;
use crate::operations::setup;

/// Run the setup command
pub fn run(cli: &Cli) -> Result<()> {
    host::ensure_supported(host::detect())?;

    let settings = load_settings(cli)?;
    tracing::debug!(?settings, "effective settings");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(setup::run(&settings))?;
    tracing::info!(
        succeeded = report.run.succeeded,
        failed = report.run.failed,
        "setup finished"
    );
    Ok(())
}

/// Config file first, then flags on top
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    settings.apply_cli(cli);
    settings.validate()?;
    Ok(settings)
}

//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// devsetup - macOS workstation provisioning
///
/// Walks through tool categories, installs what you pick and skips what is already there.
#[derive(Parser, Debug)]
#[command(
    name = "devsetup",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Interactive developer workstation setup for macOS",
    long_about = "devsetup walks through tool categories (browsers, editors, terminals, runtimes, \
                  shell and git configuration, ...), probes which tools are already installed and \
                  installs the ones you select. Shell and git configuration run immediately; \
                  everything else is installed concurrently at the end of the run.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  devsetup                                   \x1b[90m# Choose categories interactively\x1b[0m\n   \
                  devsetup --category browser --category ai  \x1b[90m# Only these (plus Homebrew)\x1b[0m\n   \
                  devsetup --select-all --dry-run            \x1b[90m# Show what a full run would install\x1b[0m\n   \
                  devsetup --catalog-dir ./catalogs          \x1b[90m# Use custom catalogs\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Configuration file (defaults to ~/.config/devsetup/config.yaml)
    #[arg(long, short = 'c', env = "DEVSETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory with <category>.json catalogs overriding the built-in ones
    #[arg(long, value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Category to set up (repeatable); skips the category prompt
    #[arg(long = "category", value_name = "ID")]
    pub categories: Vec<String>,

    /// Select every category and every missing tool without prompting
    #[arg(long)]
    pub select_all: bool,

    /// Probe and select, but do not install anything
    #[arg(long)]
    pub dry_run: bool,
}

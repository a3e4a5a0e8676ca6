//! devsetup - interactive developer workstation setup
//!
//! Walks through tool categories on a macOS host, probes which tools are
//! already installed, lets the user pick from the rest and installs them.
//! Shell and git configuration install inline; everything else is queued and
//! installed concurrently once every category has been processed.

use clap::Parser;
use miette::Diagnostic;

mod catalog;
mod category;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod host;
mod logging;
mod operations;
mod probe;
mod selector;
mod task;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::setup::run(&cli) {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}

//! Display functions for a setup run
//!
//! Everything here writes user-facing lines to stdout. Diagnostics go
//! through `tracing` instead.

use console::Style;

use crate::category::Category;
use crate::error::DevsetupError;
use crate::operations::setup::SetupReport;
use crate::task::{DeferredTask, TaskOutcome};

/// Banner printed before anything else
pub fn start_banner(dry_run: bool) {
    println!(
        "{}",
        Style::new().bold().apply_to("🚀 Starting workstation setup…")
    );
    if dry_run {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("   Dry run: nothing will be installed")
        );
    }
}

pub fn category_header(category: &Category) {
    println!();
    println!(
        "{} {}",
        Style::new().cyan().bold().apply_to("▸"),
        Style::new().bold().apply_to(&category.title)
    );
}

pub fn all_present(category: &Category) {
    println!(
        "  {} All {} are already installed",
        Style::new().green().apply_to("✓"),
        category.title.to_lowercase()
    );
}

pub fn nothing_selected() {
    println!("  {}", Style::new().dim().apply_to("Nothing selected"));
}

pub fn category_skipped(err: &DevsetupError) {
    println!(
        "  {} Skipped: {}",
        Style::new().yellow().apply_to("⚠"),
        err
    );
}

pub fn queued(count: usize) {
    println!(
        "  {} queued for installation",
        Style::new().bold().apply_to(count)
    );
}

pub fn input_missing(task: &DeferredTask, input: &str) {
    println!(
        "  {} Skipping {}: no value for {}",
        Style::new().yellow().apply_to("⚠"),
        task.name,
        input
    );
}

/// Result line for an inline install
pub fn inline_result(task: &DeferredTask) {
    match task.outcome() {
        Some(TaskOutcome::Success) => {
            println!("  {} {}", Style::new().green().apply_to("✓"), task.name);
        }
        Some(TaskOutcome::Failure(reason)) => {
            println!(
                "  {} {}: {}",
                Style::new().red().apply_to("✗"),
                task.name,
                reason
            );
        }
        None => {}
    }
}

pub fn join_header(total: usize) {
    println!();
    println!(
        "{} Installing {} tool{}…",
        Style::new().cyan().bold().apply_to("▸"),
        total,
        if total == 1 { "" } else { "s" }
    );
}

/// Final summary of the run
pub fn summary(report: &SetupReport) {
    let run = &report.run;

    println!();
    let (inline_ok, inline_failed) = report
        .inline_tasks()
        .fold((0, 0), |(ok, failed), task| match task.outcome() {
            Some(TaskOutcome::Success) => (ok + 1, failed),
            _ => (ok, failed + 1),
        });
    if inline_ok + inline_failed > 0 {
        println!(
            "{} {} succeeded, {} failed",
            Style::new().bold().apply_to("Configured:"),
            Style::new().green().apply_to(inline_ok),
            if inline_failed > 0 {
                Style::new().red().apply_to(inline_failed)
            } else {
                Style::new().apply_to(inline_failed)
            }
        );
    }
    if run.total() > 0 {
        println!(
            "{} {} succeeded, {} failed",
            Style::new().bold().apply_to("Installed:"),
            Style::new().green().apply_to(run.succeeded),
            if run.failed > 0 {
                Style::new().red().apply_to(run.failed)
            } else {
                Style::new().apply_to(run.failed)
            }
        );
        for (task, reason) in run.failures() {
            println!(
                "  {} {}: {}",
                Style::new().red().apply_to("✗"),
                task.name,
                reason
            );
        }
    }

    let notices = report.notices();
    if !notices.is_empty() {
        println!("{}", Style::new().bold().apply_to("Needs attention:"));
        for notice in notices {
            println!("  {} {}", Style::new().yellow().apply_to("⚠"), notice);
        }
    }

    let label = if report.dry_run {
        "🎉 Setup complete (dry run)"
    } else {
        "🎉 Setup complete!"
    };
    println!("{}", Style::new().bold().apply_to(label));
}

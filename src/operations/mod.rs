//! High-level operations
//!
//! - setup: category selection, the two-phase orchestrator and its report

pub mod setup;

//! Command implementations for the devsetup CLI

pub mod setup;

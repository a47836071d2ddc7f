//! Shared types for the caravan workspace.
//!
//! * **[`models`]**: the journey being measured and the elapsed time it produces.
//! * **[`config`]**: run-wide presentation settings built from the command line.

pub mod config;
pub mod models;

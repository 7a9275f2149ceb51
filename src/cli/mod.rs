//! CLI commands
//!
//! Command implementations for the `issue-batch` binary.

mod create;
mod progress;
mod style;

pub use create::{print_usage, run_create};

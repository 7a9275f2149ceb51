//! issue-batch - bulk-create GitHub issues
//!
//! Reads issue descriptors from a JSON file and submits each one to a
//! repository's issue tracker, reporting per-issue and aggregate results.

pub mod config;
pub mod error;
pub mod input;
pub mod submit;
pub mod tracker;
pub mod types;

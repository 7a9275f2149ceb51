//! Batch submission engine
//!
//! Submits issue descriptors one at a time, classifies each reply and folds
//! the outcomes into a run summary.

mod execute;
mod progress;

pub use execute::{BatchReport, classify_response, run_batch, submit_issue};
pub use progress::{NoopProgress, ProgressCallback};

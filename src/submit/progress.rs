//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, tests, etc.) to receive
//! updates while a batch is being submitted.

use crate::config::RepoConfig;
use crate::types::{RunSummary, SubmissionResult};
use async_trait::async_trait;

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a batch run.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called once before the first submission
    async fn on_batch_start(&self, total: usize, config: &RepoConfig);

    /// Called when the tracker created an issue
    async fn on_issue_created(&self, result: &SubmissionResult);

    /// Called when the tracker rejected an issue (non-fatal)
    async fn on_issue_failed(&self, result: &SubmissionResult);

    /// Called once after the last submission
    async fn on_batch_complete(&self, summary: &RunSummary);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_batch_start(&self, _total: usize, _config: &RepoConfig) {}
    async fn on_issue_created(&self, _result: &SubmissionResult) {}
    async fn on_issue_failed(&self, _result: &SubmissionResult) {}
    async fn on_batch_complete(&self, _summary: &RunSummary) {}
}

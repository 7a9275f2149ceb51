//! Submission execution
//!
//! Sends each descriptor to the tracker in document order. A rejected issue
//! is recorded and the run moves on; transport and response-shape errors
//! abort the batch.

use crate::error::{Error, Result};
use crate::submit::ProgressCallback;
use crate::tracker::IssueTracker;
use crate::types::{ApiResponse, CreatedIssue, IssueDescriptor, RunSummary, SubmissionResult};
use reqwest::StatusCode;
use tracing::{info, warn};

/// Result of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Per-issue outcomes, in submission order
    pub results: Vec<SubmissionResult>,
    /// Aggregate counts
    pub summary: RunSummary,
}

/// Classify a tracker reply
///
/// Only `201 Created` counts as success. Any other status becomes a rejected
/// result carrying the status and raw body.
pub fn classify_response(
    descriptor: IssueDescriptor,
    response: &ApiResponse,
) -> Result<SubmissionResult> {
    if response.status != StatusCode::CREATED.as_u16() {
        return Ok(SubmissionResult::rejected(descriptor, response));
    }

    let created: CreatedIssue = serde_json::from_str(&response.body)
        .map_err(|e| Error::ResponseShape(format!("creation reply is not valid JSON: {e}")))?;

    let number = created.number.ok_or_else(|| {
        Error::ResponseShape(format!(
            "creation reply for '{}' has no 'number' field",
            descriptor.title
        ))
    })?;

    Ok(SubmissionResult::created(descriptor, number, created.html_url))
}

/// Submit a single issue and report the outcome
pub async fn submit_issue(
    tracker: &dyn IssueTracker,
    descriptor: &IssueDescriptor,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionResult> {
    let response = tracker.create_issue(descriptor).await?;
    let result = classify_response(descriptor.clone(), &response)?;

    if result.succeeded {
        progress.on_issue_created(&result).await;
    } else {
        warn!(
            title = %descriptor.title,
            status = response.status,
            "issue rejected"
        );
        progress.on_issue_failed(&result).await;
    }

    Ok(result)
}

/// Submit every descriptor in order
///
/// Submissions are strictly sequential: each request completes before the
/// next one starts.
pub async fn run_batch(
    tracker: &dyn IssueTracker,
    descriptors: &[IssueDescriptor],
    progress: &dyn ProgressCallback,
) -> Result<BatchReport> {
    let config = tracker.config();
    info!(
        total = descriptors.len(),
        repo = %config.repo_spec(),
        "starting batch"
    );
    progress.on_batch_start(descriptors.len(), config).await;

    let mut results = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        results.push(submit_issue(tracker, descriptor, progress).await?);
    }

    let summary = RunSummary::from_results(&results);
    info!(
        total = summary.total,
        succeeded = summary.succeeded,
        "batch complete"
    );
    progress.on_batch_complete(&summary).await;

    Ok(BatchReport { results, summary })
}

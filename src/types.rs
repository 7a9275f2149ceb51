//! Core types for issue-batch

use serde::{Deserialize, Serialize};

/// A single issue to be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDescriptor {
    /// Issue title
    pub title: String,
    /// Issue body (markdown)
    pub body: String,
    /// Labels to apply, in order
    pub labels: Vec<String>,
}

/// Raw reply from the issue tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text, verbatim
    pub body: String,
}

/// Fields read from a successful creation reply
///
/// `number` is optional so that a reply missing it decodes cleanly and can
/// be reported as a shape error rather than a generic decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedIssue {
    /// Issue number assigned by the tracker
    pub number: Option<u64>,
    /// Web URL for the issue
    pub html_url: Option<String>,
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    /// The descriptor that was submitted
    pub descriptor: IssueDescriptor,
    /// Whether the tracker created the issue
    pub succeeded: bool,
    /// Issue number, present only on success
    pub assigned_number: Option<u64>,
    /// Web URL, present only on success when the tracker returned one
    pub html_url: Option<String>,
    /// `"<status> - <body>"`, present only on failure
    pub error_detail: Option<String>,
}

impl SubmissionResult {
    /// Result for an issue the tracker created
    pub const fn created(
        descriptor: IssueDescriptor,
        number: u64,
        html_url: Option<String>,
    ) -> Self {
        Self {
            descriptor,
            succeeded: true,
            assigned_number: Some(number),
            html_url,
            error_detail: None,
        }
    }

    /// Result for an issue the tracker rejected
    pub fn rejected(descriptor: IssueDescriptor, response: &ApiResponse) -> Self {
        Self {
            descriptor,
            succeeded: false,
            assigned_number: None,
            html_url: None,
            error_detail: Some(format!("{} - {}", response.status, response.body)),
        }
    }
}

/// Aggregate counts for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of descriptors loaded
    pub total: usize,
    /// Number of issues created
    pub succeeded: usize,
}

impl RunSummary {
    /// Fold a sequence of results into a summary
    pub fn from_results(results: &[SubmissionResult]) -> Self {
        Self {
            total: results.len(),
            succeeded: results.iter().filter(|r| r.succeeded).count(),
        }
    }

    /// Number of issues that were not created
    pub const fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    /// Whether every issue was created
    pub const fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

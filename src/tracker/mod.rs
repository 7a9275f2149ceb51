//! Issue tracker transport
//!
//! Abstracts the outbound create-issue call so the submission logic can run
//! against GitHub or a test double.

mod github;

pub use github::{ACCEPT_HEADER, GitHubIssues, USER_AGENT};

use crate::config::RepoConfig;
use crate::error::Result;
use crate::types::{ApiResponse, IssueDescriptor};
use async_trait::async_trait;

/// Transport for creating issues
///
/// Implementations return the raw status and body; classifying the reply is
/// left to the caller. Only network-level failures are errors here.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Send one create-issue request
    async fn create_issue(&self, descriptor: &IssueDescriptor) -> Result<ApiResponse>;

    /// Get the repository configuration
    fn config(&self) -> &RepoConfig;
}

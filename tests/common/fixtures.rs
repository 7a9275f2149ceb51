//! Test data factories for issue-batch types
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use issue_batch::config::RepoConfig;
use issue_batch::types::{ApiResponse, IssueDescriptor};

/// Create a descriptor with a body derived from the title
pub fn make_descriptor(title: &str) -> IssueDescriptor {
    IssueDescriptor {
        title: title.to_string(),
        body: format!("Body for {title}"),
        labels: vec!["enhancement".to_string()],
    }
}

/// Create a descriptor with explicit fields
pub fn make_descriptor_with(title: &str, body: &str, labels: &[&str]) -> IssueDescriptor {
    IssueDescriptor {
        title: title.to_string(),
        body: body.to_string(),
        labels: labels.iter().map(ToString::to_string).collect(),
    }
}

/// Create `count` descriptors titled `issue-1`, `issue-2`, ...
pub fn make_descriptors(count: usize) -> Vec<IssueDescriptor> {
    (1..=count)
        .map(|i| make_descriptor(&format!("issue-{i}")))
        .collect()
}

/// Create a test repository config
pub fn test_config() -> RepoConfig {
    RepoConfig::new("octo", "hello")
}

/// A `201 Created` reply carrying an issue number
pub fn created_response(number: u64) -> ApiResponse {
    ApiResponse {
        status: 201,
        body: format!(
            r#"{{"number": {number}, "html_url": "https://github.com/octo/hello/issues/{number}"}}"#
        ),
    }
}

/// A `422 Unprocessable Entity` validation reply
pub fn validation_failed_response() -> ApiResponse {
    ApiResponse {
        status: 422,
        body: r#"{"message":"Validation failed"}"#.to_string(),
    }
}

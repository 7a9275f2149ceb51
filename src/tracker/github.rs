//! GitHub issue tracker implementation

use crate::config::RepoConfig;
use crate::error::{Error, Result};
use crate::tracker::IssueTracker;
use crate::types::{ApiResponse, IssueDescriptor};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use tracing::debug;

/// Versioned media type requested from the API
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// User agent sent with every request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("issue-batch/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct CreateIssuePayload<'a> {
    title: &'a str,
    body: &'a str,
    labels: &'a [String],
}

/// GitHub issues service using reqwest
pub struct GitHubIssues {
    client: Client,
    token: String,
    config: RepoConfig,
}

impl GitHubIssues {
    /// Create a new GitHub issues service
    pub fn new(token: String, config: RepoConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            token,
            config,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.config.timeout.as_secs())
        } else {
            Error::Transport(err)
        }
    }
}

#[async_trait]
impl IssueTracker for GitHubIssues {
    async fn create_issue(&self, descriptor: &IssueDescriptor) -> Result<ApiResponse> {
        let url = self.config.issues_url();
        let payload = CreateIssuePayload {
            title: &descriptor.title,
            body: &descriptor.body,
            labels: &descriptor.labels,
        };

        debug!(%url, title = %descriptor.title, "creating issue");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, ACCEPT_HEADER)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        debug!(status, "create issue response");
        Ok(ApiResponse { status, body })
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}

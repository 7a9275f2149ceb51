//! Run configuration
//!
//! The target repository, API endpoint, input file and request timeout are
//! resolved once at startup and injected into the tracker.

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Repository owner used when `ISSUE_BATCH_REPO` is unset
pub const DEFAULT_OWNER: &str = "arrrrny";

/// Repository name used when `ISSUE_BATCH_REPO` is unset
pub const DEFAULT_REPO: &str = "zikzak_inappwebview";

/// Public GitHub API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Input file read from the working directory
pub const DEFAULT_INPUT_FILE: &str = "issues_to_create.json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Target repository and transport settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// API base URL, without trailing slash
    pub api_base: String,
    /// Issue descriptor file
    pub input_path: PathBuf,
    /// Per-request timeout
    pub timeout: Duration,
}

impl RepoConfig {
    /// Config for `owner/repo` on github.com with default settings
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the API base URL
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self> {
        self.api_base = normalize_api_base(api_base)?;
        Ok(self)
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve configuration from the process environment
    ///
    /// Reads `ISSUE_BATCH_REPO`, `ISSUE_BATCH_API_URL`, `GH_HOST`,
    /// `ISSUE_BATCH_FILE` and `ISSUE_BATCH_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("ISSUE_BATCH_REPO") {
            Some(spec) => {
                let (owner, repo) = parse_repo_spec(&spec)?;
                Self::new(owner, repo)
            }
            None => Self::new(DEFAULT_OWNER, DEFAULT_REPO),
        };

        // Explicit URL wins over an Enterprise host
        if let Some(url) = lookup("ISSUE_BATCH_API_URL") {
            config = config.with_api_base(&url)?;
        } else if let Some(host) = lookup("GH_HOST").filter(|h| h != "github.com") {
            config = config.with_api_base(&format!("https://{host}/api/v3"))?;
        }

        if let Some(path) = lookup("ISSUE_BATCH_FILE") {
            config.input_path = PathBuf::from(path);
        }

        if let Some(secs) = lookup("ISSUE_BATCH_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!("ISSUE_BATCH_TIMEOUT_SECS must be an integer, got '{secs}'"))
            })?;
            if secs == 0 {
                return Err(Error::Config(
                    "ISSUE_BATCH_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// `owner/repo` for display
    pub fn repo_spec(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Endpoint for creating issues
    pub fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_base,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repo)
        )
    }
}

/// Split `owner/repo` into its parts
pub fn parse_repo_spec(spec: &str) -> Result<(String, String)> {
    let invalid = || Error::Config(format!("expected repository as 'owner/repo', got '{spec}'"));

    let (owner, repo) = spec.trim().split_once('/').ok_or_else(invalid)?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(invalid());
    }

    Ok((owner.to_string(), repo.to_string()))
}

fn normalize_api_base(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| Error::Config(format!("invalid API URL '{raw}': {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "API URL must use http or https, got '{raw}'"
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

//! Create command - submit every issue in the input file

use crate::cli::progress::CliProgress;
use issue_batch::config::RepoConfig;
use issue_batch::error::Result;
use issue_batch::input::load_descriptors;
use issue_batch::submit::run_batch;
use issue_batch::tracker::GitHubIssues;
use issue_batch::types::RunSummary;

/// Print usage and token guidance
pub fn print_usage() {
    println!("Usage: issue-batch <github_token>");
    println!();
    println!("Get your token from: https://github.com/settings/tokens");
    println!("Required scopes: public_repo or repo");
}

/// Run the create command
///
/// The input file is loaded before any request is made, so a missing or
/// malformed file aborts the run without touching the network.
pub async fn run_create(token: &str) -> Result<RunSummary> {
    let config = RepoConfig::from_env()?;
    let descriptors = load_descriptors(&config.input_path)?;

    let tracker = GitHubIssues::new(token.to_string(), config)?;
    let report = run_batch(&tracker, &descriptors, &CliProgress).await?;

    Ok(report.summary)
}

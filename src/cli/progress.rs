//! CLI progress callback with styled output

use crate::cli::style::{Stream, Stylize, check, cross, hyperlink_url};
use anstream::println;
use async_trait::async_trait;
use issue_batch::config::RepoConfig;
use issue_batch::submit::ProgressCallback;
use issue_batch::types::{RunSummary, SubmissionResult};

/// CLI progress callback that prints to stdout
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_batch_start(&self, total: usize, config: &RepoConfig) {
        println!(
            "Creating {} issues for {}...",
            total.accent(),
            config.repo_spec().emphasis()
        );
        println!();
    }

    async fn on_issue_created(&self, result: &SubmissionResult) {
        let number = result
            .assigned_number
            .map(|n| format!("#{n}"))
            .unwrap_or_default();
        println!(
            "{} Created: {} - {}",
            check(),
            number.accent(),
            result.descriptor.title
        );
        if let Some(url) = &result.html_url {
            println!("    {}", hyperlink_url(Stream::Stdout, url).muted());
        }
    }

    async fn on_issue_failed(&self, result: &SubmissionResult) {
        println!(
            "{} Failed to create: {}",
            cross().for_stdout(),
            result.descriptor.title
        );
        println!(
            "   Error: {}",
            result.error_detail.as_deref().unwrap_or_default().error().for_stdout()
        );
    }

    async fn on_batch_complete(&self, summary: &RunSummary) {
        let counts = format!("{}/{}", summary.succeeded, summary.total);
        println!();
        if summary.all_succeeded() {
            println!("{} {} issues created", check(), counts.accent());
        } else {
            println!(
                "{} {} issues created",
                cross().for_stdout(),
                counts.warn().for_stdout()
            );
        }
    }
}

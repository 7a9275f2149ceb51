//! issue-batch - bulk-create GitHub issues
//!
//! CLI binary that reads `issues_to_create.json` and creates each entry as an
//! issue in the configured repository.

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "issue-batch")]
#[command(about = "Bulk-create GitHub issues from issues_to_create.json")]
#[command(version)]
#[command(after_help = "Get your token from: https://github.com/settings/tokens\n\
                        Required scopes: public_repo or repo")]
struct Cli {
    /// GitHub personal access token
    #[arg(allow_hyphen_values = true)]
    token: String,
}

/// Parse arguments, exiting with status 1 on anything but exactly one token
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            cli::print_usage();
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    // Logs go to stderr so stdout carries only the run report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args();
    init_tracing();

    // Exit status stays 0 when individual issues are rejected
    cli::run_create(&cli.token).await?;

    Ok(())
}

// src/main.rs
// =============================================================================
// Entry point of the top-starred CLI.
//
// What happens here:
// 1. Set up logging (tracing, to stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments and turn them into a Config
// 3. Fetch the top starred repositories with their top contributors
// 4. Print them as a table or JSON
// 5. Exit with 0 on success, 2 on any error
//
// Progress notices and logs go to stderr so that `--json` output on stdout
// can be piped straight into other tools.
// =============================================================================

mod aggregate;
mod cli;
mod config;
mod github;
mod report;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aggregate::Aggregator;
use cli::Cli;
use config::Config;
use github::{GitHubClient, ReqwestTransport};

#[tokio::main]
async fn main() {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("top_starred=info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    if config.token.is_none() {
        tracing::warn!("no GitHub token configured, requests are subject to anonymous rate limits");
    }

    let transport = ReqwestTransport::with_timeout(config.request_timeout)
        .context("failed to create HTTP client")?;
    let client = GitHubClient::new(config.api_url.clone(), config.token.clone(), Arc::new(transport));
    let aggregator = Aggregator::new(client, config.max_concurrent_lookups, config.lookup_timeout);

    eprintln!("⏳ Fetching the most-starred repositories on GitHub...");

    let repositories = match aggregator.fetch_top_repositories().await {
        Ok(repositories) => repositories,
        Err(e) => {
            // Details go to the log; the user only gets the generic notice
            tracing::error!(error = %e, status = ?e.status(), "fetching top repositories failed");
            anyhow::bail!(
                "we're experiencing technical difficulties reaching GitHub, please try again later"
            );
        }
    };

    let stdout = std::io::stdout();
    report::print_results(&mut stdout.lock(), &repositories, cli.json)?;
    Ok(())
}

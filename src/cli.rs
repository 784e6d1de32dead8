// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// There is a single command: fetch the top starred repositories and print
// them. All flags are optional and have sensible defaults.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "top-starred",
    version,
    about = "List GitHub's 100 most-starred repositories with their top contributors",
    long_about = "top-starred asks the GitHub search API for the 100 most-starred repositories, \
                  then looks up the top contributor of each one concurrently. \
                  A failed contributor lookup never fails the whole list."
)]
pub struct Cli {
    /// GitHub token sent as `Authorization: token <TOKEN>` on every request
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API (use https://<host>/api/v3 for Enterprise)
    #[arg(long, default_value = crate::github::DEFAULT_API_URL)]
    pub api_url: String,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Maximum number of contributor lookups in flight at once
    #[arg(long, default_value_t = crate::github::PAGE_SIZE)]
    pub max_concurrency: usize,

    /// Give up on a single contributor lookup after this many seconds
    #[arg(long, default_value_t = 10)]
    pub lookup_timeout_secs: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,
}

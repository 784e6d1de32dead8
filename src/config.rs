// src/config.rs
// =============================================================================
// Runtime configuration, built from the parsed command line.
//
// The CLI hands us raw strings and numbers; this is where they get
// validated (URL must parse, limits and timeouts must be non-zero).
// =============================================================================

use anyhow::{bail, Context, Result};
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API
    pub api_url: Url,
    /// Credential for the Authorization header, if any
    pub token: Option<String>,
    /// Cap on concurrent contributor lookups
    pub max_concurrent_lookups: usize,
    /// Deadline for one contributor lookup
    pub lookup_timeout: Duration,
    /// Timeout applied by the HTTP client to every request
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_url = Url::parse(&cli.api_url)
            .with_context(|| format!("invalid --api-url '{}'", cli.api_url))?;
        if api_url.cannot_be_a_base() {
            bail!("--api-url '{}' cannot be used as a base URL", cli.api_url);
        }

        if cli.max_concurrency == 0 {
            bail!("--max-concurrency must be at least 1");
        }
        if cli.lookup_timeout_secs == 0 || cli.request_timeout_secs == 0 {
            bail!("timeouts must be at least 1 second");
        }

        // An empty GITHUB_TOKEN is treated as no token at all
        let token = cli
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(Self {
            api_url,
            token,
            max_concurrent_lookups: cli.max_concurrency,
            lookup_timeout: Duration::from_secs(cli.lookup_timeout_secs),
            request_timeout: Duration::from_secs(cli.request_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Config> {
        let mut argv = vec!["top-starred"];
        argv.extend_from_slice(args);
        Config::from_cli(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults() {
        let config = parse(&["--token", ""]).unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
        assert_eq!(config.token, None);
        assert_eq!(config.max_concurrent_lookups, 100);
        assert_eq!(config.lookup_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn token_is_trimmed() {
        let config = parse(&["--token", "  abc  "]).unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["--api-url", "not a url"]).is_err());
        assert!(parse(&["--api-url", "mailto:me@example.com"]).is_err());
        assert!(parse(&["--max-concurrency", "0"]).is_err());
        assert!(parse(&["--lookup-timeout-secs", "0"]).is_err());
        assert!(parse(&["--request-timeout-secs", "0"]).is_err());
    }
}

// src/github/error.rs
// =============================================================================
// Errors surfaced by the GitHub search client.
//
// Two kinds of failure matter to callers:
// - Transport: no response at all, or a status other than 200
// - MalformedResponse: the body (or a URL inside it) isn't what we expect
//
// Rust concepts:
// - thiserror: derives Display and std::error::Error from attributes
// - From impls: let the ? operator convert lower-level errors for us
// =============================================================================

use thiserror::Error;

use super::transport::HttpError;

/// Failure of a GitHub API call whose result the caller depends on.
///
/// Only the repository search reports these. Contributor lookups absorb
/// every failure into `ContributorOutcome::NotFound`.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// No response arrived (`status` is `None`) or the status was not 200.
    #[error("{}", transport_message(.status, .message))]
    Transport { status: Option<u16>, message: String },

    /// The response body (or a URL inside it) did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GitHubError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Transport { status, .. } => *status,
            GitHubError::MalformedResponse(_) => None,
        }
    }
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("GitHub API returned HTTP {code}: {message}"),
        None => format!("GitHub API request failed: {message}"),
    }
}

impl From<HttpError> for GitHubError {
    fn from(error: HttpError) -> Self {
        GitHubError::Transport {
            status: None,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GitHubError {
    fn from(error: serde_json::Error) -> Self {
        GitHubError::MalformedResponse(error.to_string())
    }
}

// src/github/client.rs
// =============================================================================
// The GitHub API client shared by the search and contributor calls.
//
// Responsibilities:
// - Build endpoint URLs under a configurable base (api.github.com or an
//   Enterprise-style "https://host/api/v3" prefix)
// - Attach the same headers to every request (auth, user agent, accept)
// - Enforce the status policy: only HTTP 200 counts as success
//
// The actual endpoints live in search.rs and contributors.rs as further
// `impl GitHubClient` blocks.
//
// Rust concepts:
// - Arc<dyn Trait>: shared ownership of a trait object, so the client
//   doesn't care which transport it talks through
// - Builder-style methods that take `self` and return `Self`
// =============================================================================

use std::sync::Arc;

use url::Url;

use super::error::GitHubError;
use super::transport::{HttpRequest, HttpTransport};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("top-starred/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// Cheap to clone: the transport is shared behind an `Arc`.
#[derive(Clone)]
pub struct GitHubClient {
    base_url: Url,
    token: Option<String>,
    transport: Arc<dyn HttpTransport>,
}

impl GitHubClient {
    pub fn new(base_url: Url, token: Option<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url,
            token,
            transport,
        }
    }

    /// Appends `segments` to the base URL path, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, GitHubError> {
        let mut url = self.base_url.clone();
        // Errors only for URLs like "mailto:..." that have no path to extend
        url.path_segments_mut()
            .map_err(|_| {
                GitHubError::MalformedResponse(format!(
                    "cannot build an API URL from base {}",
                    self.base_url
                ))
            })?
            // Drop the trailing empty segment of ".../api/v3/" before appending
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, url: Url) -> HttpRequest {
        let request = HttpRequest::get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT);

        match &self.token {
            Some(token) => request.header("Authorization", format!("token {token}")),
            None => request,
        }
    }

    /// Sends a GET and returns the body of a 200 response.
    pub(crate) async fn get_ok(&self, url: Url) -> Result<Vec<u8>, GitHubError> {
        tracing::debug!(%url, "GET");
        let response = self.transport.get(self.request(url)).await?;

        if response.status != 200 {
            let message = String::from_utf8_lossy(&response.body)
                .chars()
                .take(200)
                .collect::<String>();
            return Err(GitHubError::Transport {
                status: Some(response.status),
                message,
            });
        }

        Ok(response.body)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why path_segments_mut instead of format!("{}/{}", base, path)?
//    - It percent-encodes each segment, so odd repository names stay safe
//    - It handles a base with or without a trailing slash the same way
//    - The returned guard writes the new path back when it goes out of scope
//
// 2. Why pub(crate)?
//    - endpoint() and get_ok() are shared by search.rs and contributors.rs
//    - They are plumbing, not part of the client's public API
//
// 3. Why String::from_utf8_lossy on error bodies?
//    - Error bodies are only used in messages
//    - Invalid UTF-8 becomes a replacement character instead of a new error
// -----------------------------------------------------------------------------

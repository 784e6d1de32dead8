// src/github/search.rs
// =============================================================================
// Fetches the 100 most-starred repositories on GitHub.
//
// One request to the search API:
//   GET /search/repositories?q=stars:>0&sort=stars&order=desc&per_page=100
//
// GitHub returns the items already sorted by stars (descending), so each
// item's rank is simply its position in the response.
//
// Any failure here is returned to the caller as-is. Nothing is retried.
//
// Rust concepts:
// - Iterator adapters: enumerate() gives us the rank for free
// - Collecting into Result<Vec<_>, _>: stops at the first error
// =============================================================================

use url::Url;

use super::client::GitHubClient;
use super::error::GitHubError;
use super::types::{RankedRepository, SearchResponse};

/// Number of repositories requested (GitHub's maximum page size).
pub const PAGE_SIZE: usize = 100;

impl GitHubClient {
    /// Returns the most-starred repositories tagged with rank 0, 1, 2, ...
    pub async fn fetch_top_starred(&self) -> Result<Vec<RankedRepository>, GitHubError> {
        let mut url = self.endpoint(&["search", "repositories"])?;
        url.query_pairs_mut()
            .append_pair("q", "stars:>0")
            .append_pair("sort", "stars")
            .append_pair("order", "desc")
            .append_pair("per_page", &PAGE_SIZE.to_string());

        let body = self.get_ok(url).await?;
        let response: SearchResponse = serde_json::from_slice(&body)?;

        let ranked = rank_items(response)?;
        tracing::info!(count = ranked.len(), "fetched top starred repositories");
        Ok(ranked)
    }
}

// Tags each item with its position and validates its link.
//
// A repository whose html_url doesn't parse makes the whole response
// malformed rather than panicking later on.
fn rank_items(response: SearchResponse) -> Result<Vec<RankedRepository>, GitHubError> {
    response
        .items
        .into_iter()
        .enumerate()
        .map(|(rank, item)| {
            let html_url = Url::parse(&item.html_url).map_err(|e| {
                GitHubError::MalformedResponse(format!(
                    "invalid html_url {:?} for {}: {}",
                    item.html_url, item.full_name, e
                ))
            })?;

            Ok(RankedRepository {
                rank,
                full_name: item.full_name,
                html_url,
            })
        })
        .collect()
}

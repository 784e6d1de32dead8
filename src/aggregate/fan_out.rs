// src/aggregate/fan_out.rs
// =============================================================================
// Fan-out / fan-in over the search results.
//
// After the search succeeds, every repository gets its own contributor
// lookup. The lookups run as one stream of futures with a concurrency cap
// (`buffer_unordered`), and `collect()` is the single join point: it only
// resolves once every lookup has produced a value.
//
// Each lookup is also wrapped in a deadline. A lookup that runs past it is
// dropped and replaced by the placeholder, so one slow repository can't hold
// up the whole list.
//
// Results come back in completion order, not launch order, hence the sort
// by rank at the end.
//
// Cancellation comes for free: if the caller drops the future returned by
// `fetch_top_repositories`, the stream and every in-flight request inside it
// are dropped with it.
//
// Rust concepts:
// - Streams: an async version of iterators
// - async move blocks: each lookup owns its repository
// =============================================================================

use futures::stream::{self, StreamExt};
use std::time::Duration;

use crate::github::{ContributorOutcome, GitHubClient, GitHubError, TopRepository};

pub struct Aggregator {
    client: GitHubClient,
    max_concurrent_lookups: usize,
    lookup_timeout: Duration,
}

impl Aggregator {
    pub fn new(client: GitHubClient, max_concurrent_lookups: usize, lookup_timeout: Duration) -> Self {
        Self {
            client,
            // buffer_unordered(0) would never poll anything
            max_concurrent_lookups: max_concurrent_lookups.max(1),
            lookup_timeout,
        }
    }

    /// The most-starred repositories with their top contributors, sorted by rank.
    ///
    /// Fails only when the search request fails. In that case no contributor
    /// lookups are started.
    pub async fn fetch_top_repositories(&self) -> Result<Vec<TopRepository>, GitHubError> {
        let ranked = self.client.fetch_top_starred().await?;
        let expected = ranked.len();

        let client = &self.client;
        let deadline = self.lookup_timeout;
        let lookups = ranked.into_iter().map(|repository| async move {
            let contributor = lookup_with_deadline(client, &repository.full_name, deadline).await;
            TopRepository::new(repository, contributor)
        });

        let mut combined: Vec<TopRepository> = stream::iter(lookups)
            .buffer_unordered(self.max_concurrent_lookups)
            .collect()
            .await;

        combined.sort_by_key(|repository| repository.rank);
        debug_assert_eq!(combined.len(), expected);

        tracing::info!(
            repositories = combined.len(),
            concurrency = self.max_concurrent_lookups,
            "combined repositories with top contributors"
        );
        Ok(combined)
    }
}

async fn lookup_with_deadline(
    client: &GitHubClient,
    full_name: &str,
    deadline: Duration,
) -> ContributorOutcome {
    match tokio::time::timeout(deadline, client.fetch_top_contributor(full_name)).await {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::warn!(
                repository = full_name,
                timeout = ?deadline,
                "top contributor lookup timed out"
            );
            ContributorOutcome::NotFound
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why buffer_unordered and not tokio::spawn?
//    - Spawned tasks outlive the function unless you join and abort them
//    - A stream of futures lives inside this function: when it returns (or
//      is dropped) nothing is left running
//    - It also borrows `self.client` directly, no 'static bound needed
//
// 2. What does tokio::time::timeout return?
//    - Ok(value) if the inner future finished in time
//    - Err(Elapsed) otherwise, and the inner future is dropped (cancelled)
//
// 3. Why sort_by_key after collecting?
//    - buffer_unordered yields results as they finish
//    - Sorting by rank restores the star order no matter who finished first
// -----------------------------------------------------------------------------

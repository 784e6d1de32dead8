// src/github/contributors.rs
// =============================================================================
// Looks up the top contributor of a single repository.
//
//   GET /repos/{owner}/{repo}/contributors?per_page=1
//
// GitHub orders contributors by commit count (descending), so asking for a
// single entry gives us the top one.
//
// This lookup never fails. Contributor data only decorates the list, so any
// problem (network error, non-200 status, bad JSON, empty list) becomes
// `ContributorOutcome::NotFound` right here, and the signature has no error
// channel at all.
// =============================================================================

use super::client::GitHubClient;
use super::error::GitHubError;
use super::types::{ApiContributor, ContributorOutcome};

impl GitHubClient {
    pub async fn fetch_top_contributor(&self, full_name: &str) -> ContributorOutcome {
        match self.try_fetch_top_contributor(full_name).await {
            Ok(Some(login)) => ContributorOutcome::Found(login),
            Ok(None) => {
                tracing::debug!(repository = full_name, "repository has no contributors");
                ContributorOutcome::NotFound
            }
            Err(e) => {
                tracing::warn!(repository = full_name, error = %e, "top contributor lookup failed");
                ContributorOutcome::NotFound
            }
        }
    }

    async fn try_fetch_top_contributor(
        &self,
        full_name: &str,
    ) -> Result<Option<String>, GitHubError> {
        let mut segments = vec!["repos"];
        segments.extend(full_name.split('/'));
        segments.push("contributors");

        let mut url = self.endpoint(&segments)?;
        url.query_pairs_mut().append_pair("per_page", "1");

        let body = self.get_ok(url).await?;
        let contributors: Vec<ApiContributor> = serde_json::from_slice(&body)?;

        Ok(contributors.into_iter().next().map(|c| c.login))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two functions?
//    - try_fetch_top_contributor uses ? and returns a Result like any other call
//    - fetch_top_contributor is the boundary where errors stop: its return
//      type has no error case, so callers can't forget to handle one
//
// 2. What does Option<String> mean in the inner function?
//    - Some(login): GitHub returned at least one contributor
//    - None: the request worked but the list was empty
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::client::DEFAULT_API_URL;
    use crate::github::transport::MockTransport;
    use std::sync::Arc;
    use url::Url;

    const PATH: &str = "/repos/rust-lang/rust/contributors";

    fn client(mock: &MockTransport) -> GitHubClient {
        GitHubClient::new(
            Url::parse(DEFAULT_API_URL).unwrap(),
            None,
            Arc::new(mock.clone()),
        )
    }

    #[tokio::test]
    async fn first_contributor_is_the_top_one() {
        let mock = MockTransport::new();
        mock.respond(PATH, 200, r#"[{"login":"bors","contributions":40000}]"#);

        let outcome = client(&mock).fetch_top_contributor("rust-lang/rust").await;
        assert_eq!(outcome, ContributorOutcome::Found("bors".to_string()));

        let requests = mock.requests();
        assert_eq!(requests[0].url.query(), Some("per_page=1"));
    }

    #[tokio::test]
    async fn empty_list_is_not_found() {
        let mock = MockTransport::new();
        mock.respond(PATH, 200, "[]");

        let outcome = client(&mock).fetch_top_contributor("rust-lang/rust").await;
        assert_eq!(outcome, ContributorOutcome::NotFound);
    }

    #[tokio::test]
    async fn failures_are_absorbed() {
        // 204 is what GitHub sends for an empty repository
        for (status, body) in [(404, "Not Found"), (204, ""), (200, "{not json")] {
            let mock = MockTransport::new();
            mock.respond(PATH, status, body);

            let outcome = client(&mock).fetch_top_contributor("rust-lang/rust").await;
            assert_eq!(outcome, ContributorOutcome::NotFound, "status {status}");
        }

        let mock = MockTransport::new();
        mock.fail(PATH, "connection reset");
        let outcome = client(&mock).fetch_top_contributor("rust-lang/rust").await;
        assert_eq!(outcome, ContributorOutcome::NotFound);
    }
}

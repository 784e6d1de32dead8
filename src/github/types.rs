// src/github/types.rs
// =============================================================================
// Data types for the GitHub API.
//
// Two groups:
// - Wire models: exactly the JSON fields we read from GitHub responses
//   (serde ignores everything else in the payload)
// - Domain types: what the rest of the app works with after decoding
//
// Rust concepts:
// - #[derive(Deserialize)]: serde generates the JSON decoding code
// - Enums with data: ContributorOutcome is either a login or nothing
// =============================================================================

use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder shown when a repository's top contributor can't be determined.
pub const NO_TOP_CONTRIBUTOR: &str = "No Top Contributor Found";

// Body of GET /search/repositories
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<ApiRepository>,
}

// One search hit
#[derive(Debug, Deserialize)]
pub struct ApiRepository {
    /// Owner and name, e.g. "octocat/hello-world"
    pub full_name: String,
    /// Web page of the repository, e.g. "https://github.com/octocat/hello-world"
    pub html_url: String,
}

// One entry of GET /repos/{owner}/{repo}/contributors
#[derive(Debug, Deserialize)]
pub struct ApiContributor {
    pub login: String,
}

/// A search hit tagged with its position in the star ranking (0 = most stars).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRepository {
    pub rank: usize,
    pub full_name: String,
    pub html_url: Url,
}

/// Result of a top-contributor lookup.
///
/// There is no error variant: a failed lookup and a repository without
/// contributors both end up as `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributorOutcome {
    Found(String),
    NotFound,
}

impl ContributorOutcome {
    pub fn into_login(self) -> String {
        match self {
            ContributorOutcome::Found(login) => login,
            ContributorOutcome::NotFound => NO_TOP_CONTRIBUTOR.to_string(),
        }
    }
}

/// A ranked repository merged with its top contributor.
///
/// This is what gets printed, either as a table row or as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopRepository {
    pub rank: usize,
    pub url: Url,
    pub name: String,
    pub top_contributor: String,
}

impl TopRepository {
    pub fn new(repository: RankedRepository, contributor: ContributorOutcome) -> Self {
        Self {
            rank: repository.rank,
            url: repository.html_url,
            name: repository.full_name,
            top_contributor: contributor.into_login(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_contributor_uses_placeholder() {
        assert_eq!(ContributorOutcome::NotFound.into_login(), NO_TOP_CONTRIBUTOR);
        assert_eq!(
            ContributorOutcome::Found("alice".to_string()).into_login(),
            "alice"
        );
    }

    #[test]
    fn search_response_ignores_extra_fields() {
        let body = r#"{
            "total_count": 1,
            "items": [{
                "full_name": "rust-lang/rust",
                "html_url": "https://github.com/rust-lang/rust",
                "stargazers_count": 100000
            }]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].full_name, "rust-lang/rust");
    }

    #[test]
    fn top_repository_serializes_with_snake_case_fields() {
        let repo = TopRepository::new(
            RankedRepository {
                rank: 0,
                full_name: "a/a".to_string(),
                html_url: Url::parse("https://x/a").unwrap(),
            },
            ContributorOutcome::Found("alice".to_string()),
        );
        let json = serde_json::to_value(&repo).unwrap();
        assert_eq!(json["rank"], 0);
        assert_eq!(json["name"], "a/a");
        assert_eq!(json["url"], "https://x/a");
        assert_eq!(json["top_contributor"], "alice");
    }
}

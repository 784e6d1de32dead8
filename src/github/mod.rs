// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Searching for the most-starred repositories (search.rs)
// - Looking up a repository's top contributor (contributors.rs)
// - The shared client, error and wire types
// - A transport trait so tests never touch the network (transport.rs)
// =============================================================================

mod client;
mod contributors;
mod error;
mod search;
mod transport;
mod types;

pub use client::{GitHubClient, DEFAULT_API_URL};
pub use error::GitHubError;
pub use search::PAGE_SIZE;
pub use transport::ReqwestTransport;
pub use types::{ContributorOutcome, TopRepository, NO_TOP_CONTRIBUTOR};

#[cfg(test)]
pub use transport::{HttpError, HttpRequest, HttpResponse, HttpTransport, MockTransport};

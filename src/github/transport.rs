// src/github/transport.rs
// =============================================================================
// The HTTP boundary for everything that talks to the GitHub API.
//
// All outbound requests go through the `HttpTransport` trait:
// - `ReqwestTransport` is the real implementation (reqwest + rustls)
// - `MockTransport` (tests only) answers from an in-memory route table,
//   so no test ever opens a socket
//
// The client code only ever sees status codes and raw body bytes. Decoding
// and status policy live in the search/contributor modules.
//
// Rust concepts:
// - Traits: one interface, several implementations
// - async-trait: async methods in a trait that can be used as `dyn`
// - #[cfg(test)]: code that only exists in test builds
// =============================================================================

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A GET request: target URL plus header pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// First header value matching `name`, ignoring case.
    #[cfg(test)]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status code and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Failures below the HTTP status level (no response was received).
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("http transport error: {0}")]
    Other(String),

    #[cfg(test)]
    #[error("no mock response registered for {0}")]
    NoMockResponse(String),
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

// Real transport backed by a shared reqwest client.
//
// reqwest::Client is reference counted internally, so cloning the transport
// shares one connection pool across every concurrent lookup.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Other(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.client.get(request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(categorize_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(categorize_error)?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

// Maps reqwest's error kinds onto our smaller set
fn categorize_error(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout(error.to_string())
    } else if error.is_connect() {
        HttpError::Connect(error.to_string())
    } else {
        HttpError::Other(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait here at all?
//    - GitHubClient holds an Arc<dyn HttpTransport>, not a reqwest::Client
//    - Production passes ReqwestTransport, tests pass MockTransport
//    - Tests can script slow, failing or missing routes without a server
//
// 2. Why #[async_trait]?
//    - It turns `async fn` into a method returning a boxed future
//    - Boxed futures have a known size, which `dyn HttpTransport` needs
//
// 3. Why does the mock drop its lock before sleeping?
//    - A std Mutex guard must not be held across .await
//    - Other concurrent lookups would otherwise block on it
// -----------------------------------------------------------------------------

// ---------- Test-only mock transport ----------

#[cfg(test)]
pub use mock::MockTransport;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_is_case_insensitive() {
        let url = Url::parse("https://api.github.com/search/repositories").unwrap();
        let request = HttpRequest::get(url).header("Authorization", "token abc");
        assert_eq!(request.header_value("authorization"), Some("token abc"));
        assert_eq!(request.header_value("user-agent"), None);
    }

    #[tokio::test]
    async fn mock_transport_records_requests_and_replays_routes() {
        let mock = MockTransport::new();
        mock.respond("/ping", 200, "pong");

        let url = Url::parse("https://example.test/ping?x=1").unwrap();
        let response = mock.get(HttpRequest::get(url)).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"pong");
        assert_eq!(mock.requests_to("/ping"), 1);
    }

    #[tokio::test]
    async fn mock_transport_rejects_unknown_paths() {
        let mock = MockTransport::new();
        let url = Url::parse("https://example.test/missing").unwrap();
        let result = mock.get(HttpRequest::get(url)).await;
        assert!(matches!(result, Err(HttpError::NoMockResponse(_))));
    }
}

//! The page-fetching capability and its HTTP implementation.
//!
//! Components that need a document take a [`PageFetcher`] rather than an HTTP
//! client directly, so tests can substitute canned pages and failures without
//! touching the network. The production implementation, [`HttpFetcher`], wraps
//! a shared `reqwest::Client` configured with a browser-like User-Agent and a
//! fixed request timeout.

use std::error::Error;
use std::time::Duration;

/// Browser-like User-Agent sent with every request. Several finance sites
/// serve reduced or empty markup to clients that identify as bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout. A request exceeding this is treated as a failure for
/// that URL, never retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A fetched document: status code plus raw body.
#[derive(Debug, Clone)]
pub struct Page {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

impl Page {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability for retrieving a document by URL.
///
/// Implementors return `Err` only for transport-level failures (connection
/// refused, timeout); a non-success HTTP status is returned as a [`Page`] and
/// left to the caller to interpret.
pub trait PageFetcher {
    /// Perform one GET request for `url`.
    async fn get(&self, url: &str) -> Result<Page, Box<dyn Error>>;
}

/// [`PageFetcher`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the browser User-Agent and fixed timeout applied
    /// to every request.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Page, Box<dyn Error>> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Page { status, body })
    }
}

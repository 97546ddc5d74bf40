//! Error types for the ddg-search crate.
//!
//! Every failure is terminal for a search: nothing here is retried. The
//! variants are kept distinct so callers can tell a transport failure from
//! a probable block by the search engine.

/// Errors that can occur while building, fetching, or parsing a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP transport failed (DNS, connect, TLS, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The search engine answered with something other than 200 OK.
    ///
    /// Treated as a coarse "probably rate-limited or banned" signal; no
    /// distinction is made between 403, 429 and 5xx.
    #[error("scraper received a non-200 status code ({status}) suggesting a ban")]
    Blocked {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The response body could not be parsed as an HTML document.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns `true` if this error signals a non-200 response.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Convenience type alias for ddg-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the endpoint, the result count, the request
//! timeout, the identity override and the selector set. It deserializes
//! from partial documents: missing fields take their defaults.

use crate::error::SearchError;
use crate::selectors::{CompiledSelectors, SelectorSet};
use serde::{Deserialize, Serialize};
use url::Url;

/// DuckDuckGo's JavaScript-free results page.
pub const DEFAULT_BASE_URL: &str = "https://duckduckgo.com/html/";

/// Number of results kept when no count is given.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Configuration for a single search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Endpoint the `q` parameter is appended to.
    pub base_url: String,
    /// Results kept after extraction. Zero is allowed and keeps nothing.
    pub max_results: usize,
    /// Whole-request timeout in seconds. `None` waits indefinitely.
    pub timeout_seconds: Option<u64>,
    /// Explicit User-Agent. If `None`, one is picked from the built-in list.
    pub user_agent: Option<String>,
    /// Resolve `//duckduckgo.com/l/?uddg=...` redirect links to their target.
    pub unwrap_redirects: bool,
    /// Markup layout of the results page.
    pub selectors: SelectorSet,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            timeout_seconds: None,
            user_agent: None,
            unwrap_redirects: false,
            selectors: SelectorSet::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration and returns the compiled selectors.
    ///
    /// Checks:
    /// - `base_url` is an absolute `http` or `https` URL
    /// - `timeout_seconds`, when set, is greater than 0
    /// - every selector parses
    ///
    /// A blank `user_agent` is not an error; it counts as no override.
    pub fn validate(&self) -> Result<CompiledSelectors, SearchError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("invalid base_url {:?}: {e}", self.base_url)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(SearchError::Config(format!(
                "base_url must use http or https, got {:?}",
                base.scheme()
            )));
        }
        if self.timeout_seconds == Some(0) {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        self.selectors.compile()
    }
}

//! Versioned CSS selector sets describing the results page layout.
//!
//! The search engine's markup changes without notice. Keeping the selectors
//! in a named, versioned value (instead of string literals inside the parser)
//! lets a config file or a test substitute a different layout.

use crate::error::SearchError;
use scraper::Selector;
use serde::{Deserialize, Serialize};

/// Version tag of the built-in DuckDuckGo HTML layout.
pub const DUCKDUCKGO_HTML_V1: &str = "duckduckgo-html-v1";

/// CSS selectors used to pick result records out of a results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSet {
    /// Identifier of the markup layout these selectors target.
    pub version: String,
    /// Matches one block per candidate result.
    pub container: String,
    /// Matches the link whose `href` attribute is the result URL.
    pub url: String,
    /// Matches the node whose text is the result title.
    pub title: String,
    /// Matches the node whose text is the result snippet.
    pub description: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self::duckduckgo_html_v1()
    }
}

impl SelectorSet {
    /// Selectors for `https://duckduckgo.com/html/`.
    pub fn duckduckgo_html_v1() -> Self {
        Self {
            version: DUCKDUCKGO_HTML_V1.to_string(),
            container: "div.result".to_string(),
            url: "a.result__url".to_string(),
            title: "a.result__a".to_string(),
            description: "div.result__snippet".to_string(),
        }
    }

    /// Parse every selector in the set.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] naming the first selector that does
    /// not parse.
    pub fn compile(&self) -> Result<CompiledSelectors, SearchError> {
        Ok(CompiledSelectors {
            version: self.version.clone(),
            container: parse_selector("container", &self.container)?,
            url: parse_selector("url", &self.url)?,
            title: parse_selector("title", &self.title)?,
            description: parse_selector("description", &self.description)?,
        })
    }
}

/// A [`SelectorSet`] with every selector parsed and ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub version: String,
    pub container: Selector,
    pub url: Selector,
    pub title: Selector,
    pub description: Selector,
}

fn parse_selector(field: &str, css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| {
        SearchError::Config(format!("invalid {field} selector {css:?}: {e:?}"))
    })
}

//! Core result type.

use serde::{Deserialize, Serialize};

/// A single ranked search result extracted from the results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 1-based position among emitted results. Containers without a link
    /// never consume a rank.
    pub rank: usize,
    /// Target link of the result, trimmed. Never empty.
    pub url: String,
    /// Display title; empty if the container had no title node.
    pub title: String,
    /// Snippet text; empty if the container had no snippet node.
    pub description: String,
}

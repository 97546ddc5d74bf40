//! # ddg-search
//!
//! Single-shot DuckDuckGo search by scraping the HTML results page. No API
//! keys and no pagination: one GET, one parse pass, one ranked list.
//!
//! ## Design
//!
//! - [`query`] escapes the search term into a results-page URL
//! - [`identity`] picks a browser User-Agent from a fixed list
//! - [`http`] performs the fetch and treats any non-200 as a block signal
//! - [`extract`] walks result containers with a versioned [`SelectorSet`]
//!   and assigns dense 1-based ranks to records that carry a link
//!
//! Nothing is retried. Search terms are logged only at trace level.

pub mod config;
pub mod error;
pub mod extract;
pub mod http;
pub mod identity;
pub mod query;
pub mod selectors;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use identity::IdentitySelector;
pub use selectors::SelectorSet;
pub use types::SearchResult;

/// Search for `term` and return at most `config.max_results` ranked results.
///
/// `identity` is sent as the User-Agent. Use [`IdentitySelector::resolve`]
/// with `config.user_agent` to honour an explicit override.
///
/// # Pipeline
///
/// 1. Validate the config and compile its selectors
/// 2. Build the query URL from the trimmed, escaped term
/// 3. GET the results page once
/// 4. Extract every linked result container, ranked from 1
/// 5. Truncate to `config.max_results`
///
/// # Errors
///
/// - [`SearchError::Config`] if the config is invalid
/// - [`SearchError::Request`] if the transport fails
/// - [`SearchError::Blocked`] if the response status is not 200
/// - [`SearchError::Parse`] if the body is empty
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> ddg_search::Result<()> {
/// let config = ddg_search::SearchConfig::default();
/// let identity = ddg_search::IdentitySelector::new().resolve(config.user_agent.as_deref());
/// let results = ddg_search::search("rust programming", &config, &identity).await?;
/// for result in &results {
///     println!("{}. {}: {}", result.rank, result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(term: &str, config: &SearchConfig, identity: &str) -> Result<Vec<SearchResult>> {
    let selectors = config.validate()?;

    let url = query::build_query_url(&config.base_url, term);
    tracing::trace!(term, %url, "searching");

    let client = http::build_client(config)?;
    let body = http::fetch(&client, &url, identity).await?;

    let results = extract::extract_results(&body, &selectors, 0, config.unwrap_redirects)?;
    let results = extract::truncate_results(results, config.max_results);
    tracing::debug!(count = results.len(), "search complete");
    Ok(results)
}

/// Search with the default configuration and a random User-Agent.
///
/// Convenience wrapper around [`search`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(term: &str) -> Result<Vec<SearchResult>> {
    let config = SearchConfig::default();
    let identity = IdentitySelector::new().next_identity();
    search(term, &config, identity).await
}

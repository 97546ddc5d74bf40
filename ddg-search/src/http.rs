//! HTTP client construction and the single results-page fetch.

use crate::config::SearchConfig;
use crate::error::SearchError;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use std::time::Duration;

/// Build a [`reqwest::Client`] for fetching the results page.
///
/// The client has:
/// - Brotli and gzip decompression
/// - At most 10 redirects
/// - A whole-request timeout only if the config sets one
///
/// The User-Agent is not baked into the client; [`fetch`] sets it per request.
///
/// # Errors
///
/// Returns [`SearchError::Request`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(10));
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Perform exactly one GET of `url` with `identity` as the User-Agent.
///
/// Returns the body text unchanged on 200 OK. Any other status is reported
/// as [`SearchError::Blocked`] without reading the body.
///
/// # Errors
///
/// - [`SearchError::Request`] if the transport fails or the body cannot be read
/// - [`SearchError::Blocked`] if the status is not exactly 200
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    identity: &str,
) -> Result<String, SearchError> {
    let response = client.get(url).header(USER_AGENT, identity).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!(status = status.as_u16(), "non-200 response, possibly blocked");
        return Err(SearchError::Blocked {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    tracing::trace!(bytes = body.len(), "results page received");
    Ok(body)
}

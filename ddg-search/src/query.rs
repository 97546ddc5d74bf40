//! Search URL construction.

use url::form_urlencoded;

/// Build the results-page URL for `term`.
///
/// The term is trimmed and form-urlencoded (spaces become `+`, everything
/// outside the unreserved set is percent-escaped), then appended to `base`
/// as the `q` parameter. An empty term yields an empty `q` value; rejecting
/// that is up to the caller.
pub fn build_query_url(base: &str, term: &str) -> String {
    let escaped: String = form_urlencoded::byte_serialize(term.trim().as_bytes()).collect();
    format!("{base}?q={escaped}")
}

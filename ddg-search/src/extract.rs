//! Result extraction from a results page.
//!
//! One pass over every result container in document order. A container
//! becomes a [`SearchResult`] only if its URL node carries a non-empty
//! `href`; everything else (ads, notices, layout blocks that happen to share
//! the container class) is dropped without consuming a rank.

use crate::error::SearchError;
use crate::selectors::CompiledSelectors;
use crate::types::SearchResult;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extract ranked results from `html`.
///
/// Ranks start at `offset + 1` and advance only when a record is emitted.
/// All matching containers are visited; limiting is left to
/// [`truncate_results`]. When `unwrap_redirects` is set, DuckDuckGo redirect
/// links are replaced with their target before the empty-URL check.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if `html` is empty or whitespace. Missing
/// title or snippet nodes inside a container are not errors.
pub fn extract_results(
    html: &str,
    selectors: &CompiledSelectors,
    offset: usize,
    unwrap_redirects: bool,
) -> Result<Vec<SearchResult>, SearchError> {
    if html.trim().is_empty() {
        return Err(SearchError::Parse("empty response body".into()));
    }

    let document = Html::parse_document(html);
    let mut results = Vec::new();
    let mut next_rank = offset + 1;
    let mut skipped = 0usize;

    for container in document.select(&selectors.container) {
        let href = container
            .select(&selectors.url)
            .next()
            .and_then(|el| el.value().attr("href"))
            .unwrap_or_default()
            .trim();

        let url = if unwrap_redirects {
            unwrap_redirect(href)
        } else {
            href.to_string()
        };

        if url.is_empty() {
            skipped += 1;
            continue;
        }

        results.push(SearchResult {
            rank: next_rank,
            url,
            title: first_text(container, &selectors.title),
            description: first_text(container, &selectors.description),
        });
        next_rank += 1;
    }

    tracing::debug!(
        count = results.len(),
        skipped,
        layout = %selectors.version,
        "results extracted"
    );
    Ok(results)
}

/// Keep the first `count` results.
pub fn truncate_results(mut results: Vec<SearchResult>, count: usize) -> Vec<SearchResult> {
    results.truncate(count);
    results
}

fn first_text(container: ElementRef<'_>, selector: &Selector) -> String {
    container
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Resolve a DuckDuckGo redirect wrapper to its target.
///
/// DDG wraps URLs like: `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`
/// Anything that is not such a wrapper is returned as-is.
fn unwrap_redirect(href: &str) -> String {
    let full_href = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };

    let Ok(parsed) = Url::parse(&full_href) else {
        return href.to_string();
    };

    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.trim().to_string())
            .unwrap_or_default()
    } else {
        href.to_string()
    }
}

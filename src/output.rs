//! Plain-text results file.
//!
//! Each result is a four-line block followed by a blank line:
//!
//! ```text
//! Rank: 1
//! Title: Cat - Wikipedia
//! URL: https://en.wikipedia.org/wiki/Cat
//! Description: The cat is a domestic species of small carnivorous mammal.
//!
//! ```

use crate::error::AppError;
use ddg_search::SearchResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// `<term>.txt`, using the term exactly as typed.
pub fn default_output_path(term: &str) -> PathBuf {
    PathBuf::from(format!("{term}.txt"))
}

/// Write every result block to `writer`, in the order given.
pub fn render_to<W: Write>(results: &[SearchResult], writer: &mut W) -> io::Result<()> {
    for result in results {
        write!(
            writer,
            "Rank: {}\nTitle: {}\nURL: {}\nDescription: {}\n\n",
            result.rank, result.title, result.url, result.description
        )?;
    }
    Ok(())
}

/// Render all results to a string.
pub fn render_results(results: &[SearchResult]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_to(results, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create (or truncate) `path` and write the results to it.
///
/// # Errors
///
/// Returns [`AppError::Write`] if the file cannot be created, written or
/// flushed. The handle is closed on every return path.
pub fn write_results(results: &[SearchResult], path: &Path) -> Result<(), AppError> {
    let write_err = |source: io::Error| AppError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    render_to(results, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::debug!(path = %path.display(), count = results.len(), "results written");
    Ok(())
}

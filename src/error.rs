//! Error types for the ddg-scrape runner.

use ddg_search::SearchError;
use std::path::PathBuf;

/// Top-level error type for a scrape run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The search term was missing or blank.
    #[error("please provide a search term using the --search or -s flag")]
    MissingSearchTerm,

    /// Building, fetching, or parsing the search failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The results file could not be created or written.
    #[error("failed to write results to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file or option error.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;

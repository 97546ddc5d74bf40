//! One scrape run: resolve options, search, write the results file.
//!
//! Split in two steps so the caller can report the chosen User-Agent before
//! any network traffic happens: [`RunPlan::prepare`] settles every input,
//! then [`RunPlan::execute`] fetches and writes.

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::output;
use ddg_search::{IdentitySelector, SearchConfig};
use std::path::PathBuf;

/// Inputs of a run, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Search term; required and not blank.
    pub term: Option<String>,
    /// User-Agent override.
    pub user_agent: Option<String>,
    /// Output file. Defaults to `<term>.txt` in the configured directory.
    pub output: Option<PathBuf>,
    /// Number of results to keep. Defaults to the config value.
    pub count: Option<usize>,
    /// Request timeout in seconds. Defaults to the config value.
    pub timeout_seconds: Option<u64>,
    /// File configuration the options are layered over.
    pub config: AppConfig,
}

/// A fully resolved run, ready to execute.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub term: String,
    pub identity: String,
    pub output_path: PathBuf,
    pub search: SearchConfig,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub identity: String,
    pub output_path: PathBuf,
    pub results_written: usize,
}

impl RunPlan {
    /// Layer `options` over their config and pick the identity.
    ///
    /// Command-line values win over the config file.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingSearchTerm`] if the term is absent or blank
    /// - [`AppError::Search`] wrapping a config error if the merged search
    ///   settings are invalid
    pub fn prepare(options: RunOptions, identities: &mut IdentitySelector) -> Result<Self> {
        let term = match options.term {
            Some(term) if !term.trim().is_empty() => term,
            _ => return Err(AppError::MissingSearchTerm),
        };

        let mut search = options.config.search;
        if let Some(ua) = options.user_agent.filter(|ua| !ua.trim().is_empty()) {
            search.user_agent = Some(ua);
        }
        // A blank override means "not supplied".
        search.user_agent = search.user_agent.filter(|ua| !ua.trim().is_empty());
        if let Some(count) = options.count {
            search.max_results = count;
        }
        if let Some(secs) = options.timeout_seconds {
            search.timeout_seconds = Some(secs);
        }
        search.validate()?;

        let identity = identities.resolve(search.user_agent.as_deref());

        let output_path = match options.output {
            Some(path) => path,
            None => {
                let file = output::default_output_path(&term);
                match options.config.output.directory {
                    Some(dir) => dir.join(file),
                    None => file,
                }
            }
        };

        Ok(Self {
            term,
            identity,
            output_path,
            search,
        })
    }

    /// Search, then write the results file.
    ///
    /// The output file is only created once the search has succeeded, so a
    /// failed fetch or parse leaves nothing behind.
    ///
    /// # Errors
    ///
    /// - [`AppError::Search`] if the fetch or parse fails
    /// - [`AppError::Write`] if the results file cannot be written
    pub async fn execute(self) -> Result<RunSummary> {
        tracing::debug!(count = self.search.max_results, "starting search");

        let results = ddg_search::search(&self.term, &self.search, &self.identity).await?;
        output::write_results(&results, &self.output_path)?;

        tracing::debug!(
            path = %self.output_path.display(),
            results = results.len(),
            "results saved"
        );
        Ok(RunSummary {
            identity: self.identity,
            output_path: self.output_path,
            results_written: results.len(),
        })
    }
}

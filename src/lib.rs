//! # ddg-scrape
//!
//! Runs one DuckDuckGo search and saves the ranked results to a text file.
//! The search itself lives in the `ddg-search` crate; this crate layers the
//! config file, the command-line options and the output file on top.

pub mod config;
pub mod error;
pub mod output;
pub mod runner;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use runner::{RunOptions, RunPlan, RunSummary};

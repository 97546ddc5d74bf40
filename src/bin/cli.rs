//! CLI binary for ddg-scrape.

use clap::Parser;
use ddg_scrape::{AppConfig, RunOptions, RunPlan};
use ddg_search::IdentitySelector;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scrape one page of DuckDuckGo results into a ranked text file.
#[derive(Parser)]
#[command(name = "ddg-scrape", version, about)]
struct Cli {
    /// Search term.
    #[arg(short, long)]
    search: Option<String>,

    /// User-Agent to send instead of a random browser identity.
    #[arg(short, long)]
    user_agent: Option<String>,

    /// Output file name [default: <search term>.txt].
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of search results to keep [default: 10].
    #[arg(short, long)]
    count: Option<usize>,

    /// Request timeout in seconds [default: none].
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the user-facing messages.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ddg_scrape=warn,ddg_search=warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    let options = RunOptions {
        term: cli.search,
        user_agent: cli.user_agent,
        output: cli.output,
        count: cli.count,
        timeout_seconds: cli.timeout,
        config,
    };

    let plan = RunPlan::prepare(options, &mut IdentitySelector::new())?;
    println!("Using User-Agent: {}", plan.identity);

    let summary = plan.execute().await?;
    println!("Results saved to {}", summary.output_path.display());

    Ok(())
}

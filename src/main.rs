//! Ngo-Scout main entry point
//!
//! Command-line interface for the Ngo-Scout directory scraper.

use anyhow::Context;
use clap::Parser;
use ngo_scout::config::load_config;
use ngo_scout::crawler::run;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ngo-Scout: a polite NGO directory scraper
///
/// Fetches one directory section listing, discovers profile links, and
/// extracts contact details from the first few profiles into a
/// spreadsheet, respecting robots.txt.
#[derive(Parser, Debug)]
#[command(name = "ngo-scout")]
#[command(version = "1.0.0")]
#[command(about = "A polite NGO directory scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if let Ok(listing) = config.site.listing_url() {
        tracing::info!(
            "Scraping up to {} profiles from {}",
            config.crawler.max_profiles,
            listing
        );
    }

    let summary = run(&config).await.context("scrape run failed")?;

    tracing::info!(
        "Done: {} links discovered, {} profiles scraped",
        summary.links_discovered,
        summary.records.len()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ngo_scout=info,warn"),
            1 => EnvFilter::new("ngo_scout=debug,info"),
            2 => EnvFilter::new("ngo_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

//! Sequential scrape driver
//!
//! Runs the whole pipeline: collect profile links from the listing page,
//! fetch the first few profiles through the robots gate with a fixed
//! pause between requests, extract a record from each, and hand the batch
//! to the output writer.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::crawler::links::collect_profile_links;
use crate::extract::{extract_profile, ProfileRecord};
use crate::output;
use crate::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Outcome of one scrape run
#[derive(Debug)]
pub struct RunSummary {
    /// Profile links discovered on the listing page
    pub links_discovered: usize,
    /// Records extracted from successfully fetched profiles, in fetch order
    pub records: Vec<ProfileRecord>,
    /// Path of the written spreadsheet, if any records were produced
    pub output_path: Option<PathBuf>,
}

/// Runs a complete scrape as described by `config`.
///
/// Fetch failures on individual profiles are logged and skipped without
/// aborting the run; records gathered before a failure are preserved.
/// Only client construction and output I/O surface as errors.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let client = build_http_client(&config.user_agent, &config.crawler)?;
    let user_agent = config.user_agent.header_value();

    let links = collect_profile_links(&client, config).await;
    if links.is_empty() {
        info!("No profile links found; nothing to scrape.");
        return Ok(RunSummary {
            links_discovered: 0,
            records: Vec::new(),
            output_path: None,
        });
    }

    let take = links.len().min(config.crawler.max_profiles);
    info!("Extracting details of the first {} profiles...", take);

    let mut records = Vec::new();
    for (index, link) in links.iter().take(take).enumerate() {
        info!("[{}/{}] Fetching: {}", index + 1, take, link);
        match fetch_page(&client, &user_agent, link).await {
            FetchResult::Success { final_url, body } => {
                records.push(extract_profile(&body, &final_url));
            }
            FetchResult::Disallowed | FetchResult::Failed { .. } => {
                warn!("  -> skipped {}", link);
            }
        }

        // Serial rate limit between requests, success or not
        if index + 1 < take {
            tokio::time::sleep(Duration::from_millis(config.crawler.request_pause_ms)).await;
        }
    }

    if records.is_empty() {
        info!("No profiles scraped; not writing an output file.");
        return Ok(RunSummary {
            links_discovered: links.len(),
            records,
            output_path: None,
        });
    }

    let path = PathBuf::from(&config.output.spreadsheet_path);
    output::write_spreadsheet(&records, &path)?;
    info!("Saved {} records to {}", records.len(), path.display());
    print!("{}", output::render_table(&records));

    Ok(RunSummary {
        links_discovered: links.len(),
        records,
        output_path: Some(path),
    })
}

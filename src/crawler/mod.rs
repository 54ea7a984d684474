//! Scrape pipeline: fetch gate, link discovery, and the driver loop
//!
//! The pipeline runs strictly sequentially. The fetch gate resolves robots
//! permission and performs at most one GET per call; the link collector
//! turns one listing page into a sorted set of profile URLs; the driver
//! walks the first few of those through the extractor and hands the batch
//! to the output writer.

mod driver;
mod fetcher;
mod links;

pub use driver::{run, RunSummary};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use links::{collect_profile_links, filter_profile_links};

//! HTTP fetch gate
//!
//! All page fetches go through [`fetch_page`], which resolves robots
//! permission first and performs at most one GET per call. Policy denials
//! and network failures are absorbed into [`FetchResult`] variants plus a
//! logged notice; they never surface as errors to the caller.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::robots;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Result of a gated fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// Decoded page body
        body: String,
    },

    /// robots.txt forbids the URL, or the policy could not be checked
    Disallowed,

    /// Network or status error on an allowed URL
    Failed {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared across the whole run
///
/// The client carries the configured identity header and per-request
/// timeout; it is constructed once and reused for every request the run
/// makes, robots.txt included.
///
/// # Arguments
///
/// * `agent` - The user agent configuration
/// * `crawler` - Crawl pacing configuration (timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(agent.header_value())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL through the robots gate.
///
/// # Request Flow
///
/// 1. Retrieve and evaluate the origin's robots.txt for `url`; any failure
///    during the check counts as a denial (fail closed)
/// 2. If denied, return [`FetchResult::Disallowed`] without touching `url`
/// 3. Otherwise issue a single GET; a non-success status or transport
///    error is terminal for this call
///
/// No retries; one attempt per URL per call.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `user_agent` - The full user-agent string, for robots matching
/// * `url` - The URL to fetch
///
/// # Returns
///
/// A FetchResult indicating success or the kind of refusal
pub async fn fetch_page(client: &Client, user_agent: &str, url: &str) -> FetchResult {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("[error] not a fetchable URL {}: {}", url, e);
            return FetchResult::Failed {
                error: e.to_string(),
            };
        }
    };

    if !robots::is_fetch_allowed(client, user_agent, &parsed).await {
        warn!("[robots] skipping (disallowed): {}", url);
        return FetchResult::Disallowed;
    }

    match client.get(parsed).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                warn!("[error] failed to fetch {}: HTTP {}", url, status);
                return FetchResult::Failed {
                    error: format!("HTTP {}", status),
                };
            }

            // Capture the post-redirect location before consuming the body
            let final_url = response.url().to_string();
            match response.text().await {
                Ok(body) => FetchResult::Success { final_url, body },
                Err(e) => {
                    warn!("[error] failed to read body of {}: {}", url, e);
                    FetchResult::Failed {
                        error: e.to_string(),
                    }
                }
            }
        }
        Err(e) => {
            warn!("[error] failed to fetch {}: {}", url, e);
            FetchResult::Failed {
                error: e.to_string(),
            }
        }
    }
}

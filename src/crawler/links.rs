//! Profile link discovery on the section listing page

use crate::config::Config;
use crate::crawler::fetcher::{fetch_page, FetchResult};
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use tracing::{info, warn};
use url::Url;

/// Fetches the configured listing page and returns the profile links
/// discovered on it, deduplicated and sorted.
///
/// Returns an empty list when the listing page cannot be fetched; the
/// caller decides whether that ends the run.
pub async fn collect_profile_links(client: &Client, config: &Config) -> Vec<String> {
    let listing_url = match config.site.listing_url() {
        Ok(url) => url,
        Err(e) => {
            warn!("[error] invalid listing URL: {}", e);
            return Vec::new();
        }
    };
    info!("Scraping section listing: {}", listing_url);

    let user_agent = config.user_agent.header_value();
    let body = match fetch_page(client, &user_agent, listing_url.as_str()).await {
        FetchResult::Success { body, .. } => body,
        FetchResult::Disallowed | FetchResult::Failed { .. } => {
            warn!("Could not fetch listing page {}", listing_url);
            return Vec::new();
        }
    };

    let base = match config.site.base() {
        Ok(base) => base,
        Err(e) => {
            warn!("[error] invalid base URL: {}", e);
            return Vec::new();
        }
    };

    let links = filter_profile_links(&body, &base, &config.site.profile_path_prefix);
    info!("Found {} profile links", links.len());
    links
}

/// Extracts, normalizes, filters, and orders profile links from
/// listing-page HTML.
///
/// Hrefs with a leading `/` are joined onto the base origin; anything
/// else is kept verbatim. A candidate qualifies when it contains the
/// profile path prefix followed by at least one slug character
/// (lowercase letter, digit, or hyphen). The result is deduplicated and
/// lexicographically sorted, so identical input always yields the
/// identical link list.
pub fn filter_profile_links(html: &str, base: &Url, profile_prefix: &str) -> Vec<String> {
    let pattern = match Regex::new(&format!("{}[-a-z0-9]+", regex::escape(profile_prefix))) {
        Ok(pattern) => pattern,
        Err(_) => return Vec::new(),
    };

    let document = Html::parse_document(html);
    let mut links = BTreeSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let href = href.trim();
            if href.is_empty() {
                continue;
            }

            let candidate = if href.starts_with('/') {
                match base.join(href) {
                    Ok(url) => url.to_string(),
                    Err(_) => continue,
                }
            } else {
                href.to_string()
            };

            if pattern.is_match(&candidate) {
                links.insert(candidate);
            }
        }
    }

    links.into_iter().collect()
}

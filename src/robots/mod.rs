//! Robots.txt handling module
//!
//! Every page fetch resolves its origin's robots.txt first. The check
//! fails closed: a policy document that cannot be retrieved or parsed
//! disallows the fetch, rather than falling back to allow-all the way
//! general-purpose robots libraries do. The one carve-out is a site that
//! publishes no robots.txt at all (a plain 4xx other than 401/403), which
//! allows everything.

mod parser;

pub use parser::ParsedRobots;

use reqwest::{Client, StatusCode};
use url::Url;

/// Checks whether the given identity may fetch `url`.
///
/// Derives `{scheme}://{host}/robots.txt` from the target URL, retrieves
/// it with the shared client, and evaluates the exact target URL against
/// the parsed rules.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `user_agent` - The full user-agent string to match against policy groups
/// * `url` - The URL the caller wants to fetch
///
/// # Returns
///
/// * `true` - The policy permits the fetch
/// * `false` - The policy forbids it, or the policy could not be checked
pub async fn is_fetch_allowed(client: &Client, user_agent: &str, url: &Url) -> bool {
    let Ok(robots_url) = url.join("/robots.txt") else {
        return false;
    };

    let response = match client.get(robots_url).send().await {
        Ok(response) => response,
        Err(_) => return false,
    };

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return false;
    }
    if status.is_client_error() {
        // No policy published for this origin
        return true;
    }
    if !status.is_success() {
        return false;
    }

    match response.text().await {
        Ok(body) => ParsedRobots::from_content(&body).is_allowed(url.as_str(), user_agent),
        Err(_) => false,
    }
}

use serde::Deserialize;
use url::Url;

/// Main configuration structure for Ngo-Scout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Target directory site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base origin of the directory site (e.g., "https://ngosindia.org")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the section listing page, relative to the base origin
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Path prefix identifying profile pages within the section
    #[serde(rename = "profile-path-prefix")]
    pub profile_path_prefix: String,
}

/// Crawl pacing and bounds
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of profile pages taken from the front of the sorted link list
    #[serde(rename = "max-profiles")]
    pub max_profiles: usize,

    /// Pause between successive profile fetches (milliseconds)
    #[serde(rename = "request-pause-ms")]
    pub request_pause_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the scraper
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the spreadsheet file written at the end of a run
    #[serde(rename = "spreadsheet-path")]
    pub spreadsheet_path: String,
}

impl SiteConfig {
    /// Parses the configured base origin
    pub fn base(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    /// Absolute URL of the section listing page
    pub fn listing_url(&self) -> Result<Url, url::ParseError> {
        self.base()?.join(&self.listing_path)
    }
}

impl UserAgentConfig {
    /// The identity sent in the User-Agent header and matched against robots.txt
    pub fn header_value(&self) -> String {
        format!(
            "Mozilla/5.0 (compatible; {}/{})",
            self.crawler_name, self.crawler_version
        )
    }
}

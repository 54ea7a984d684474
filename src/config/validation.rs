use crate::config::types::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", config.base_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url must use an http(s) scheme, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' has no host",
            config.base_url
        )));
    }

    if config.listing_path.is_empty() {
        return Err(ConfigError::Validation(
            "listing_path cannot be empty".to_string(),
        ));
    }

    if config.profile_path_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "profile_path_prefix cannot be empty".to_string(),
        ));
    }

    // The prefix is spliced into the link-filter regex; keep it to plain
    // slug characters so it never changes the pattern's meaning.
    if !config
        .profile_path_prefix
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '/')
    {
        return Err(ConfigError::Validation(format!(
            "profile_path_prefix must contain only lowercase letters, digits, hyphens and slashes, got '{}'",
            config.profile_path_prefix
        )));
    }

    Ok(())
}

/// Validates crawl pacing configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_profiles < 1 {
        return Err(ConfigError::Validation(format!(
            "max_profiles must be >= 1, got {}",
            config.max_profiles
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    // request_pause_ms of 0 is allowed; tests run without a pause
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.spreadsheet_path.is_empty() {
        return Err(ConfigError::Validation(
            "spreadsheet_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

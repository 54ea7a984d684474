//! Ngo-Scout: a polite NGO directory scraper
//!
//! This crate fetches one directory section listing, discovers links to
//! organization profile pages within it, and extracts structured contact
//! details from the first few profiles, respecting robots.txt.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod robots;

use thiserror::Error;

/// Main error type for Ngo-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Ngo-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run, FetchResult, RunSummary};
pub use extract::{extract_profile, ProfileRecord};

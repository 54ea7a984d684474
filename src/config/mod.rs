//! Configuration loading and validation
//!
//! The scraper is driven entirely by a TOML configuration file: target
//! site, crawl pacing, user-agent identity, and output location. Nothing
//! is hardcoded in the pipeline itself, which keeps the driver testable
//! against injected fixtures.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};
pub use validation::validate;

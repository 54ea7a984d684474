//! Robots.txt parser implementation
//!
//! This module provides a thin wrapper around the robotstxt crate's
//! matcher. Fetch-failure policy lives in the parent module; this type
//! only answers questions about content it was given.

use robotstxt::DefaultMatcher;

/// Parsed robots.txt data
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    /// Raw robots.txt content (empty content allows everything)
    content: String,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    ///
    /// # Arguments
    ///
    /// * `content` - The raw robots.txt file content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to check
    /// * `user_agent` - The user agent string
    ///
    /// # Returns
    ///
    /// * `true` - If the URL is allowed
    /// * `false` - If the URL is disallowed
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.content.is_empty() {
            // An empty robots.txt places no restrictions
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_robots_txt_allows_all() {
        let robots = ParsedRobots::from_content("");
        assert!(robots.is_allowed("https://example.com/any/path", "TestBot"));
    }

    #[test]
    fn test_parse_disallow_all() {
        let content = "User-agent: *\nDisallow: /";
        let robots = ParsedRobots::from_content(content);
        assert!(!robots.is_allowed("https://example.com/", "TestBot"));
        assert!(!robots.is_allowed("https://example.com/page", "TestBot"));
    }

    #[test]
    fn test_parse_disallow_specific() {
        let content = "User-agent: *\nDisallow: /admin";
        let robots = ParsedRobots::from_content(content);
        assert!(robots.is_allowed("https://example.com/", "TestBot"));
        assert!(robots.is_allowed("https://example.com/page", "TestBot"));
        assert!(!robots.is_allowed("https://example.com/admin", "TestBot"));
        assert!(!robots.is_allowed("https://example.com/admin/users", "TestBot"));
    }

    #[test]
    fn test_parse_allow_and_disallow() {
        let content = "User-agent: *\nDisallow: /private\nAllow: /private/public";
        let robots = ParsedRobots::from_content(content);
        assert!(robots.is_allowed("https://example.com/", "TestBot"));
        assert!(!robots.is_allowed("https://example.com/private", "TestBot"));
        assert!(robots.is_allowed("https://example.com/private/public", "TestBot"));
    }

    #[test]
    fn test_parse_specific_user_agent() {
        let content = "User-agent: BadBot\nDisallow: /\n\nUser-agent: *\nAllow: /";
        let robots = ParsedRobots::from_content(content);
        assert!(robots.is_allowed("https://example.com/page", "GoodBot"));
        assert!(!robots.is_allowed("https://example.com/page", "BadBot"));
    }

    #[test]
    fn test_full_browser_style_agent_matches_token() {
        let content = "User-agent: RajasthanScraper\nDisallow: /closed";
        let robots = ParsedRobots::from_content(content);
        let agent = "Mozilla/5.0 (compatible; RajasthanScraper/1.0)";
        assert!(robots.is_allowed("https://example.com/open", agent));
    }

    #[test]
    fn test_invalid_robots_txt_places_no_restrictions() {
        let content = "This is not valid robots.txt {{{";
        let robots = ParsedRobots::from_content(content);
        assert!(robots.is_allowed("https://example.com/any/path", "TestBot"));
    }
}

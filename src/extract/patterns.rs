//! Email and phone pattern matching over flattened page text

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

// Optional international prefix, optional parenthesized area code, then a
// 5-10 digit run, with single space/hyphen separators between groups.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+?\d{1,3}[\s-]?)?(?:\(?\d{2,4}\)?[\s-]?)?\d{5,10}").unwrap());

/// Minimum digit count for a phone candidate to be kept
const MIN_PHONE_DIGITS: usize = 6;

/// Finds all email addresses in the text, deduplicated in first-seen order
pub fn find_emails(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|email| seen.insert(email.clone()))
        .collect()
}

/// Finds all phone-number candidates in the text, deduplicated in
/// first-seen order.
///
/// Candidates with fewer than six digit characters after stripping
/// separators are dropped. The pattern is deliberately permissive and
/// admits digit runs that are not phone numbers; directory pages bury
/// numbers in inconsistent formats and recall is preferred over precision
/// here.
pub fn find_phones(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|candidate| {
            candidate.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
        })
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}

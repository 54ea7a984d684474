//! Ordered candidate rules for the scalar profile fields
//!
//! Each field maps to a fixed slice of candidates tried in order; the
//! first one producing a non-empty value wins. Keeping the
//! first-match-with-fallback policy in data makes every rule testable on
//! its own.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

/// A single extraction candidate
pub(crate) enum Candidate {
    /// Whitespace-collapsed text of the first element matching a CSS selector
    ElementText(&'static str),
    /// Text of the document's `<title>`
    DocumentTitle,
    /// First capture group of a regex run over the flattened document text
    LabelledCapture(&'static Lazy<Regex>),
    /// `href` of the first anchor whose visible text matches a regex
    AnchorTarget(&'static Lazy<Regex>),
}

static CONTACT_PERSON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Contact Person[:\s-]+([^\n<]{2,200})").unwrap());
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Add\.?[:\s-]+([^\n]{5,250})").unwrap());
static PURPOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Purpose[:\s-]+([^\n]{5,500})").unwrap());
static AIMS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Aims/Objectives/Mission[:\s-]+([^\n]{5,500})").unwrap());
static WEBSITE_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Website").unwrap());
static WEBSITE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Website[:\s-]+(https?://\S+)").unwrap());

pub(crate) static NAME_RULES: &[Candidate] =
    &[Candidate::ElementText("h1"), Candidate::DocumentTitle];

pub(crate) static CONTACT_PERSON_RULES: &[Candidate] =
    &[Candidate::LabelledCapture(&CONTACT_PERSON_RE)];

pub(crate) static ADDRESS_RULES: &[Candidate] = &[
    Candidate::LabelledCapture(&ADDRESS_RE),
    Candidate::ElementText("address"),
];

pub(crate) static PURPOSE_RULES: &[Candidate] = &[
    Candidate::LabelledCapture(&PURPOSE_RE),
    Candidate::LabelledCapture(&AIMS_RE),
];

pub(crate) static WEBSITE_RULES: &[Candidate] = &[
    Candidate::AnchorTarget(&WEBSITE_LABEL_RE),
    Candidate::LabelledCapture(&WEBSITE_URL_RE),
];

/// Applies candidates in order, returning the first non-empty value
pub(crate) fn apply(candidates: &[Candidate], document: &Html, text: &str) -> String {
    for candidate in candidates {
        let value = match candidate {
            Candidate::ElementText(selector) => element_text(document, selector),
            Candidate::DocumentTitle => element_text(document, "title"),
            Candidate::LabelledCapture(re) => labelled_capture(re, text),
            Candidate::AnchorTarget(re) => anchor_target(document, re),
        };
        if !value.is_empty() {
            return value;
        }
    }
    String::new()
}

fn element_text(document: &Html, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|element| {
            element
                .text()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

fn labelled_capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn anchor_target(document: &Html, label_re: &Regex) -> String {
    let Ok(selector) = Selector::parse("a[href]") else {
        return String::new();
    };
    for element in document.select(&selector) {
        let label = element.text().collect::<String>();
        if label_re.is_match(label.trim()) {
            if let Some(href) = element.value().attr("href") {
                return href.trim().to_string();
            }
        }
    }
    String::new()
}

//! Profile field extraction
//!
//! Extraction is heuristic pattern matching over free-form directory HTML.
//! Every field is best-effort: a rule that does not match leaves its field
//! empty, and no input can make extraction fail. Scalar fields are driven
//! by ordered candidate rule lists in [`rules`]; the email and phone list
//! fields live in [`patterns`].

mod patterns;
mod rules;

pub use patterns::{find_emails, find_phones};

use scraper::Html;
use serde::Serialize;

/// One extracted organization profile.
///
/// Field order here is the column order of the output spreadsheet; the CSV
/// writer derives its header row from these names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub ngo_name: String,
    pub page_url: String,
    pub address: String,
    pub purpose_or_services: String,
    pub contact_person: String,
    /// Comma-joined deduplicated phone candidates
    pub contact_numbers: String,
    /// Comma-joined deduplicated email addresses
    pub emails: String,
    pub website: String,
}

/// Extracts a [`ProfileRecord`] from profile-page HTML.
///
/// Pure function of its inputs. `page_url` should be the final
/// post-redirect URL of the fetched page; it is carried into the record
/// unchanged.
pub fn extract_profile(html: &str, page_url: &str) -> ProfileRecord {
    let document = Html::parse_document(html);
    let text = flatten_text(&document);

    ProfileRecord {
        ngo_name: rules::apply(rules::NAME_RULES, &document, &text),
        page_url: page_url.to_string(),
        address: rules::apply(rules::ADDRESS_RULES, &document, &text),
        purpose_or_services: rules::apply(rules::PURPOSE_RULES, &document, &text),
        contact_person: rules::apply(rules::CONTACT_PERSON_RULES, &document, &text),
        contact_numbers: find_phones(&text).join(", "),
        emails: find_emails(&text).join(", "),
        website: rules::apply(rules::WEBSITE_RULES, &document, &text),
    }
}

/// Full-text view of the document: every text node trimmed, empty nodes
/// dropped, the rest joined with single spaces. Whitespace inside a node
/// (including newlines) is preserved, so the line-bounded label captures
/// stop at line breaks.
fn flatten_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://ngosindia.org/rajasthan-ngos/asha-trust";

    #[test]
    fn test_contact_person_and_address() {
        let html =
            "<html><body><p>Contact Person: Jane Doe\nAdd: 12 MG Road, Jaipur</p></body></html>";
        let record = extract_profile(html, URL);
        assert_eq!(record.contact_person, "Jane Doe");
        assert_eq!(record.address, "12 MG Road, Jaipur");
    }

    #[test]
    fn test_duplicate_emails_collapse() {
        let html = "<html><body><p>Mail: info@example.org\nAlso: info@example.org</p></body></html>";
        let record = extract_profile(html, URL);
        assert_eq!(record.emails, "info@example.org");
    }

    #[test]
    fn test_name_prefers_h1_over_title() {
        let html = "<html><head><title>Asha Trust - NGO Directory</title></head>\
                    <body><h1>Asha Trust</h1></body></html>";
        let record = extract_profile(html, URL);
        assert_eq!(record.ngo_name, "Asha Trust");
    }

    #[test]
    fn test_name_falls_back_to_title() {
        let html = "<html><head><title>Asha Trust - NGO Directory</title></head><body></body></html>";
        let record = extract_profile(html, URL);
        assert_eq!(record.ngo_name, "Asha Trust - NGO Directory");
    }

    #[test]
    fn test_purpose_with_aims_fallback() {
        let html = "<html><body><p>Aims/Objectives/Mission: Education for rural girls</p></body></html>";
        let record = extract_profile(html, URL);
        assert_eq!(record.purpose_or_services, "Education for rural girls");
    }

    #[test]
    fn test_website_from_anchor() {
        let html = r#"<html><body><a href="http://ashatrust.org">Website</a></body></html>"#;
        let record = extract_profile(html, URL);
        assert_eq!(record.website, "http://ashatrust.org");
    }

    #[test]
    fn test_all_fields_empty_on_unrelated_html() {
        let record = extract_profile("<html><body><p>nothing here</p></body></html>", URL);
        assert_eq!(record.ngo_name, "");
        assert_eq!(record.address, "");
        assert_eq!(record.purpose_or_services, "");
        assert_eq!(record.contact_person, "");
        assert_eq!(record.contact_numbers, "");
        assert_eq!(record.emails, "");
        assert_eq!(record.website, "");
        assert_eq!(record.page_url, URL);
    }

    #[test]
    fn test_total_over_malformed_input() {
        // None of these may panic
        for html in ["", "<<<<", "<html", "\u{0}\u{0}", "<a href=", "</body></html>"] {
            let record = extract_profile(html, URL);
            assert_eq!(record.page_url, URL);
        }
    }

    #[test]
    fn test_full_profile() {
        // The purpose line sits last: its open-ended capture runs to the
        // end of the flattened text
        let html = concat!(
            "<html><head><title>Asha Trust</title></head><body>",
            "<h1>Asha Trust</h1>",
            r#"<p><a href="http://ashatrust.org">Website</a></p>"#,
            "<p>Phone: +91 141-2345678\nEmail: info@ashatrust.org</p>",
            "<p>Contact Person: Jane Doe\nAdd: 12 MG Road, Jaipur\n",
            "Purpose: Education for girls in rural districts</p>",
            "</body></html>"
        );
        let record = extract_profile(html, URL);
        assert_eq!(record.ngo_name, "Asha Trust");
        assert_eq!(record.contact_person, "Jane Doe");
        assert_eq!(record.address, "12 MG Road, Jaipur");
        assert_eq!(
            record.purpose_or_services,
            "Education for girls in rural districts"
        );
        assert_eq!(record.contact_numbers, "+91 141-2345678");
        assert_eq!(record.emails, "info@ashatrust.org");
        assert_eq!(record.website, "http://ashatrust.org");
    }
}

//! Spreadsheet writing and console table rendering

use crate::extract::ProfileRecord;
use crate::Result;
use std::path::Path;

/// Writes all records to a single-sheet spreadsheet (CSV) at `path`.
///
/// The header row is derived from the record's field names; one data row
/// is written per record, in the order given. Nothing is written for an
/// empty batch upstream; callers skip this function entirely when there
/// are no records.
pub fn write_spreadsheet(records: &[ProfileRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders records as a compact console table: one numbered block per
/// record with one line per non-empty field.
pub fn render_table(records: &[ProfileRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} record(s)\n", records.len()));

    for (index, record) in records.iter().enumerate() {
        let name = if record.ngo_name.is_empty() {
            "(unnamed)"
        } else {
            &record.ngo_name
        };
        out.push_str(&format!("[{}] {}\n", index + 1, name));

        for (label, value) in [
            ("page_url", &record.page_url),
            ("address", &record.address),
            ("purpose_or_services", &record.purpose_or_services),
            ("contact_person", &record.contact_person),
            ("contact_numbers", &record.contact_numbers),
            ("emails", &record.emails),
            ("website", &record.website),
        ] {
            if !value.is_empty() {
                out.push_str(&format!("    {}: {}\n", label, value));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ProfileRecord {
        ProfileRecord {
            ngo_name: "Asha Trust".to_string(),
            page_url: "https://ngosindia.org/rajasthan-ngos/asha-trust".to_string(),
            address: "12 MG Road, Jaipur".to_string(),
            purpose_or_services: "Education".to_string(),
            contact_person: "Jane Doe".to_string(),
            contact_numbers: "+91 141-2345678".to_string(),
            emails: "info@ashatrust.org".to_string(),
            website: "http://ashatrust.org".to_string(),
        }
    }

    fn empty_record() -> ProfileRecord {
        ProfileRecord {
            ngo_name: String::new(),
            page_url: "https://ngosindia.org/rajasthan-ngos/unknown".to_string(),
            address: String::new(),
            purpose_or_services: String::new(),
            contact_person: String::new(),
            contact_numbers: String::new(),
            emails: String::new(),
            website: String::new(),
        }
    }

    #[test]
    fn test_header_row_matches_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_spreadsheet(&[sample_record()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "ngo_name,page_url,address,purpose_or_services,contact_person,contact_numbers,emails,website"
        );
    }

    #[test]
    fn test_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_spreadsheet(&[sample_record(), empty_record()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3); // header + 2 rows
        assert!(content.contains("Asha Trust"));
    }

    #[test]
    fn test_comma_fields_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_spreadsheet(&[sample_record()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"12 MG Road, Jaipur\""));
    }

    #[test]
    fn test_empty_fields_serialize_as_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_spreadsheet(&[empty_record()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert!(row.starts_with(','));
        assert!(row.ends_with(','));
    }

    #[test]
    fn test_render_table_counts_and_skips_empty_fields() {
        let rendered = render_table(&[sample_record(), empty_record()]);
        assert!(rendered.starts_with("2 record(s)\n"));
        assert!(rendered.contains("[1] Asha Trust"));
        assert!(rendered.contains("[2] (unnamed)"));
        assert!(rendered.contains("contact_person: Jane Doe"));
        // The empty record only renders its page_url line
        assert!(!rendered.contains("address: \n"));
    }
}

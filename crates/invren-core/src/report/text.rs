//! Plain-text extraction log.

use std::fs;
use std::path::Path;

use crate::models::record::BatchReport;

use super::Result;

/// Render the report: one block per processed file, `N/A` for absent fields.
pub fn render_text_report(report: &BatchReport) -> String {
    let mut output = String::new();

    output.push_str("Data extracted from invoices:\n");
    output.push_str(&"=".repeat(40));
    output.push_str("\n\n");

    if report.dry_run {
        output.push_str("(dry run - no files were written)\n\n");
    }

    for result in &report.results {
        output.push_str(&format!("File: {}\n", result.source));
        output.push_str(&format!("Status: {}\n", result.outcome));
        output.push_str("Extracted data:\n");
        for (name, value) in result.record.fields() {
            output.push_str(&format!("  {}: {}\n", name, value.as_deref().unwrap_or("N/A")));
        }
        output.push_str(&"-".repeat(30));
        output.push_str("\n\n");
    }

    output
}

/// Write the plain-text report to `path`.
pub fn write_text_report(path: &Path, report: &BatchReport) -> Result<()> {
    fs::write(path, render_text_report(report))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{InvoiceRecord, Outcome, ProcessingResult};
    use chrono::NaiveDate;

    #[test]
    fn test_render_text_report() {
        let report = BatchReport {
            results: vec![ProcessingResult::new(
                "123.pdf",
                Outcome::Renamed {
                    destination: "ACME_2024-01-15.pdf".to_string(),
                },
                InvoiceRecord {
                    company_name: Some("ACME".to_string()),
                    issue_date: NaiveDate::from_ymd_opt(2024, 1, 15),
                    ..Default::default()
                },
            )],
            skipped: vec![],
            dry_run: false,
        };

        let text = render_text_report(&report);
        assert!(text.starts_with("Data extracted from invoices:\n"));
        assert!(text.contains("File: 123.pdf\n"));
        assert!(text.contains("Status: copied to ACME_2024-01-15.pdf\n"));
        assert!(text.contains("  company_name: ACME\n"));
        assert!(text.contains("  issue_date: 2024-01-15\n"));
        assert!(text.contains("  total_vat: N/A\n"));
        assert!(!text.contains("dry run"));
    }

    #[test]
    fn test_write_text_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let report = BatchReport {
            dry_run: true,
            ..Default::default()
        };

        write_text_report(&path, &report).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("dry run"));
    }
}

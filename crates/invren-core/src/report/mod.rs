//! Batch reports: plain text log, spreadsheet and CSV summary.

mod spreadsheet;
mod summary_csv;
mod text;

pub use spreadsheet::{write_spreadsheet, SHEET_NAME};
pub use summary_csv::write_csv;
pub use text::{render_text_report, write_text_report};

use crate::error::ReportError;
use crate::models::record::{Outcome, ProcessingResult};

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Summary columns shared by the spreadsheet and CSV reports.
pub const COLUMNS: [&str; 11] = [
    "File",
    "Status",
    "New Name",
    "Company",
    "Issue Date",
    "Due Date",
    "Total Payment",
    "Total VAT",
    "CPV Code",
    "NC8 Code",
    "Product",
];

/// Render one summary row as text cells, aligned with [`COLUMNS`].
pub(crate) fn summary_row(result: &ProcessingResult) -> [String; 11] {
    let record = &result.record;
    let new_name = match &result.outcome {
        Outcome::Renamed { destination } => destination.clone(),
        Outcome::Unchanged => result.source.clone(),
        Outcome::Failed { reason } => reason.clone(),
    };

    [
        result.source.clone(),
        result.outcome.label().to_string(),
        new_name,
        record.company_name.clone().unwrap_or_default(),
        record.issue_date.map(|d| d.to_string()).unwrap_or_default(),
        record.due_date.map(|d| d.to_string()).unwrap_or_default(),
        record.total_payment.map(|a| a.to_string()).unwrap_or_default(),
        record.total_vat.map(|a| a.to_string()).unwrap_or_default(),
        record.cpv_code.clone().unwrap_or_default(),
        record.nc8_code.clone().unwrap_or_default(),
        record.product_name.clone().unwrap_or_default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::InvoiceRecord;

    #[test]
    fn test_summary_row_failure_reason() {
        let result = ProcessingResult::failed("1.pdf", "no invoice data found", InvoiceRecord::default());
        let row = summary_row(&result);

        assert_eq!(row[0], "1.pdf");
        assert_eq!(row[1], "failed");
        assert_eq!(row[2], "no invoice data found");
        assert!(row[3..].iter().all(String::is_empty));
    }

    #[test]
    fn test_summary_row_unchanged_keeps_name() {
        let result = ProcessingResult::new("A_2024-01-15.pdf", Outcome::Unchanged, InvoiceRecord::default());
        assert_eq!(summary_row(&result)[2], "A_2024-01-15.pdf");
    }
}

//! Report writers, read back from disk.

use std::str::FromStr;

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use invren_core::report::{write_spreadsheet, write_text_report, COLUMNS, SHEET_NAME};
use invren_core::{BatchReport, InvoiceRecord, Outcome, ProcessingResult};

fn sample_report() -> BatchReport {
    BatchReport {
        results: vec![
            ProcessingResult::new(
                "123456.pdf",
                Outcome::Renamed {
                    destination: "Acme_SRL_2024-01-15_TOTAL_1190.50.pdf".to_string(),
                },
                InvoiceRecord {
                    company_name: Some("Acme SRL".to_string()),
                    issue_date: NaiveDate::from_ymd_opt(2024, 1, 15),
                    total_payment: Some(Decimal::from_str("1190.50").unwrap()),
                    total_vat: Some(Decimal::from_str("190.08").unwrap()),
                    cpv_code: Some("30197630-1".to_string()),
                    ..Default::default()
                },
            ),
            ProcessingResult::failed("777.pdf", "no invoice data found", InvoiceRecord::default()),
        ],
        skipped: vec!["Acme_SRL_2024-01-15_TOTAL_1190.50.pdf".to_string()],
        dry_run: false,
    }
}

#[test]
fn spreadsheet_has_header_and_one_row_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.xlsx");

    write_spreadsheet(&path, &sample_report()).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range(SHEET_NAME).unwrap();

    assert_eq!(range.height(), 3);
    assert_eq!(range.width(), 11);

    let header: Vec<String> = range.rows().next().unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(header, COLUMNS.to_vec());

    assert_eq!(range.get((1, 0)), Some(&Data::String("123456.pdf".to_string())));
    assert_eq!(range.get((1, 1)), Some(&Data::String("renamed".to_string())));
    assert_eq!(range.get((1, 3)), Some(&Data::String("Acme SRL".to_string())));
    assert_eq!(range.get((1, 6)), Some(&Data::Float(1190.5)));
    assert_eq!(range.get((1, 8)), Some(&Data::String("30197630-1".to_string())));

    assert_eq!(range.get((2, 1)), Some(&Data::String("failed".to_string())));
    assert_eq!(
        range.get((2, 2)),
        Some(&Data::String("no invoice data found".to_string()))
    );
}

#[test]
fn text_report_lists_every_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");

    write_text_report(&path, &sample_report()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("File: 123456.pdf"));
    assert!(content.contains("  total_payment: 1190.50"));
    assert!(content.contains("File: 777.pdf"));
    assert!(content.contains("Status: error: no invoice data found"));
}

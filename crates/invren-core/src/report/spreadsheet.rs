//! Spreadsheet summary using rust_xlsxwriter.

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, Workbook};
use tracing::debug;

use crate::models::record::BatchReport;

use super::{summary_row, Result, COLUMNS};

/// Name of the summary worksheet.
pub const SHEET_NAME: &str = "Invoices";

const PAYMENT_COL: u16 = 6;
const VAT_COL: u16 = 7;

const COLUMN_WIDTHS: [f64; 11] = [18.0, 10.0, 45.0, 32.0, 12.0, 12.0, 14.0, 12.0, 14.0, 12.0, 40.0];

/// Write the summary workbook: a bold header row and one row per result.
pub fn write_spreadsheet(path: &Path, report: &BatchReport) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9E1F2));
    let failed = Format::new().set_font_color(Color::Red);
    let amount = Format::new().set_num_format("0.00");

    for (col, (title, width)) in COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header)?;
        worksheet.set_column_width(col, width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (index, result) in report.results.iter().enumerate() {
        let row = index as u32 + 1;
        let cells = summary_row(result);

        for (col, value) in cells.iter().enumerate() {
            let col = col as u16;
            if value.is_empty() {
                continue;
            }

            let number = match col {
                PAYMENT_COL => result.record.total_payment.and_then(|d| d.to_f64()),
                VAT_COL => result.record.total_vat.and_then(|d| d.to_f64()),
                _ => None,
            };

            match number {
                Some(n) => {
                    worksheet.write_number_with_format(row, col, n, &amount)?;
                }
                None if !result.outcome.is_success() && col == 1 => {
                    worksheet.write_string_with_format(row, col, value.as_str(), &failed)?;
                }
                None => {
                    worksheet.write_string(row, col, value.as_str())?;
                }
            }
        }
    }

    if !report.results.is_empty() {
        worksheet.autofilter(0, 0, report.results.len() as u32, COLUMNS.len() as u16 - 1)?;
    }

    workbook.save(path)?;
    debug!(
        "Wrote spreadsheet with {} rows to {}",
        report.results.len(),
        path.display()
    );
    Ok(())
}

//! CSV summary with the same columns as the spreadsheet.

use std::path::Path;

use crate::models::record::BatchReport;

use super::{summary_row, Result, COLUMNS};

/// Write the CSV summary to `path`.
pub fn write_csv(path: &Path, report: &BatchReport) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(COLUMNS)?;
    for result in &report.results {
        wtr.write_record(summary_row(result))?;
    }

    wtr.flush()?;
    Ok(())
}

//! Invoice record and per-file processing outcome.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields extracted from a single invoice document.
///
/// Every field is independently optional. A record is built once by the
/// parser and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Seller/vendor name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Date the invoice was issued (data emitere).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,

    /// Payment due date (data scadenta).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Total amount to pay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_payment: Option<Decimal>,

    /// Total VAT amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_vat: Option<Decimal>,

    /// Common Procurement Vocabulary code (`NNNNNNNN-N`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpv_code: Option<String>,

    /// Combined Nomenclature code, 8 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nc8_code: Option<String>,

    /// Product or service description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl InvoiceRecord {
    /// Field names in report order.
    pub const FIELD_NAMES: [&'static str; 8] = [
        "company_name",
        "issue_date",
        "due_date",
        "total_payment",
        "total_vat",
        "cpv_code",
        "nc8_code",
        "product_name",
    ];

    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.issue_date.is_none()
            && self.due_date.is_none()
            && self.total_payment.is_none()
            && self.total_vat.is_none()
            && self.cpv_code.is_none()
            && self.nc8_code.is_none()
            && self.product_name.is_none()
    }

    /// Number of extracted fields.
    pub fn found_count(&self) -> usize {
        self.fields().iter().filter(|(_, v)| v.is_some()).count()
    }

    /// Ordered `(name, value)` view with every value rendered as text.
    pub fn fields(&self) -> [(&'static str, Option<String>); 8] {
        let [company, issue, due, payment, vat, cpv, nc8, product] = Self::FIELD_NAMES;
        [
            (company, self.company_name.clone()),
            (issue, self.issue_date.map(|d| d.to_string())),
            (due, self.due_date.map(|d| d.to_string())),
            (payment, self.total_payment.map(|a| a.to_string())),
            (vat, self.total_vat.map(|a| a.to_string())),
            (cpv, self.cpv_code.clone()),
            (nc8, self.nc8_code.clone()),
            (product, self.product_name.clone()),
        ]
    }
}

/// What happened to a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// A copy was written (or would be, in dry-run mode) under a new name.
    Renamed {
        /// File name of the destination.
        destination: String,
    },
    /// The derived name equals the current name; nothing to do.
    Unchanged,
    /// Processing failed for this file.
    Failed {
        /// Human-readable reason.
        reason: String,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed { .. })
    }

    /// Short status label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Renamed { .. } => "renamed",
            Outcome::Unchanged => "unchanged",
            Outcome::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Renamed { destination } => write!(f, "copied to {}", destination),
            Outcome::Unchanged => write!(f, "name already up to date"),
            Outcome::Failed { reason } => write!(f, "error: {}", reason),
        }
    }
}

/// Result of processing one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Source file name (without directory).
    pub source: String,
    /// Outcome status.
    pub outcome: Outcome,
    /// Extracted fields; empty if decoding failed.
    pub record: InvoiceRecord,
}

impl ProcessingResult {
    pub fn new(source: impl Into<String>, outcome: Outcome, record: InvoiceRecord) -> Self {
        Self {
            source: source.into(),
            outcome,
            record,
        }
    }

    pub fn failed(source: impl Into<String>, reason: impl Into<String>, record: InvoiceRecord) -> Self {
        Self::new(
            source,
            Outcome::Failed {
                reason: reason.into(),
            },
            record,
        )
    }
}

/// Accumulated results of a batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Per-file results, in processing order.
    pub results: Vec<ProcessingResult>,
    /// File names rejected by source selection.
    pub skipped: Vec<String>,
    /// Whether the run was a simulation.
    pub dry_run: bool,
}

impl BatchReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Renamed { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// Results that ended in success (renamed or unchanged).
    pub fn successes(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results.iter().filter(|r| r.outcome.is_success())
    }

    /// Results that ended in failure.
    pub fn failures(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results.iter().filter(|r| !r.outcome.is_success())
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_record() {
        let record = InvoiceRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.found_count(), 0);
    }

    #[test]
    fn test_fields_render_values() {
        let record = InvoiceRecord {
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            total_payment: Some(Decimal::from_str("1234.56").unwrap()),
            ..Default::default()
        };

        let fields = record.fields();
        assert_eq!(fields[1], ("issue_date", Some("2024-01-15".to_string())));
        assert_eq!(fields[3], ("total_payment", Some("1234.56".to_string())));
        assert_eq!(fields[0], ("company_name", None));
        assert_eq!(record.found_count(), 2);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_report_counters() {
        let report = BatchReport {
            results: vec![
                ProcessingResult::new(
                    "1.pdf",
                    Outcome::Renamed {
                        destination: "A.pdf".into(),
                    },
                    InvoiceRecord::default(),
                ),
                ProcessingResult::new("2.pdf", Outcome::Unchanged, InvoiceRecord::default()),
                ProcessingResult::failed("3.pdf", "no invoice data found", InvoiceRecord::default()),
            ],
            skipped: vec![],
            dry_run: false,
        };

        assert_eq!(report.renamed(), 1);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.successes().count(), 2);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&Outcome::Unchanged).unwrap();
        assert_eq!(json, r#"{"status":"unchanged"}"#);
    }
}

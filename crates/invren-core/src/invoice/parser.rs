//! Rule-based invoice parser: runs every field extractor over the text.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::InvoiceRecord;

use super::rules::{
    AmountExtractor, CodeExtractor, CompanyExtractor, DateExtractor, ExtractionMatch,
    FieldExtractor, ProductExtractor,
};
use super::Result;

/// Result of invoice extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub record: InvoiceRecord,
    /// `(field, rule)` pairs for every field that was found.
    pub matched_rules: Vec<(&'static str, &'static str)>,
    /// One warning per missing field.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse invoice fields from decoded document text.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

/// Invoice parser built from the label-anchored rules.
pub struct RuleInvoiceParser {
    company: CompanyExtractor,
    issue_date: DateExtractor,
    due_date: DateExtractor,
    payment: AmountExtractor,
    vat: AmountExtractor,
    cpv: CodeExtractor,
    nc8: CodeExtractor,
    product: ProductExtractor,
}

impl RuleInvoiceParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction settings.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            company: CompanyExtractor::new(config.non_name_prefixes.iter().cloned()),
            issue_date: DateExtractor::issue(),
            due_date: DateExtractor::due(),
            payment: AmountExtractor::payment(),
            vat: AmountExtractor::vat(),
            cpv: CodeExtractor::cpv(),
            nc8: CodeExtractor::nc8(),
            product: ProductExtractor::new(),
        }
    }
}

impl Default for RuleInvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Records which rule produced a field, or a warning when none did.
struct Tally {
    matched_rules: Vec<(&'static str, &'static str)>,
    warnings: Vec<String>,
}

impl Tally {
    fn take<T>(&mut self, field: &'static str, found: Option<ExtractionMatch<T>>) -> Option<T> {
        match found {
            Some(m) => {
                debug!("{} = {:?} (rule {})", field, m.source, m.rule);
                self.matched_rules.push((field, m.rule));
                Some(m.value)
            }
            None => {
                self.warnings.push(format!("Could not extract {}", field));
                None
            }
        }
    }
}

impl InvoiceParser for RuleInvoiceParser {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyText);
        }

        info!("Parsing invoice from {} characters of text", text.len());

        let mut tally = Tally {
            matched_rules: Vec::new(),
            warnings: Vec::new(),
        };

        let record = InvoiceRecord {
            company_name: tally.take("company_name", self.company.extract(text)),
            issue_date: tally.take("issue_date", self.issue_date.extract(text)),
            due_date: tally.take("due_date", self.due_date.extract(text)),
            total_payment: tally.take("total_payment", self.payment.extract(text)),
            total_vat: tally.take("total_vat", self.vat.extract(text)),
            cpv_code: tally.take("cpv_code", self.cpv.extract(text)),
            nc8_code: tally.take("nc8_code", self.nc8.extract(text)),
            product_name: tally.take("product_name", self.product.extract(text)),
        };

        debug!(
            "Extracted {} of {} fields",
            record.found_count(),
            InvoiceRecord::FIELD_NAMES.len()
        );

        Ok(ExtractionResult {
            record,
            matched_rules: tally.matched_rules,
            warnings: tally.warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

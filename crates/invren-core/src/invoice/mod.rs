//! Invoice field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, InvoiceParser, RuleInvoiceParser};

use std::path::Path;

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::pdf::DocumentDecoder;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Decode one document and run the rule parser over its text.
pub fn extract_file<D: DocumentDecoder>(
    decoder: &D,
    path: &Path,
    config: &ExtractionConfig,
) -> crate::Result<ExtractionResult> {
    let text = decoder.decode(path)?;
    Ok(RuleInvoiceParser::with_config(config).parse(&text)?)
}

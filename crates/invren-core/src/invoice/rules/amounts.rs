//! Total payment and total VAT extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{PAYMENT_RULES, VAT_RULES};
use super::{scan_rules, ExtractionMatch, FieldExtractor, Rule};

/// Amount field extractor bound to one label family.
pub struct AmountExtractor {
    rules: &'static [Rule],
}

impl AmountExtractor {
    /// Extractor for the total to pay (`TOTAL PLATA`).
    pub fn payment() -> Self {
        Self {
            rules: &PAYMENT_RULES,
        }
    }

    /// Extractor for the VAT total (`TOTAL TVA ... RON`).
    pub fn vat() -> Self {
        Self { rules: &VAT_RULES }
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        scan_rules(self.rules, text, parse_amount)
    }
}

/// Parse an amount written with a decimal comma or point (e.g. "1234,56",
/// "1234.56", "1.234,56", "1 234,56").
pub fn parse_amount(s: &str) -> Option<Decimal> {
    // Remove spaces and non-breaking spaces
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        // Comma after the last dot: dots group thousands
        (Some(c), Some(d)) if c > d => cleaned.replace('.', "").replace(',', "."),
        // Dot after the last comma: commas group thousands
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', "."),
        _ => cleaned,
    };

    Decimal::from_str(&normalized).ok()
}

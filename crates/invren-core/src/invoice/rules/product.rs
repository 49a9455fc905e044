//! Product/service name extraction.

use super::patterns::PRODUCT_RULES;
use super::{collapse_whitespace, scan_rules, ExtractionMatch, FieldExtractor};

/// Product name extractor.
#[derive(Default)]
pub struct ProductExtractor;

impl ProductExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for ProductExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        scan_rules(PRODUCT_RULES.iter(), text, accept_product)
    }
}

fn accept_product(raw: &str) -> Option<String> {
    let name = collapse_whitespace(raw);

    if name.chars().count() < 3 {
        return None;
    }
    // Header fragments such as "/serviciu" or ": "
    if !name.starts_with(|c: char| c.is_alphanumeric()) {
        return None;
    }
    if name.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',' || c == ' ') {
        return None;
    }

    Some(name)
}

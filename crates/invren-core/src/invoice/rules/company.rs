//! Seller company name extraction.

use super::patterns::COMPANY_RULES;
use super::{collapse_whitespace, scan_rules, ExtractionMatch, FieldExtractor};

/// Minimum number of characters for a company name.
const MIN_NAME_LEN: usize = 4;

/// Company name extractor.
pub struct CompanyExtractor {
    non_name_prefixes: Vec<String>,
}

impl CompanyExtractor {
    /// Create an extractor rejecting candidates that start with one of
    /// `non_name_prefixes` (case-insensitive, whole word).
    pub fn new<I, S>(non_name_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            non_name_prefixes: non_name_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Clean a raw capture and apply the validity filter.
    fn accept(&self, raw: &str) -> Option<String> {
        let name = collapse_whitespace(raw);
        let name = name.trim_end_matches('.').trim_end();

        if name.chars().count() < MIN_NAME_LEN {
            return None;
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if self.has_non_name_prefix(name) {
            return None;
        }

        Some(name.to_string())
    }

    fn has_non_name_prefix(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.non_name_prefixes.iter().any(|prefix| {
            let prefix = prefix.to_lowercase();
            match lower.strip_prefix(&prefix) {
                // Single words need a boundary: "Cod" must not reject
                // "Codreanu SRL". Abbreviations like "Reg. Com" match as is.
                Some(rest) => {
                    !prefix.chars().all(char::is_alphanumeric)
                        || !rest.starts_with(char::is_alphanumeric)
                }
                None => false,
            }
        })
    }
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new(crate::models::config::ExtractionConfig::default().non_name_prefixes)
    }
}

impl FieldExtractor for CompanyExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        scan_rules(COMPANY_RULES.iter(), text, |raw| self.accept(raw))
    }
}

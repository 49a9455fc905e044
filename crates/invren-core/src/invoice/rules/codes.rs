//! CPV and NC8 classification code extraction.

use super::patterns::{CPV_RULES, NC8_RULES};
use super::{scan_rules, ExtractionMatch, FieldExtractor, Rule};

/// Kind of classification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// Common Procurement Vocabulary, `NNNNNNNN-N`.
    Cpv,
    /// Combined Nomenclature, 8 digits.
    Nc8,
}

/// Classification code extractor.
pub struct CodeExtractor {
    kind: CodeKind,
}

impl CodeExtractor {
    pub fn new(kind: CodeKind) -> Self {
        Self { kind }
    }

    pub fn cpv() -> Self {
        Self::new(CodeKind::Cpv)
    }

    pub fn nc8() -> Self {
        Self::new(CodeKind::Nc8)
    }

    fn rules(&self) -> &'static [Rule] {
        match self.kind {
            CodeKind::Cpv => &CPV_RULES,
            CodeKind::Nc8 => &NC8_RULES,
        }
    }
}

impl FieldExtractor for CodeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let kind = self.kind;
        scan_rules(self.rules(), text, |raw| normalize_code(kind, raw))
    }
}

/// Normalize a captured code, or reject it if it has the wrong shape.
pub fn normalize_code(kind: CodeKind, raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match kind {
        CodeKind::Cpv if digits.len() == 9 => Some(format!("{}-{}", &digits[..8], &digits[8..])),
        CodeKind::Nc8 if digits.len() == 8 => Some(digits),
        _ => None,
    }
}

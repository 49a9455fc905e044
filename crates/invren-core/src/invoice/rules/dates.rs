//! Labeled date extraction (data emitere, data scadenta).

use chrono::NaiveDate;

use super::patterns::{DUE_DATE_RULES, ISSUE_DATE_RULES};
use super::{scan_rules, ExtractionMatch, FieldExtractor, Rule};

/// A date rule paired with the layout its capture is parsed with.
#[derive(Debug)]
pub struct DateRule {
    pub rule: Rule,
    pub format: &'static str,
}

/// Date field extractor bound to one label.
pub struct DateExtractor {
    rules: &'static [DateRule],
}

impl DateExtractor {
    /// Extractor for the issue date (`Data emitere`).
    pub fn issue() -> Self {
        Self {
            rules: &ISSUE_DATE_RULES,
        }
    }

    /// Extractor for the due date (`Data scadenta`).
    pub fn due() -> Self {
        Self {
            rules: &DUE_DATE_RULES,
        }
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.rules
            .iter()
            .flat_map(|date_rule| {
                scan_rules(std::iter::once(&date_rule.rule), text, |s| {
                    NaiveDate::parse_from_str(s, date_rule.format).ok()
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_issue_date_iso() {
        let result = DateExtractor::issue().extract("Factura\nData emitere 2024-01-15\n");
        let result = result.unwrap();
        assert_eq!(result.value, ymd(2024, 1, 15));
        assert_eq!(result.rule, "iso");
        assert_eq!(result.value.to_string(), "2024-01-15");
    }

    #[test]
    fn test_all_layouts() {
        let extractor = DateExtractor::issue();

        assert_eq!(extractor.extract("Data emitere 15-01-2024").unwrap().value, ymd(2024, 1, 15));
        assert_eq!(extractor.extract("Data emitere 5/1/2024").unwrap().value, ymd(2024, 1, 5));
        assert_eq!(extractor.extract("Data emitere 2024/1/5").unwrap().value, ymd(2024, 1, 5));
        assert_eq!(extractor.extract("DATA EMITERE: 2024-01-15").unwrap().value, ymd(2024, 1, 15));
    }

    #[test]
    fn test_due_date_labels() {
        let text = "Data emitere 2024-01-15\nData scadenta 14/02/2024\n";
        assert_eq!(DateExtractor::due().extract(text).unwrap().value, ymd(2024, 2, 14));

        let text = "Data scadență: 2024-02-14";
        assert_eq!(DateExtractor::due().extract(text).unwrap().value, ymd(2024, 2, 14));
    }

    #[test]
    fn test_labels_do_not_mix() {
        let text = "Data scadenta 2024-02-14";
        assert!(DateExtractor::issue().extract(text).is_none());
    }

    #[test]
    fn test_invalid_date_dropped() {
        assert!(DateExtractor::issue().extract("Data emitere 2024-13-45").is_none());
    }

    #[test]
    fn test_invalid_candidate_falls_through() {
        let text = "Data emitere 31-02-2024\nData emitere 01-03-2024";
        assert_eq!(DateExtractor::issue().extract(text).unwrap().value, ymd(2024, 3, 1));
    }

    #[test]
    fn test_unlabeled_date_ignored() {
        assert!(DateExtractor::issue().extract("Livrare 2024-01-15").is_none());
    }

    #[test]
    fn test_issue_label_variants() {
        let extractor = DateExtractor::issue();

        assert_eq!(extractor.extract("Data emitere 2024-01-15").unwrap().value, ymd(2024, 1, 15));
        assert_eq!(extractor.extract("Data emiterii 2024-01-15").unwrap().value, ymd(2024, 1, 15));
    }

    #[test]
    fn test_date_followed_by_text() {
        let text = "Data emitere 2024-01-15Data scadenta 2024-02-14";

        assert_eq!(DateExtractor::issue().extract(text).unwrap().value, ymd(2024, 1, 15));
        assert_eq!(DateExtractor::due().extract(text).unwrap().value, ymd(2024, 2, 14));
        assert!(DateExtractor::issue().extract("Data emitere 2024-01-150").is_none());
    }
}

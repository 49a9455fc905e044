//! Output filename derivation.

use std::path::{Path, PathBuf};

use crate::models::config::NamingConfig;
use crate::models::record::InvoiceRecord;

/// Characters that are not allowed in file names on common filesystems.
const INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Builds `Company_YYYY-MM-DD_TOTAL_amount.ext` style names from a record.
#[derive(Debug, Clone)]
pub struct FilenameBuilder {
    company_max_len: usize,
    separator: char,
    total_prefix: String,
}

impl FilenameBuilder {
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            company_max_len: config.company_max_len,
            separator: config.separator,
            total_prefix: config.total_prefix.clone(),
        }
    }

    /// Name parts contributed by the record, in output order.
    pub fn parts(&self, record: &InvoiceRecord) -> Vec<String> {
        let mut parts = Vec::with_capacity(3);

        if let Some(company) = &record.company_name {
            parts.push(company.chars().take(self.company_max_len).collect());
        }

        if let Some(date) = record.issue_date {
            parts.push(date.format("%Y-%m-%d").to_string());
        }

        if let Some(total) = record.total_payment {
            if self.total_prefix.is_empty() {
                parts.push(total.to_string());
            } else {
                parts.push(format!("{}{}{}", self.total_prefix, self.separator, total));
            }
        }

        parts
    }

    /// Derive the destination path for `original`. Returns `original`
    /// itself when the record contributes no part.
    pub fn derive(&self, original: &Path, record: &InvoiceRecord) -> PathBuf {
        let parts = self.parts(record);
        if parts.is_empty() {
            return original.to_path_buf();
        }

        let extension = original
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let joined = parts.join(&self.separator.to_string());
        let name = sanitize_filename(&format!("{}{}", joined, extension), self.separator);

        match original.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl Default for FilenameBuilder {
    fn default() -> Self {
        Self::new(&NamingConfig::default())
    }
}

/// Replace invalid characters and whitespace with `separator`, collapse
/// separator runs and trim separators from both ends.
pub fn sanitize_filename(name: &str, separator: char) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        let c = if INVALID_CHARS.contains(&c) || c.is_whitespace() || c.is_control() {
            separator
        } else {
            c
        };

        if c == separator && out.ends_with(separator) {
            continue;
        }
        out.push(c);
    }

    out.trim_matches(separator).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record() -> InvoiceRecord {
        InvoiceRecord {
            company_name: Some("ACME DISTRIBUTION SRL".to_string()),
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            total_payment: Some(Decimal::from_str("1190.00").unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_full_name() {
        let builder = FilenameBuilder::default();
        let path = builder.derive(Path::new("/invoices/123456.pdf"), &record());
        assert_eq!(
            path,
            PathBuf::from("/invoices/ACME_DISTRIBUTION_SRL_2024-01-15_TOTAL_1190.00.pdf")
        );
    }

    #[test]
    fn test_company_truncated_to_30_chars() {
        let record = InvoiceRecord {
            company_name: Some("Societatea Comerciala Foarte Lunga Denumire SRL".to_string()),
            ..Default::default()
        };

        let path = FilenameBuilder::default().derive(Path::new("1.pdf"), &record);
        assert_eq!(path, PathBuf::from("Societatea_Comerciala_Foarte_L.pdf"));
    }

    #[test]
    fn test_missing_parts_are_skipped() {
        let record = InvoiceRecord {
            total_payment: Some(Decimal::from_str("99.90").unwrap()),
            ..Default::default()
        };

        let path = FilenameBuilder::default().derive(Path::new("dir/42#.pdf"), &record);
        assert_eq!(path, PathBuf::from("dir/TOTAL_99.90.pdf"));
    }

    #[test]
    fn test_no_parts_keeps_original() {
        let record = InvoiceRecord {
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            ..Default::default()
        };

        let original = Path::new("dir/42.pdf");
        assert_eq!(FilenameBuilder::default().derive(original, &record), original);
    }

    #[test]
    fn test_derive_is_stable() {
        let builder = FilenameBuilder::default();
        let first = builder.derive(Path::new("dir/1.pdf"), &record());
        let second = builder.derive(&first, &record());
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_naming() {
        let builder = FilenameBuilder::new(&NamingConfig {
            company_max_len: 4,
            separator: '-',
            total_prefix: String::new(),
        });

        let path = builder.derive(Path::new("1.PDF"), &record());
        assert_eq!(path, PathBuf::from("ACME-2024-01-15-1190.00.PDF"));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("A<B>C:D\"E", '_'), "A_B_C_D_E");
        assert_eq!(sanitize_filename("a / b \\ c|d?e*", '_'), "a_b_c_d_e");
        assert_eq!(sanitize_filename("__a   b__.pdf", '_'), "a_b_.pdf");
        assert_eq!(sanitize_filename("  x  ", '_'), "x");
    }
}

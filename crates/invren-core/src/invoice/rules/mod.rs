//! Rule-based field extractors for invoice text.
//!
//! Every field owns an ordered list of [`Rule`]s. Rules are tried in
//! priority order and, inside a rule, matches are tried in text order; the
//! first capture accepted by the field's validity filter wins.

pub mod amounts;
pub mod codes;
pub mod company;
pub mod dates;
pub mod patterns;
pub mod product;

pub use amounts::{parse_amount, AmountExtractor};
pub use codes::{CodeExtractor, CodeKind};
pub use company::CompanyExtractor;
pub use dates::DateExtractor;
pub use product::ProductExtractor;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all accepted candidates, in priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A named regular expression whose first capture group holds the value.
#[derive(Debug)]
pub struct Rule {
    /// Rule name, reported in debug logs and matches.
    pub name: &'static str,
    /// Compiled pattern.
    pub regex: Regex,
}

impl Rule {
    /// Compile a rule. Patterns are compiled-in constants.
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

/// A value accepted by a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Name of the rule that produced the value.
    pub rule: &'static str,
    /// Byte span of the capture in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was captured.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Run `rules` over `text` and collect every capture accepted by `accept`,
/// rule by rule.
pub fn scan_rules<'r, T, I>(
    rules: I,
    text: &str,
    mut accept: impl FnMut(&str) -> Option<T>,
) -> Vec<ExtractionMatch<T>>
where
    I: IntoIterator<Item = &'r Rule>,
{
    let mut results = Vec::new();

    for rule in rules {
        for caps in rule.regex.captures_iter(text) {
            let Some(group) = caps.get(1) else {
                continue;
            };

            if let Some(value) = accept(group.as_str()) {
                results.push(
                    ExtractionMatch::new(value, rule.name, group.as_str())
                        .with_position(group.start(), group.end()),
                );
            }
        }
    }

    results
}

/// Collapse whitespace runs into single spaces and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

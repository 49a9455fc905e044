//! Which files in a directory count as unprocessed originals.

use std::path::Path;

use crate::invoice::rules::patterns::{EMBEDDED_ISO_DATE, ORIGINAL_STEM};

/// Classification of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Numeric name such as `123456.pdf` or `123456#.pdf`.
    Original,
    /// Name carrying a separator or an ISO date: output of an earlier run.
    PriorOutput,
    /// Any other PDF name.
    Unrecognized,
    /// Not a PDF.
    NotPdf,
}

impl Selection {
    pub fn is_candidate(self, originals_only: bool) -> bool {
        match self {
            Selection::Original => true,
            Selection::Unrecognized | Selection::PriorOutput => !originals_only,
            Selection::NotPdf => false,
        }
    }
}

/// Returns true for paths with a `.pdf` extension, in any case.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Classify `path` by its file name.
pub fn classify(path: &Path, separator: char) -> Selection {
    if !is_pdf(path) {
        return Selection::NotPdf;
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    if stem.contains(separator) || EMBEDDED_ISO_DATE.is_match(&stem) {
        Selection::PriorOutput
    } else if ORIGINAL_STEM.is_match(&stem) {
        Selection::Original
    } else {
        Selection::Unrecognized
    }
}

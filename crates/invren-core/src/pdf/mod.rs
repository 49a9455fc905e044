//! Document decoding: turns a page-structured document into linear text.

mod extractor;

pub use extractor::{PdfDecoder, PdfExtractor};

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Anything that can turn a document on disk into plain text.
pub trait DocumentDecoder {
    /// Decode the document at `path` into its text stream.
    fn decode(&self, path: &Path) -> Result<String>;
}

impl<D: DocumentDecoder + ?Sized> DocumentDecoder for &D {
    fn decode(&self, path: &Path) -> Result<String> {
        (**self).decode(path)
    }
}

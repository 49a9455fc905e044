//! Error types for the invren-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the invren library.
#[derive(Error, Debug)]
pub enum InvrenError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to read the file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to invoice field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The decoded document contained no text.
    #[error("no text could be extracted")]
    EmptyText,

    /// No invoice field could be extracted.
    #[error("no invoice data found")]
    NoData,
}

/// Errors raised by the batch renamer.
#[derive(Error, Debug)]
pub enum RenameError {
    /// The input directory does not exist or is not a directory.
    #[error("directory {0} does not exist")]
    MissingDirectory(PathBuf),

    /// The derived destination already exists and overwriting is disabled.
    #[error("file {0} already exists")]
    DestinationExists(String),

    /// Invalid glob pattern built from the directory path.
    #[error("invalid directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Copying the source to its destination failed.
    #[error("failed to copy to {destination}: {source}")]
    Copy {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while writing reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Report file I/O failure.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet serialization failure.
    #[error("failed to write spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// CSV serialization failure.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for the invren library.
pub type Result<T> = std::result::Result<T, InvrenError>;

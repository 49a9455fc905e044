//! Core library for invoice data extraction and renaming.
//!
//! This crate provides:
//! - PDF decoding to plain text
//! - Label-anchored field extraction (vendor, dates, totals, CPV/NC8 codes, product)
//! - Filename derivation and source selection
//! - A sequential batch renamer with per-file failure isolation
//! - Text, spreadsheet and CSV reports

pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;
pub mod rename;
pub mod report;

pub use error::{InvrenError, Result};
pub use invoice::{extract_file, ExtractionResult, InvoiceParser, RuleInvoiceParser};
pub use models::config::InvrenConfig;
pub use models::record::{BatchReport, InvoiceRecord, Outcome, ProcessingResult};
pub use pdf::{DocumentDecoder, PdfDecoder};
pub use rename::{BatchObserver, BatchRenamer, FilenameBuilder};

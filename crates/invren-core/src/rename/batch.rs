//! Batch driver: decode, extract, derive a name and copy, one file at a time.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{debug, info, warn};

use crate::error::{ExtractionError, RenameError};
use crate::invoice::{InvoiceParser, RuleInvoiceParser};
use crate::models::config::InvrenConfig;
use crate::models::record::{BatchReport, InvoiceRecord, Outcome, ProcessingResult};
use crate::pdf::DocumentDecoder;

use super::filename::FilenameBuilder;
use super::selection::{classify, is_pdf};
use super::Result;

/// Receives progress notifications from [`BatchRenamer::run_with`].
pub trait BatchObserver {
    /// Called once with the number of candidate files.
    fn on_start(&mut self, _total: usize) {}

    /// Called after each file, in processing order.
    fn on_result(&mut self, _result: &ProcessingResult) {}
}

impl BatchObserver for () {}

/// Batch renamer options.
#[derive(Debug, Clone, Copy)]
pub struct RenameOptions {
    /// Simulate: never write a file.
    pub dry_run: bool,
    /// Replace existing destination files.
    pub overwrite: bool,
    /// Skip files that do not look like unprocessed originals.
    pub select_originals_only: bool,
}

/// Sequential batch renamer.
pub struct BatchRenamer<D> {
    decoder: D,
    parser: RuleInvoiceParser,
    naming: FilenameBuilder,
    separator: char,
    options: RenameOptions,
}

impl<D: DocumentDecoder> BatchRenamer<D> {
    /// Create a renamer from configuration. Dry-run is off.
    pub fn new(decoder: D, config: &InvrenConfig) -> Self {
        Self {
            decoder,
            parser: RuleInvoiceParser::with_config(&config.extraction),
            naming: FilenameBuilder::new(&config.naming),
            separator: config.naming.separator,
            options: RenameOptions {
                dry_run: false,
                overwrite: config.rename.overwrite,
                select_originals_only: config.rename.select_originals_only,
            },
        }
    }

    /// Set dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.options.dry_run = dry_run;
        self
    }

    /// Set overwrite behaviour on destination collisions.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.options.overwrite = overwrite;
        self
    }

    /// Restrict processing to unprocessed originals.
    pub fn with_originals_only(mut self, originals_only: bool) -> Self {
        self.options.select_originals_only = originals_only;
        self
    }

    pub fn options(&self) -> RenameOptions {
        self.options
    }

    /// Process every candidate in `dir`.
    pub fn run(&self, dir: &Path) -> Result<BatchReport> {
        self.run_with(dir, &mut ())
    }

    /// Process every candidate in `dir`, notifying `observer` as files
    /// complete. Only a missing directory is fatal.
    pub fn run_with(&self, dir: &Path, observer: &mut dyn BatchObserver) -> Result<BatchReport> {
        let (candidates, skipped) = self.candidates(dir)?;

        info!(
            "Found {} candidate files in {} ({} skipped)",
            candidates.len(),
            dir.display(),
            skipped.len()
        );
        observer.on_start(candidates.len());

        let mut report = BatchReport {
            results: Vec::with_capacity(candidates.len()),
            skipped,
            dry_run: self.options.dry_run,
        };

        for path in candidates {
            let result = self.process_file(&path);
            observer.on_result(&result);
            report.results.push(result);
        }

        Ok(report)
    }

    /// List PDFs in `dir`, sorted by name, split into candidates and the
    /// names rejected by source selection.
    pub fn candidates(&self, dir: &Path) -> Result<(Vec<PathBuf>, Vec<String>)> {
        if !dir.is_dir() {
            return Err(RenameError::MissingDirectory(dir.to_path_buf()));
        }

        let pattern = format!("{}/*", glob::Pattern::escape(&dir.to_string_lossy()));

        let mut candidates = Vec::new();
        let mut skipped = Vec::new();

        for path in glob(&pattern)?.filter_map(|r| r.ok()) {
            if !path.is_file() || !is_pdf(&path) {
                continue;
            }

            let selection = classify(&path, self.separator);
            if selection.is_candidate(self.options.select_originals_only) {
                candidates.push(path);
            } else {
                debug!("Skipping {} ({:?})", path.display(), selection);
                skipped.push(file_name(&path));
            }
        }

        Ok((candidates, skipped))
    }

    /// Process a single file. Never fails: errors become a
    /// [`Outcome::Failed`] result.
    pub fn process_file(&self, path: &Path) -> ProcessingResult {
        let source = file_name(path);
        info!("Processing {}", source);

        let text = match self.decoder.decode(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to decode {}: {}", source, e);
                return ProcessingResult::failed(source, e.to_string(), InvoiceRecord::default());
            }
        };

        let record = match self.parser.parse(&text) {
            Ok(extraction) => extraction.record,
            Err(e) => {
                warn!("Failed to extract {}: {}", source, e);
                return ProcessingResult::failed(source, e.to_string(), InvoiceRecord::default());
            }
        };

        if record.is_empty() {
            warn!("No invoice data found in {}", source);
            return ProcessingResult::failed(source, ExtractionError::NoData.to_string(), record);
        }

        let destination = self.naming.derive(path, &record);
        if destination == path {
            debug!("{} already carries its derived name", source);
            return ProcessingResult::new(source, Outcome::Unchanged, record);
        }

        match self.copy(path, &destination) {
            Ok(()) => ProcessingResult::new(
                source,
                Outcome::Renamed {
                    destination: file_name(&destination),
                },
                record,
            ),
            Err(e) => {
                warn!("Failed to copy {}: {}", source, e);
                ProcessingResult::failed(source, e.to_string(), record)
            }
        }
    }

    fn copy(&self, source: &Path, destination: &Path) -> Result<()> {
        let name = file_name(destination);

        if destination.exists() && !self.options.overwrite {
            return Err(RenameError::DestinationExists(name));
        }

        if self.options.dry_run {
            info!("[DRY RUN] Would copy to {}", name);
            return Ok(());
        }

        fs::copy(source, destination).map_err(|source| RenameError::Copy {
            destination: name.clone(),
            source,
        })?;
        info!("Copied to {}", name);
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

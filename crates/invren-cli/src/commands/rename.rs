//! Rename command - copy every invoice in a directory to its derived name.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use invren_core::report::{write_csv, write_spreadsheet, write_text_report};
use invren_core::{BatchObserver, BatchRenamer, InvrenConfig, Outcome, PdfDecoder, ProcessingResult};

/// Arguments for the rename command.
#[derive(Args)]
pub struct RenameArgs {
    /// Directory containing the invoice PDFs
    #[arg(required = true)]
    directory: PathBuf,

    /// Show what would be copied without writing any file
    #[arg(short, long)]
    dry_run: bool,

    /// Save extracted data to a text file
    #[arg(short, long, value_name = "TXT")]
    save: Option<PathBuf>,

    /// Save a spreadsheet summary
    #[arg(short = 'x', long, value_name = "XLSX")]
    excel: Option<PathBuf>,

    /// Save a CSV summary
    #[arg(long, value_name = "CSV")]
    csv: Option<PathBuf>,

    /// Fail instead of replacing an existing destination file
    #[arg(long)]
    no_overwrite: bool,

    /// Process every PDF, not only unprocessed originals
    #[arg(long)]
    all: bool,
}

/// Drives a progress bar and prints one line per processed file.
struct ProgressReporter {
    pb: ProgressBar,
    dry_run: bool,
}

impl BatchObserver for ProgressReporter {
    fn on_start(&mut self, total: usize) {
        self.pb.set_length(total as u64);
    }

    fn on_result(&mut self, result: &ProcessingResult) {
        let line = match &result.outcome {
            Outcome::Renamed { destination } if self.dry_run => format!(
                "{} {} -> {}",
                style("~").yellow(),
                result.source,
                destination
            ),
            Outcome::Renamed { destination } => format!(
                "{} {} -> {}",
                style("✓").green(),
                result.source,
                destination
            ),
            Outcome::Unchanged => format!(
                "{} {} already has its final name",
                style("ℹ").blue(),
                result.source
            ),
            Outcome::Failed { reason } => {
                format!("{} {}: {}", style("✗").red(), result.source, reason)
            }
        };
        self.pb.suspend(|| println!("{}", line));
        self.pb.inc(1);
    }
}

pub fn run(args: RenameArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = InvrenConfig::load(config_path.map(std::path::Path::new))?;

    let mut renamer = BatchRenamer::new(PdfDecoder::new(), &config).with_dry_run(args.dry_run);
    if args.no_overwrite {
        renamer = renamer.with_overwrite(false);
    }
    if args.all {
        renamer = renamer.with_originals_only(false);
    }
    debug!("Rename options: {:?}", renamer.options());

    if args.dry_run {
        println!(
            "{} Dry run: no files will be written",
            style("ℹ").blue()
        );
    }

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );
    let mut reporter = ProgressReporter {
        pb,
        dry_run: args.dry_run,
    };

    let report = renamer.run_with(&args.directory, &mut reporter)?;
    reporter.pb.finish_and_clear();

    if let Some(path) = &args.save {
        write_text_report(path, &report)?;
        println!(
            "{} Extracted data saved to {}",
            style("✓").green(),
            path.display()
        );
    }

    if let Some(path) = &args.excel {
        write_spreadsheet(path, &report)?;
        println!(
            "{} Spreadsheet saved to {}",
            style("✓").green(),
            path.display()
        );
    }

    if let Some(path) = &args.csv {
        write_csv(path, &report)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        report.results.len(),
        start.elapsed()
    );
    println!(
        "   {} renamed, {} unchanged, {} failed, {} skipped",
        style(report.renamed()).green(),
        report.unchanged(),
        style(report.failed()).red(),
        report.skipped.len()
    );

    if report.failed() > 0 {
        println!();
        println!("{}", style("Failed files:").red());
        for result in report.failures() {
            println!("  - {}: {}", result.source, result.outcome);
        }
    }

    Ok(())
}

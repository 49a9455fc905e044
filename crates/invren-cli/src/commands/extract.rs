//! Extract command - print the fields found in a single invoice.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use invren_core::rename::FilenameBuilder;
use invren_core::{extract_file, InvoiceRecord, InvrenConfig, PdfDecoder};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = InvrenConfig::load(config_path.map(std::path::Path::new))?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let result = extract_file(&PdfDecoder::new(), &args.input, &config.extraction)?;

    for (field, rule) in &result.matched_rules {
        debug!("{} matched by rule {}", field, rule);
    }
    for warning in &result.warnings {
        debug!("{}", warning);
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.record)?),
        OutputFormat::Text => {
            print!("{}", format_text(&result.record));
            if !result.record.is_empty() {
                let derived = FilenameBuilder::new(&config.naming).derive(&args.input, &result.record);
                if let Some(name) = derived.file_name() {
                    println!();
                    println!(
                        "{} Derived name: {}",
                        style("ℹ").blue(),
                        name.to_string_lossy()
                    );
                }
            }
        }
    }

    Ok(())
}

fn format_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    for (name, value) in record.fields() {
        output.push_str(&format!(
            "{:<14} {}\n",
            format!("{}:", name),
            value.as_deref().unwrap_or("unknown")
        ));
    }

    output
}

//! Compare command - report layout drift between a reference and a candidate.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use formscan_core::compare::{DocumentDiff, compare_documents};
use formscan_core::models::config::FormscanConfig;
use formscan_core::models::document::DocumentRecord;

use super::{extract_file, has_extension, load_config, render_json};

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Reference document (PDF or extracted JSON)
    #[arg(required = true)]
    reference: PathBuf,

    /// Candidate document (PDF or extracted JSON)
    #[arg(required = true)]
    candidate: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: DiffFormat,

    /// Also compare field values
    #[arg(long)]
    values: bool,

    /// Ignore sheet size differences
    #[arg(long)]
    ignore_sheet_size: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DiffFormat {
    /// Human-readable report
    Text,
    /// JSON report
    Json,
}

pub async fn run(args: CompareArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if args.values {
        config.compare.check_values = true;
    }
    if args.ignore_sheet_size {
        config.compare.check_sheet_size = false;
    }

    let reference = load_document(&args.reference, &config)?;
    let candidate = load_document(&args.candidate, &config)?;

    let diff = compare_documents(&reference, &candidate, &config.compare);
    info!(
        "Compared {} reference fields with {} candidate fields",
        reference.body.len(),
        candidate.body.len()
    );

    match args.format {
        DiffFormat::Json => println!("{}", render_json(&diff, config.output.pretty)?),
        DiffFormat::Text => print_report(&diff),
    }

    if !diff.is_clean() {
        anyhow::bail!("{} layout difference(s) found", diff.difference_count());
    }

    Ok(())
}

fn load_document(path: &Path, config: &FormscanConfig) -> anyhow::Result<DocumentRecord> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    if has_extension(path, "json") {
        let content = fs::read_to_string(path)?;
        return DocumentRecord::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Invalid document record {}: {}", path.display(), e));
    }

    Ok(extract_file(path, config)?.document)
}

fn print_report(diff: &DocumentDiff) {
    if diff.is_clean() {
        println!("{} Documents match", style("✓").green());
        return;
    }

    if let Some(sheet) = &diff.sheet_size {
        println!(
            "{} sheet size {}x{} -> {}x{}",
            style("✗").red(),
            sheet.reference.width,
            sheet.reference.height,
            sheet.candidate.width,
            sheet.candidate.height
        );
    }
    for key in &diff.missing {
        println!("{} missing {:?}", style("-").red(), key);
    }
    for key in &diff.unexpected {
        println!("{} unexpected {:?}", style("+").yellow(), key);
    }
    for mismatch in &diff.mismatches {
        println!(
            "{} {:?} {}: {} -> {}",
            style("~").yellow(),
            mismatch.key,
            mismatch.aspect,
            mismatch.reference,
            mismatch.candidate
        );
    }
}

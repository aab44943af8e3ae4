//! Extract command - build the field table of a single PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::{extract_file, has_extension, load_config, render_document};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page to extract (1-indexed)
    #[arg(short, long)]
    page: Option<u32>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Print extraction warnings
    #[arg(long)]
    warnings: bool,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(page) = args.page {
        config.pdf.page = page;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    if !has_extension(&args.input, "pdf") {
        anyhow::bail!("Unsupported file format: {}", args.input.display());
    }

    info!("Extracting fields from {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Reading page {}...", config.pdf.page));

    let result = extract_file(&args.input, &config);
    pb.finish_and_clear();
    let result = result?;

    if args.warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }

    let output = render_document(&result.document, args.pretty || config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} fields written to {}",
            style("✓").green(),
            result.document.body.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!(
        "Extraction took {}ms ({} lines, {} skipped), total {:?}",
        result.processing_time_ms,
        result.line_count,
        result.skipped_lines,
        start.elapsed()
    );

    Ok(())
}

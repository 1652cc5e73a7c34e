//! CLI for extracting class sizes from a class map report
//!
//! Usage:
//!   extract-class-sizes [--input test.map] [--output classes.csv] [--config extract.toml]
//!
//! With no arguments, reads `test.map` and writes `classes.csv` next to the
//! executable.

use anyhow::{Context, Result};
use clap::Parser;
use classmap_extract::{ClassSizeExtractor, ExtractorConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extract-class-sizes")]
#[command(about = "Extract class sizes from a class map report into CSV")]
struct Args {
    /// Class map report to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// CSV file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with `input_path` / `output_path`
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Merge sources: CLI flag, then config file, then defaults
fn resolve_config(args: &Args) -> Result<ExtractorConfig> {
    let mut config = match &args.config {
        Some(path) => ExtractorConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };
    if let Some(input) = &args.input {
        config = config.with_input_path(input);
    }
    if let Some(output) = &args.output {
        config = config.with_output_path(output);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    ClassSizeExtractor::with_config(config.clone()).run()?;

    println!("Written CSV to {}", config.output_path.display());
    Ok(())
}

//! fpcompare - Compare two fingerprints
//!
//! Usage: fpcompare [--distance] <query_fp> <reference_fp>
//!
//! Inputs are fpkit JSON files (`.json`) or fpcalc `-raw` output (any other
//! extension). Prints the similarity score as JSON.

use anyhow::Result;
use clap::Parser;
use fpkit_cli::init_logger;
use fpkit_cli::output::{print_json, CompareOutput};
use fpkit_core::FpkitConfig;
use fpkit_fp::FpJsonFile;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fpcompare")]
#[command(about = "Compare two acoustic fingerprints", long_about = None)]
struct Args {
    /// Query fingerprint file
    query: PathBuf,

    /// Reference fingerprint file
    reference: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long, default_value = "fpkit.toml")]
    config: PathBuf,

    /// Match threshold (overrides config)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Include the XOR distance vector in the output
    #[arg(short, long)]
    distance: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = FpkitConfig::load_or_default(&args.config)?;
    let threshold = args.threshold.unwrap_or(config.compare.match_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        anyhow::bail!("Threshold must be within [0, 1], got {}", threshold);
    }

    let query = FpJsonFile::load_auto(&args.query)?;
    let reference = FpJsonFile::load_auto(&args.reference)?;
    log::info!(
        "Query has {} subfingerprints, reference has {}",
        query.len(),
        reference.len()
    );

    let output = CompareOutput::build(
        args.query.display().to_string(),
        args.reference.display().to_string(),
        &query.fingerprint,
        &reference.fingerprint,
        threshold,
        args.distance,
    )?;

    log::info!("Score {:.4} (threshold {:.2})", output.score, threshold);
    print_json(&output);

    Ok(())
}

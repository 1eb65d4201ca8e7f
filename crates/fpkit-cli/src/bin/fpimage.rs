//! fpimage - Render a fingerprint, or the difference of two, as PNG
//!
//! Usage:
//!   fpimage <fp> -o out.png                  # fingerprint barcode
//!   fpimage <fp_a> <fp_b> -o diff.png        # white pixels mark differing bits

use anyhow::Result;
use clap::Parser;
use fpkit_cli::init_logger;
use fpkit_cli::render::save_png;
use fpkit_core::config::MAX_IMAGE_SCALE;
use fpkit_core::{render_distance_image, render_image, FpkitConfig};
use fpkit_fp::FpJsonFile;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fpimage")]
#[command(about = "Render acoustic fingerprints as black-and-white images", long_about = None)]
struct Args {
    /// Fingerprint file
    first: PathBuf,

    /// Second fingerprint file; renders the bitwise difference when given
    second: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long, default_value = "fpkit.toml")]
    config: PathBuf,

    /// Pixels per bit (overrides config)
    #[arg(short, long)]
    scale: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = FpkitConfig::load_or_default(&args.config)?;
    let scale = args.scale.unwrap_or(config.image.scale);
    if scale == 0 || scale > MAX_IMAGE_SCALE {
        anyhow::bail!("Scale must be within [1, {}], got {}", MAX_IMAGE_SCALE, scale);
    }

    let first = FpJsonFile::load_auto(&args.first)?;
    let bits = match &args.second {
        Some(second_path) => {
            let second = FpJsonFile::load_auto(second_path)?;
            render_distance_image(&first.fingerprint, &second.fingerprint)?
        }
        None => render_image(&first.fingerprint),
    };

    log::info!(
        "Rendering {}x{} bitmap ({} set bits) at scale {}",
        bits.width(),
        bits.height(),
        bits.set_bits(),
        scale
    );
    save_png(&bits, scale, &args.output)?;
    log::info!("Saved: {}", args.output.display());

    Ok(())
}

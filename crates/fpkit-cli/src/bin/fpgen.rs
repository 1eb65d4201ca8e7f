//! fpgen - Chromaprint fingerprint generator for raw PCM audio
//!
//! Usage: fpgen [--channels N] [--rate HZ] [--max-seconds S] <input_raw_pcm> <output_json>
//!
//! The input is interleaved signed 16-bit little-endian PCM, e.g. produced by
//! `ffmpeg -i song.flac -f s16le -ac 2 -ar 44100 song.raw`.

use anyhow::{Context, Result};
use clap::Parser;
use fpkit_cli::init_logger;
use fpkit_core::calculator::BYTES_PER_SAMPLE;
use fpkit_core::{Calculator, ChromaprintCalculator, FpkitConfig, RawInfo};
use fpkit_fp::FpJsonFile;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "fpgen")]
#[command(about = "Generate Chromaprint fingerprints from raw PCM audio", long_about = None)]
struct Args {
    /// Input raw PCM file (s16le, interleaved)
    input_path: PathBuf,

    /// Output JSON fingerprint file
    output_path: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long, default_value = "fpkit.toml")]
    config: PathBuf,

    /// Number of channels (overrides config)
    #[arg(long)]
    channels: Option<u32>,

    /// Sample rate in Hz (overrides config)
    #[arg(long)]
    rate: Option<u32>,

    /// Maximum seconds of audio to fingerprint, 0 for all (overrides config)
    #[arg(long)]
    max_seconds: Option<u32>,

    /// Also print the encoded fingerprint string
    #[arg(short, long)]
    encoded: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = FpkitConfig::load_or_default(&args.config)?;
    let channels = args.channels.unwrap_or(config.capture.channels);
    let rate = args.rate.unwrap_or(config.capture.rate);
    let max_seconds = args.max_seconds.unwrap_or(config.capture.max_seconds);

    run_fpgen(
        &args.input_path,
        &args.output_path,
        channels,
        rate,
        max_seconds,
        args.encoded,
    )
}

fn open_pcm(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open audio file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn run_fpgen(
    input_path: &Path,
    output_path: &Path,
    channels: u32,
    rate: u32,
    max_seconds: u32,
    print_encoded: bool,
) -> Result<()> {
    if !input_path.exists() {
        anyhow::bail!("Input file not found: {}", input_path.display());
    }

    log::info!(
        "Processing: {} ({} channels @ {}Hz, max {}s)",
        input_path.display(),
        channels,
        rate,
        max_seconds
    );

    let calculator = ChromaprintCalculator::new();
    let start = std::time::Instant::now();

    let mut reader = open_pcm(input_path)?;
    let fingerprint = calculator
        .raw_fingerprint(RawInfo::new(&mut reader, channels, rate, max_seconds))
        .with_context(|| format!("Fingerprinting failed: {}", input_path.display()))?;

    if print_encoded {
        println!("{}", calculator.encode(&fingerprint));
    }

    log::info!(
        "Generated {} subfingerprints in {:.2}s",
        fingerprint.len(),
        start.elapsed().as_secs_f64()
    );

    let file_len = std::fs::metadata(input_path)?.len();
    let mut duration_s = file_len as f64 / (u64::from(rate) * u64::from(channels) * BYTES_PER_SAMPLE) as f64;
    if max_seconds > 0 {
        duration_s = duration_s.min(f64::from(max_seconds));
    }

    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let fp_file = FpJsonFile::new(
        input_path.display().to_string(),
        filename,
        "CHROMAPRINT",
        fingerprint,
    )
    .with_audio(rate, channels, duration_s);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fp_file.save(output_path)?;

    log::info!("Saved: {}", output_path.display());
    Ok(())
}

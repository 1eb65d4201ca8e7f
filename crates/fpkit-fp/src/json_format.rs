//! JSON format for fingerprint files
//!
//! Stores one raw fingerprint together with a description of the audio it
//! was calculated from.

use crate::fpcalc::parse_fpcalc;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current JSON format version
pub const FORMAT_VERSION: &str = "1.0";

/// Complete JSON fingerprint file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FpJsonFile {
    pub version: String,
    pub metadata: FpJsonMetadata,
    pub fingerprint: Vec<i32>,
}

/// Metadata about the original audio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FpJsonMetadata {
    pub original_path: String,
    pub filename: String,
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<f64>,
    pub created_at: String,
}

impl FpJsonFile {
    /// Create a new JSON fingerprint file
    pub fn new(original_path: String, filename: String, algorithm: &str, fingerprint: Vec<i32>) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            metadata: FpJsonMetadata {
                original_path,
                filename,
                algorithm: algorithm.to_string(),
                sample_rate: None,
                channels: None,
                duration_s: None,
                created_at: chrono::Utc::now().to_rfc3339(),
            },
            fingerprint,
        }
    }

    /// Record the raw audio description
    pub fn with_audio(mut self, sample_rate: u32, channels: u32, duration_s: f64) -> Self {
        self.metadata.sample_rate = Some(sample_rate);
        self.metadata.channels = Some(channels);
        self.metadata.duration_s = Some(duration_s);
        self
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json_str = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json_str)
            .with_context(|| format!("Failed to write fingerprint file: {}", path.display()))?;
        Ok(())
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fingerprint file: {}", path.display()))?;
        let fp_file: FpJsonFile = serde_json::from_str(&json_str)
            .with_context(|| format!("Invalid JSON fingerprint file: {}", path.display()))?;
        Ok(fp_file)
    }

    /// Load from fpcalc `-raw` text output
    pub fn load_fpcalc(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fingerprint file: {}", path.display()))?;
        let parsed = parse_fpcalc(&text)
            .with_context(|| format!("Invalid fpcalc output: {}", path.display()))?;

        let filename = parsed.file.clone().unwrap_or_else(|| file_name(path));
        let mut fp_file = Self::new(
            path.display().to_string(),
            filename,
            "CHROMAPRINT",
            parsed.fingerprint,
        );
        fp_file.metadata.duration_s = parsed.duration;
        Ok(fp_file)
    }

    /// Load from either format, chosen by file extension
    pub fn load_auto(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load(path),
            _ => {
                log::debug!("Reading {} as fpcalc output", path.display());
                Self::load_fpcalc(path)
            }
        }
    }

    /// Number of subfingerprints
    pub fn len(&self) -> usize {
        self.fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprint.is_empty()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

//! TOML configuration
//!
//! ```toml
//! [compare]
//! match_threshold = 0.95
//!
//! [capture]
//! channels = 2
//! rate = 44100
//! max_seconds = 120
//!
//! [image]
//! scale = 4
//! ```

use crate::compare::MATCH_THRESHOLD;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FpkitConfig {
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

/// Comparison settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompareConfig {
    /// Score at or above which two fingerprints count as the same recording
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
        }
    }
}

fn default_match_threshold() -> f64 {
    MATCH_THRESHOLD
}

/// Raw audio description used when fingerprinting PCM files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    #[serde(default = "default_channels")]
    pub channels: u32,
    #[serde(default = "default_rate")]
    pub rate: u32,
    /// 0 reads the whole stream
    #[serde(default = "default_max_seconds")]
    pub max_seconds: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            rate: default_rate(),
            max_seconds: default_max_seconds(),
        }
    }
}

fn default_channels() -> u32 {
    2
}
fn default_rate() -> u32 {
    44100
}
fn default_max_seconds() -> u32 {
    120
}

/// Bitmap output settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageConfig {
    /// Pixels per bit, in both directions
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

/// Largest accepted pixels-per-bit value
pub const MAX_IMAGE_SCALE: u32 = 64;

fn default_scale() -> u32 {
    1
}

impl FpkitConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: FpkitConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.compare.match_threshold) {
            anyhow::bail!("match_threshold must be within [0, 1]");
        }
        if self.capture.channels == 0 {
            anyhow::bail!("channels must be > 0");
        }
        if self.capture.rate == 0 {
            anyhow::bail!("rate must be > 0");
        }
        if self.image.scale == 0 || self.image.scale > MAX_IMAGE_SCALE {
            anyhow::bail!("image scale must be within [1, {}]", MAX_IMAGE_SCALE);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FpkitConfig::default();
        assert_eq!(config.compare.match_threshold, 0.95);
        assert_eq!(config.capture.channels, 2);
        assert_eq!(config.capture.rate, 44100);
        assert_eq!(config.capture.max_seconds, 120);
        assert_eq!(config.image.scale, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let toml_str = r#"
            [compare]
            match_threshold = 0.9

            [capture]
            channels = 1
        "#;

        let config: FpkitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.compare.match_threshold, 0.9);
        assert_eq!(config.capture.channels, 1);
        assert_eq!(config.capture.rate, 44100);
        assert_eq!(config.image.scale, 1);
    }

    #[test]
    fn test_empty_toml() {
        let config: FpkitConfig = toml::from_str("").unwrap();
        assert_eq!(config.compare.match_threshold, MATCH_THRESHOLD);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FpkitConfig::default();
        config.compare.match_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = FpkitConfig::default();
        config.image.scale = 0;
        assert!(config.validate().is_err());

        let mut config = FpkitConfig::default();
        config.image.scale = MAX_IMAGE_SCALE + 1;
        assert!(config.validate().is_err());
        config.image.scale = MAX_IMAGE_SCALE;
        assert!(config.validate().is_ok());

        let mut config = FpkitConfig::default();
        config.capture.rate = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = FpkitConfig::load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.capture.rate, 44100);
    }
}

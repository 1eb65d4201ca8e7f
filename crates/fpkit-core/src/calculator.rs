//! Fingerprint calculator capability
//!
//! A `Calculator` turns raw audio into fingerprints. The comparison code
//! never depends on a concrete backend, it only consumes the resulting
//! integer sequences.

use crate::error::CalculatorError;
use std::io::Read;

/// Bytes per sample of the raw PCM stream (signed 16-bit)
pub const BYTES_PER_SAMPLE: u64 = 2;

/// Description of a raw audio stream
pub struct RawInfo<'a> {
    /// Audio data stream (interleaved signed 16-bit little-endian PCM)
    pub src: &'a mut dyn Read,
    /// Number of channels of the audio stream
    pub channels: u32,
    /// Sampling rate, e.g. 44100
    pub rate: u32,
    /// Maximum number of seconds taken from the stream, 0 for all of it
    pub max_seconds: u32,
}

impl<'a> RawInfo<'a> {
    pub fn new(src: &'a mut dyn Read, channels: u32, rate: u32, max_seconds: u32) -> Self {
        Self {
            src,
            channels,
            rate,
            max_seconds,
        }
    }

    /// Check channel count and sample rate
    pub fn validate(&self) -> Result<(), CalculatorError> {
        if self.channels == 0 {
            return Err(CalculatorError::InvalidInput(
                "channel count must be > 0".to_string(),
            ));
        }
        if self.rate == 0 {
            return Err(CalculatorError::InvalidInput(
                "sample rate must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of bytes covered by `max_seconds`, `None` when unlimited
    pub fn byte_limit(&self) -> Option<u64> {
        if self.max_seconds == 0 {
            return None;
        }
        Some(
            u64::from(self.rate)
                * u64::from(self.channels)
                * BYTES_PER_SAMPLE
                * u64::from(self.max_seconds),
        )
    }
}

impl std::fmt::Debug for RawInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawInfo")
            .field("channels", &self.channels)
            .field("rate", &self.rate)
            .field("max_seconds", &self.max_seconds)
            .finish_non_exhaustive()
    }
}

/// Calculates acoustic fingerprints from raw audio, either as raw
/// subfingerprints or as an encoded string
pub trait Calculator {
    /// Encoded (compressed, base64) fingerprint
    fn fingerprint(&self, info: RawInfo<'_>) -> Result<String, CalculatorError>;

    /// Raw subfingerprints
    fn raw_fingerprint(&self, info: RawInfo<'_>) -> Result<Vec<i32>, CalculatorError>;
}

//! fpkit Core - Acoustic Fingerprint Comparison Library
//!
//! Compares and visualizes acoustic fingerprints: sequences of 32-bit
//! subfingerprints produced by an external fingerprinting algorithm.

pub mod calculator;
#[cfg(feature = "chromaprint")]
pub mod chromaprint;
pub mod compare;
pub mod config;
pub mod error;
pub mod image;

pub use calculator::{Calculator, RawInfo};
#[cfg(feature = "chromaprint")]
pub use chromaprint::ChromaprintCalculator;
pub use compare::{
    bit_error_count, distance, hamming, is_match, score_from_bit_errors, similarity,
    MATCH_THRESHOLD,
};
pub use config::FpkitConfig;
pub use error::{CalculatorError, CompareError};
pub use image::{render_distance_image, render_image, BitImage};

/// Number of bits in one subfingerprint
pub const BITS_PER_SUBFINGERPRINT: usize = 32;

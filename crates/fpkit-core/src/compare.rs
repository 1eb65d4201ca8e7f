//! Fingerprint comparison
//!
//! Similarity is the normalized inverse of the total Hamming distance
//! between two equal-length fingerprints: `1 - D / (len * 32)`.

use crate::error::CompareError;
use crate::BITS_PER_SUBFINGERPRINT;

#[cfg(test)]
mod tests;

/// Score at or above which two fingerprints are usually considered
/// to be the same recording
pub const MATCH_THRESHOLD: f64 = 0.95;

/// Number of differing bits between two subfingerprints
#[inline]
pub fn hamming(a: i32, b: i32) -> u32 {
    ((a ^ b) as u32).count_ones()
}

fn check_lengths(a: &[i32], b: &[i32]) -> Result<(), CompareError> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Total number of differing bits across two fingerprints
pub fn bit_error_count(a: &[i32], b: &[i32]) -> Result<u64, CompareError> {
    check_lengths(a, b)?;

    Ok(a.iter()
        .zip(b)
        .map(|(&x, &y)| u64::from(hamming(x, y)))
        .sum())
}

/// Similarity of two fingerprints as a value from 0 to 1.
///
/// 1.0 means every bit agrees, 0.0 means every bit differs. Two empty
/// fingerprints are identical and score 1.0.
pub fn similarity(a: &[i32], b: &[i32]) -> Result<f64, CompareError> {
    let dist = bit_error_count(a, b)?;
    Ok(score_from_bit_errors(dist, a.len()))
}

/// Similarity score for `bit_errors` differing bits over fingerprints of
/// `len` subfingerprints each
pub fn score_from_bit_errors(bit_errors: u64, len: usize) -> f64 {
    if len == 0 {
        return 1.0;
    }

    let total_bits = (len * BITS_PER_SUBFINGERPRINT) as f64;
    let score = 1.0 - bit_errors as f64 / total_bits;
    debug_assert!((0.0..=1.0).contains(&score), "score out of range: {score}");

    score
}

/// Element-wise XOR of two fingerprints
pub fn distance(a: &[i32], b: &[i32]) -> Result<Vec<i32>, CompareError> {
    check_lengths(a, b)?;

    Ok(a.iter().zip(b).map(|(&x, &y)| x ^ y).collect())
}

/// Whether `score` reaches `threshold`
pub fn is_match(score: f64, threshold: f64) -> bool {
    score >= threshold
}

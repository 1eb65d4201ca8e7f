//! JSON output formatting

use anyhow::Result;
use fpkit_core::{bit_error_count, distance, is_match, score_from_bit_errors};
use serde::Serialize;

/// Result of comparing two fingerprint files
#[derive(Debug, Serialize)]
pub struct CompareOutput {
    pub query: String,
    pub reference: String,
    pub length: usize,
    pub score: f64,
    pub bit_errors: u64,
    pub threshold: f64,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Vec<i32>>,
}

impl CompareOutput {
    /// Compare two fingerprints; fails on length mismatch
    pub fn build(
        query: String,
        reference: String,
        a: &[i32],
        b: &[i32],
        threshold: f64,
        with_distance: bool,
    ) -> Result<Self> {
        let bit_errors = bit_error_count(a, b)?;
        let score = score_from_bit_errors(bit_errors, a.len());
        let distance = if with_distance {
            Some(distance(a, b)?)
        } else {
            None
        };

        Ok(Self {
            query,
            reference,
            length: a.len(),
            score,
            bit_errors,
            threshold,
            matched: is_match(score, threshold),
            distance,
        })
    }
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}

//! Error types

use thiserror::Error;

/// Failure of a pairwise fingerprint operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("unable to compare fingerprints with different length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}

/// Failure reported by a fingerprint calculator backend
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("invalid audio description: {0}")]
    InvalidInput(String),

    #[error("failed to read audio stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("fingerprinting engine error: {0}")]
    Engine(String),

    #[error("no fingerprint produced (audio too short?)")]
    NoFingerprint,
}

//! fpcalc `-raw` text output
//!
//! ```text
//! FILE=song.flac
//! DURATION=215
//! FINGERPRINT=3472381919,3472382943,-822584353
//! ```
//!
//! fpcalc prints subfingerprints as unsigned integers; both signed and
//! unsigned spellings are accepted and reinterpreted as `i32` bit patterns.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("invalid number {value:?} in {field}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("subfingerprint {0} does not fit in 32 bits")]
    OutOfRange(i64),

    #[error("malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Parsed fpcalc output
#[derive(Debug, Clone, PartialEq)]
pub struct FpcalcOutput {
    pub file: Option<String>,
    /// Duration of the fingerprinted audio in seconds
    pub duration: Option<f64>,
    pub fingerprint: Vec<i32>,
}

/// Parse one subfingerprint, accepting the full i32 and u32 ranges
fn parse_subfingerprint(token: &str) -> Result<i32, ParseError> {
    let value: i64 = token.parse().map_err(|_| ParseError::InvalidNumber {
        field: "FINGERPRINT",
        value: token.to_string(),
    })?;

    if value < i64::from(i32::MIN) || value > i64::from(u32::MAX) {
        return Err(ParseError::OutOfRange(value));
    }
    // Values above i32::MAX wrap to their two's complement bit pattern
    Ok(value as u32 as i32)
}

/// Parse fpcalc `-raw` output
pub fn parse_fpcalc(text: &str) -> Result<FpcalcOutput, ParseError> {
    let mut file = None;
    let mut duration = None;
    let mut fingerprint = None;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| ParseError::MalformedLine {
            line: idx + 1,
            content: line.to_string(),
        })?;

        match key.trim() {
            "FILE" => file = Some(value.to_string()),
            "DURATION" => {
                let secs = value.trim().parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    field: "DURATION",
                    value: value.to_string(),
                })?;
                duration = Some(secs);
            }
            "FINGERPRINT" => {
                // fpcalc prints one block per input file; only one is accepted
                if fingerprint.is_some() {
                    return Err(ParseError::MalformedLine {
                        line: idx + 1,
                        content: line.to_string(),
                    });
                }
                let value = value.trim();
                let subs = if value.is_empty() {
                    Vec::new()
                } else {
                    value
                        .split(',')
                        .map(|t| parse_subfingerprint(t.trim()))
                        .collect::<Result<Vec<_>, _>>()?
                };
                fingerprint = Some(subs);
            }
            other => log::debug!("Ignoring fpcalc field {}", other),
        }
    }

    Ok(FpcalcOutput {
        file,
        duration,
        fingerprint: fingerprint.ok_or(ParseError::MissingField("FINGERPRINT"))?,
    })
}

impl fmt::Display for FpcalcOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            writeln!(f, "FILE={}", file)?;
        }
        if let Some(duration) = self.duration {
            writeln!(f, "DURATION={}", duration)?;
        }
        write!(f, "FINGERPRINT=")?;
        for (i, sub) in self.fingerprint.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", *sub as u32)?;
        }
        writeln!(f)
    }
}

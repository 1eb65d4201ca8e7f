//! Chromaprint-backed calculator
//!
//! Streams interleaved 16-bit PCM into the Chromaprint fingerprinter. The
//! encoded form is the compressed fingerprint in URL-safe base64 without
//! padding, the same string fpcalc prints and AcoustID accepts.

use crate::calculator::{Calculator, RawInfo, BYTES_PER_SAMPLE};
use crate::error::CalculatorError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rusty_chromaprint::{Configuration, FingerprintCompressor, Fingerprinter};
use std::io::{ErrorKind, Read};

/// Size of the read buffer in bytes
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Calculator using the pure-Rust Chromaprint port
pub struct ChromaprintCalculator {
    config: Configuration,
}

impl ChromaprintCalculator {
    /// Calculator with the AcoustID-compatible preset
    pub fn new() -> Self {
        Self {
            config: Configuration::preset_test2(),
        }
    }

    /// Calculator with a custom Chromaprint configuration
    pub fn with_config(config: Configuration) -> Self {
        Self { config }
    }

    /// Compress and encode an already calculated raw fingerprint
    pub fn encode(&self, raw: &[i32]) -> String {
        let subs: Vec<u32> = raw.iter().map(|&sub| sub as u32).collect();
        let compressed = FingerprintCompressor::from(&self.config).compress(&subs);
        URL_SAFE_NO_PAD.encode(compressed)
    }

    fn compute(&self, info: RawInfo<'_>) -> Result<Vec<u32>, CalculatorError> {
        info.validate()?;

        let mut printer = Fingerprinter::new(&self.config);
        printer
            .start(info.rate, info.channels)
            .map_err(|e| CalculatorError::Engine(format!("failed to start fingerprinter: {:?}", e)))?;

        let limit = info.byte_limit();
        let consumed = match limit {
            Some(limit) => feed(&mut printer, &mut info.src.take(limit), info.channels)?,
            None => feed(&mut printer, info.src, info.channels)?,
        };
        printer.finish();

        log::debug!(
            "Consumed {} bytes ({} channels @ {}Hz, limit {:?})",
            consumed,
            info.channels,
            info.rate,
            limit
        );

        let raw = printer.fingerprint();
        if raw.is_empty() {
            return Err(CalculatorError::NoFingerprint);
        }

        log::info!("Calculated fingerprint with {} subfingerprints", raw.len());
        Ok(raw.to_vec())
    }
}

impl Default for ChromaprintCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Feed the whole stream to the fingerprinter, returning the byte count.
///
/// Only whole frames (one sample per channel) are handed to the
/// fingerprinter; bytes of a partial frame wait for the next read. A
/// partial frame at the end of the stream is dropped.
fn feed<R: Read + ?Sized>(
    printer: &mut Fingerprinter,
    src: &mut R,
    channels: u32,
) -> Result<u64, CalculatorError> {
    let frame_bytes = channels as usize * BYTES_PER_SAMPLE as usize;
    let mut buf = vec![0u8; READ_BUFFER_SIZE];
    let mut pending: Vec<u8> = Vec::with_capacity(READ_BUFFER_SIZE + frame_bytes);
    let mut samples: Vec<i16> = Vec::with_capacity(READ_BUFFER_SIZE / 2 + channels as usize);
    let mut total = 0u64;

    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        total += n as u64;
        pending.extend_from_slice(&buf[..n]);

        let whole = pending.len() - pending.len() % frame_bytes;
        if whole == 0 {
            continue;
        }

        samples.clear();
        samples.extend(
            pending[..whole]
                .chunks_exact(2)
                .map(|c| i16::from_le_bytes([c[0], c[1]])),
        );
        printer.consume(&samples);
        pending.drain(..whole);
    }

    if !pending.is_empty() {
        log::debug!("Dropping {} bytes of a partial trailing frame", pending.len());
    }

    Ok(total)
}

impl Calculator for ChromaprintCalculator {
    fn fingerprint(&self, info: RawInfo<'_>) -> Result<String, CalculatorError> {
        let raw = self.raw_fingerprint(info)?;
        Ok(self.encode(&raw))
    }

    fn raw_fingerprint(&self, info: RawInfo<'_>) -> Result<Vec<i32>, CalculatorError> {
        let raw = self.compute(info)?;
        Ok(raw.into_iter().map(|sub| sub as i32).collect())
    }
}

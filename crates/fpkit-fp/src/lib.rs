//! fpkit fingerprint file formats

pub mod fpcalc;
pub mod json_format;

pub use fpcalc::{parse_fpcalc, FpcalcOutput, ParseError};
pub use json_format::{FpJsonFile, FpJsonMetadata, FORMAT_VERSION};

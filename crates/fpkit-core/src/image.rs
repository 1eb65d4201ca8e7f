//! Bitmap rendering of fingerprints
//!
//! Each column is one subfingerprint, each row one bit position: bit 0
//! maps to row 0 and bit 31 to row 31. Set bits are white.

use crate::compare::distance;
use crate::error::CompareError;
use crate::BITS_PER_SUBFINGERPRINT;

/// Monochrome pixel grid, `true` = white
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitImage {
    width: usize,
    pixels: Vec<bool>,
}

impl BitImage {
    /// All-black image of the given width and the fixed 32-row height
    pub fn new(width: usize) -> Self {
        Self {
            width,
            pixels: vec![false; width * BITS_PER_SUBFINGERPRINT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        BITS_PER_SUBFINGERPRINT
    }

    /// Pixel at column `x`, row `y`; `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height() {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Whether the pixel is white; out-of-range pixels are black
    pub fn is_white(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    fn set(&mut self, x: usize, y: usize, white: bool) {
        self.pixels[y * self.width + x] = white;
    }

    /// Rows from top (bit 0) to bottom (bit 31)
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks() panics on a zero chunk size
        let width = self.width.max(1);
        self.pixels
            .chunks(width)
            .take(if self.width == 0 { 0 } else { BITS_PER_SUBFINGERPRINT })
    }

    /// Number of white pixels
    pub fn set_bits(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

/// Render a fingerprint as a 32-row barcode
pub fn render_image(fprint: &[i32]) -> BitImage {
    let mut image = BitImage::new(fprint.len());

    for (x, &sub) in fprint.iter().enumerate() {
        let bits = sub as u32;
        for y in 0..BITS_PER_SUBFINGERPRINT {
            image.set(x, y, (bits >> y) & 1 == 1);
        }
    }

    image
}

/// Render the bitwise difference of two fingerprints; white pixels mark
/// the bits where they disagree
pub fn render_distance_image(a: &[i32], b: &[i32]) -> Result<BitImage, CompareError> {
    let dist = distance(a, b)?;
    Ok(render_image(&dist))
}

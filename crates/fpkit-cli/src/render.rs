//! PNG encoding of fingerprint bitmaps

use anyhow::{Context, Result};
use fpkit_core::BitImage;
use image::{GrayImage, Luma};
use std::path::Path;

const WHITE: Luma<u8> = Luma([0xFF]);
const BLACK: Luma<u8> = Luma([0x00]);

/// Scaled image side length, `None` if it does not fit in `u32`
fn scaled(len: usize, scale: u32) -> Option<u32> {
    u32::try_from(len).ok()?.checked_mul(scale)
}

/// Convert to an 8-bit grayscale image, each bit drawn as a
/// `scale` x `scale` block
pub fn to_gray_image(bits: &BitImage, scale: u32) -> Result<GrayImage> {
    let scale = scale.max(1);
    let (width, height) = match (scaled(bits.width(), scale), scaled(bits.height(), scale)) {
        (Some(w), Some(h)) => (w, h),
        _ => anyhow::bail!(
            "Image of {}x{} bits at scale {} is too large",
            bits.width(),
            bits.height(),
            scale
        ),
    };

    Ok(GrayImage::from_fn(width, height, |x, y| {
        if bits.is_white((x / scale) as usize, (y / scale) as usize) {
            WHITE
        } else {
            BLACK
        }
    }))
}

/// Write the bitmap as PNG
pub fn save_png(bits: &BitImage, scale: u32, path: &Path) -> Result<()> {
    if bits.width() == 0 {
        anyhow::bail!("Cannot write an image of an empty fingerprint");
    }

    to_gray_image(bits, scale)?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write image: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpkit_core::render_image;

    #[test]
    fn test_gray_image_pixels() {
        let gray = to_gray_image(&render_image(&[1, 2]), 1).unwrap();

        assert_eq!(gray.dimensions(), (2, 32));
        assert_eq!(gray.get_pixel(0, 0), &WHITE);
        assert_eq!(gray.get_pixel(1, 0), &BLACK);
        assert_eq!(gray.get_pixel(1, 1), &WHITE);
        assert_eq!(gray.get_pixel(0, 31), &BLACK);
    }

    #[test]
    fn test_gray_image_scaled() {
        let gray = to_gray_image(&render_image(&[1]), 3).unwrap();

        assert_eq!(gray.dimensions(), (3, 96));
        assert_eq!(gray.get_pixel(2, 2), &WHITE);
        assert_eq!(gray.get_pixel(2, 3), &BLACK);
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fp.png");

        save_png(&render_image(&[-1, 0, 5]), 2, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(loaded.dimensions(), (6, 64));
        assert_eq!(loaded.get_pixel(0, 63), &WHITE);
        assert_eq!(loaded.get_pixel(2, 0), &BLACK);
    }

    #[test]
    fn test_save_empty_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save_png(&render_image(&[]), 1, &dir.path().join("empty.png")).is_err());
    }

    #[test]
    fn test_oversized_scale_is_rejected() {
        let bits = render_image(&[1]);
        assert!(to_gray_image(&bits, 1 << 28).is_err());
        assert!(to_gray_image(&bits, u32::MAX).is_err());

        let dir = tempfile::tempdir().unwrap();
        assert!(save_png(&bits, 1 << 28, &dir.path().join("huge.png")).is_err());
    }
}

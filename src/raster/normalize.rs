//! Square canvas normalization for reference images

use crate::io::error::Result;
use crate::raster::RasterImage;
use image::{Rgba, RgbaImage, imageops};

/// Pad an image onto a centered square white canvas
///
/// The output side length is the larger of the input dimensions. Content is
/// composited at its native size, never scaled; transparency blends over the
/// white fill. An already-square input is returned visually unchanged,
/// re-encoded as PNG.
///
/// # Errors
///
/// Returns `InvalidImageFormat` if the input bytes cannot be decoded
pub fn pad_to_square(input: &RasterImage) -> Result<RasterImage> {
    let source = input.decode()?.to_rgba8();
    let (width, height) = source.dimensions();
    let size = width.max(height);

    // White background is an absolute requirement of the generation contract
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));

    let x = i64::from((size - width) / 2);
    let y = i64::from((size - height) / 2);
    imageops::overlay(&mut canvas, &source, x, y);

    RasterImage::from_pixels(&canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_is_rejected() {
        let not_an_image = RasterImage::from_encoded_bytes(vec![0x00, 0x01, 0x02, 0x03]);

        assert!(pad_to_square(&not_an_image).is_err());
    }

    #[test]
    fn test_portrait_centering_offsets() {
        let source = RgbaImage::from_pixel(300, 450, Rgba([200, 40, 40, 255]));
        let input = RasterImage::from_pixels(&source).unwrap();

        let normalized = pad_to_square(&input).unwrap();
        let pixels = normalized.decode().unwrap().to_rgba8();

        assert_eq!(pixels.dimensions(), (450, 450));
        // Content starts 75 px in from the left, flush with the top
        assert_eq!(*pixels.get_pixel(74, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*pixels.get_pixel(75, 0), Rgba([200, 40, 40, 255]));
        assert_eq!(*pixels.get_pixel(374, 449), Rgba([200, 40, 40, 255]));
        assert_eq!(*pixels.get_pixel(375, 449), Rgba([255, 255, 255, 255]));
    }
}

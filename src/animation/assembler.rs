//! GIF encoding of frame sequences

use crate::io::error::{Result, SpriteError, invalid_parameter};
use crate::raster::FrameSequence;
use image::codecs::gif::{GifEncoder, Repeat};
use image::imageops::{self, FilterType};
use image::{Delay, Frame};
use std::path::Path;

/// Binary-encoded looping animation artifact
#[derive(Debug, Clone)]
pub struct Animation {
    bytes: Vec<u8>,
}

impl Animation {
    /// Encoded GIF bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the animation, returning the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write the animation to disk
    ///
    /// # Errors
    ///
    /// Returns a file system error if the write fails
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes).map_err(|e| SpriteError::FileSystem {
            path: path.to_path_buf(),
            operation: "write animation",
            source: e,
        })
    }
}

/// Encode a frame sequence as an infinitely looping GIF
///
/// Every frame is displayed for `interval_ms` before advancing. Frames whose
/// native size differs from the target dimensions are rescaled with
/// nearest-neighbor sampling to keep pixel edges crisp.
///
/// # Errors
///
/// Returns `InvalidParameter` for non-positive target dimensions,
/// `InvalidImageFormat` if a frame fails to decode, and
/// `EncodingUnavailable` if the GIF codec cannot produce the artifact.
/// No partial animation is ever returned.
pub fn assemble_gif(
    frames: &FrameSequence,
    frame_width: u32,
    frame_height: u32,
    interval_ms: u32,
) -> Result<Animation> {
    if frame_width == 0 {
        return Err(invalid_parameter(
            "frame-width",
            &frame_width,
            &"must be positive",
        ));
    }
    if frame_height == 0 {
        return Err(invalid_parameter(
            "frame-height",
            &frame_height,
            &"must be positive",
        ));
    }

    let mut encoded = Vec::new();

    {
        let mut encoder = GifEncoder::new(&mut encoded);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| SpriteError::EncodingUnavailable {
                reason: e.to_string(),
            })?;

        for frame in frames.frames() {
            let pixels = frame.decode()?.to_rgba8();
            let pixels = if pixels.dimensions() == (frame_width, frame_height) {
                pixels
            } else {
                imageops::resize(&pixels, frame_width, frame_height, FilterType::Nearest)
            };

            let delay = Delay::from_numer_denom_ms(interval_ms, 1);
            encoder
                .encode_frame(Frame::from_parts(pixels, 0, 0, delay))
                .map_err(|e| SpriteError::EncodingUnavailable {
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(Animation { bytes: encoded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterImage;
    use image::{Rgba, RgbaImage};

    fn sequence_of(width: u32, height: u32) -> FrameSequence {
        let frames = (0..16u8)
            .map(|index| {
                let pixels = RgbaImage::from_pixel(width, height, Rgba([index * 10, 0, 0, 255]));
                RasterImage::from_pixels(&pixels).unwrap()
            })
            .collect();
        FrameSequence::new(frames, width, height).unwrap()
    }

    #[test]
    fn test_assemble_rejects_zero_width() {
        let frames = sequence_of(8, 8);

        assert!(assemble_gif(&frames, 0, 8, 100).is_err());
    }

    #[test]
    fn test_assemble_produces_gif_signature() {
        let frames = sequence_of(8, 8);

        let animation = assemble_gif(&frames, 8, 8, 100).unwrap();
        assert_eq!(&animation.as_bytes()[0..6], b"GIF89a");
    }

    #[test]
    fn test_assemble_loops_infinitely() {
        let frames = sequence_of(8, 8);

        let animation = assemble_gif(&frames, 8, 8, 100).unwrap();
        let looped = animation
            .as_bytes()
            .windows(11)
            .any(|window| window == b"NETSCAPE2.0");
        assert!(looped, "GIF must carry the infinite-loop extension");
    }
}

//! Core image value types shared across the pipeline

use crate::io::configuration::FRAME_COUNT;
use crate::io::error::{Result, SpriteError, invalid_parameter};
use crate::raster::data_uri;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Self-contained encoded image payload
///
/// Holds encoded bytes: PNG for everything the pipeline produces, any
/// decodable format for user input. Immutable once created; every
/// transformation yields a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    bytes: Vec<u8>,
}

impl RasterImage {
    /// Wrap already-encoded image bytes
    pub const fn from_encoded_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Encode an RGBA pixel buffer as a PNG payload
    ///
    /// # Errors
    ///
    /// Returns an error if in-memory PNG encoding fails
    pub fn from_pixels(pixels: &RgbaImage) -> Result<Self> {
        let mut buffer = Cursor::new(Vec::new());
        pixels
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| SpriteError::ImageEncode { source: e })?;

        Ok(Self {
            bytes: buffer.into_inner(),
        })
    }

    /// Parse from a `data:<mime>;base64,` URI or a bare base64 payload
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid base64
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        Ok(Self {
            bytes: data_uri::decode(uri)?,
        })
    }

    /// Decode the payload into pixel form
    ///
    /// # Errors
    ///
    /// Returns `InvalidImageFormat` if the bytes do not decode as an image
    pub fn decode(&self) -> Result<DynamicImage> {
        image::load_from_memory(&self.bytes)
            .map_err(|e| SpriteError::InvalidImageFormat { source: e })
    }

    /// Width and height of the decoded image
    ///
    /// # Errors
    ///
    /// Returns `InvalidImageFormat` if the bytes do not decode as an image
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let decoded = self.decode()?;
        Ok((decoded.width(), decoded.height()))
    }

    /// Raw encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type guessed from the encoded bytes, defaulting to PNG
    pub fn mime_type(&self) -> &'static str {
        image::guess_format(&self.bytes).map_or("image/png", |format| format.to_mime_type())
    }

    /// Render as a self-describing data URI
    pub fn to_data_uri(&self) -> String {
        data_uri::encode(&self.bytes, self.mime_type())
    }
}

/// An image known to encode a 4×4 grid of equally sized frames
///
/// Produced only by a successful generation response. The grid expectation
/// is a property of the generation contract, not a validated invariant:
/// slicing truncates sheets whose sides are not divisible by four.
#[derive(Debug, Clone)]
pub struct SpriteSheet(RasterImage);

impl SpriteSheet {
    /// Wrap a generated composite image
    pub const fn new(image: RasterImage) -> Self {
        Self(image)
    }

    /// The underlying encoded image
    pub const fn image(&self) -> &RasterImage {
        &self.0
    }

    /// Consume the sheet, returning the underlying image
    pub fn into_image(self) -> RasterImage {
        self.0
    }
}

/// Ordered sequence of exactly sixteen equally sized frames
///
/// Index `i` corresponds to grid position `(i / 4, i % 4)`: row-major,
/// left to right then top to bottom.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<RasterImage>,
    frame_width: u32,
    frame_height: u32,
}

impl FrameSequence {
    /// Build a sequence from frames sharing the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless exactly sixteen frames are supplied
    /// with positive dimensions
    pub fn new(frames: Vec<RasterImage>, frame_width: u32, frame_height: u32) -> Result<Self> {
        if frames.len() != FRAME_COUNT {
            return Err(invalid_parameter(
                "frames",
                &frames.len(),
                &format!("a frame sequence holds exactly {FRAME_COUNT} frames"),
            ));
        }
        if frame_width == 0 || frame_height == 0 {
            return Err(invalid_parameter(
                "frame-dimensions",
                &format!("{frame_width}x{frame_height}"),
                &"frame dimensions must be positive",
            ));
        }

        Ok(Self {
            frames,
            frame_width,
            frame_height,
        })
    }

    /// The frames in display order
    pub fn frames(&self) -> &[RasterImage] {
        &self.frames
    }

    /// Shared frame width in pixels
    pub const fn frame_width(&self) -> u32 {
        self.frame_width
    }

    /// Shared frame height in pixels
    pub const fn frame_height(&self) -> u32 {
        self.frame_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_frame(width: u32, height: u32) -> RasterImage {
        let pixels = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        RasterImage::from_pixels(&pixels).expect("PNG encoding should succeed")
    }

    #[test]
    fn test_pixel_roundtrip_preserves_dimensions() {
        let image = solid_frame(12, 7);

        assert_eq!(image.dimensions().unwrap(), (12, 7));
        assert_eq!(image.mime_type(), "image/png");
    }

    #[test]
    fn test_frame_sequence_requires_sixteen_frames() {
        let frames = vec![solid_frame(8, 8); 15];

        let result = FrameSequence::new(frames, 8, 8);
        assert!(result.is_err(), "15 frames must be rejected");
    }

    #[test]
    fn test_frame_sequence_rejects_zero_dimensions() {
        let frames = vec![solid_frame(8, 8); 16];

        let result = FrameSequence::new(frames, 0, 8);
        assert!(result.is_err(), "zero frame width must be rejected");
    }

    #[test]
    fn test_frame_sequence_preserves_order() {
        let mut frames = Vec::new();
        for index in 0..16u8 {
            let pixels = RgbaImage::from_pixel(4, 4, Rgba([index, 0, 0, 255]));
            frames.push(RasterImage::from_pixels(&pixels).unwrap());
        }

        let sequence = FrameSequence::new(frames, 4, 4).unwrap();

        for (index, frame) in sequence.frames().iter().enumerate() {
            let decoded = frame.decode().unwrap().to_rgba8();
            assert_eq!(decoded.get_pixel(0, 0)[0], index as u8);
        }
    }
}

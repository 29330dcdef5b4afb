//! Image value types and pixel geometry for the sprite pipeline
//!
//! This module contains the raster-related functionality including:
//! - Encoded image payloads and the sheet/frame data model
//! - Data URI encoding for self-describing payloads
//! - Square canvas normalization of reference images
//! - Sprite sheet slicing into ordered frames

/// Data URI encoding and prefix stripping for image payloads
pub mod data_uri;
/// Square canvas normalization for reference images
pub mod normalize;
/// Sprite sheet slicing and 4×4 grid geometry
pub mod slice;
/// Core image value types
pub mod types;

pub use types::{FrameSequence, RasterImage, SpriteSheet};

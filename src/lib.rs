//! Pixel-art sprite sheet animation pipeline
//!
//! The pipeline normalizes a reference character image onto a square white
//! canvas, asks a generative image model for a 4×4 sprite sheet of a
//! described motion, slices the returned composite into 16 ordered frames,
//! and assembles them into an infinitely looping GIF.

#![forbid(unsafe_code)]

/// Looping GIF assembly from frame sequences
pub mod animation;
/// Generation request client for the remote image model
pub mod generate;
/// Orchestration, configuration, progress display, and error handling
pub mod io;
/// Image value types, square normalization, and sprite sheet slicing
pub mod raster;

pub use io::error::{Result, SpriteError};

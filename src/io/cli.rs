//! Command-line interface and pipeline orchestration

use crate::animation::assembler::assemble_gif;
use crate::generate::GenerationClient;
use crate::io::configuration::{
    ANIMATION_FILE_NAME, API_KEY_ENV, DEFAULT_API_BASE, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_MODEL,
    FRAMES_DIR_NAME, SHEET_FILE_NAME, SQUARE_SUFFIX,
};
use crate::io::error::{Result, SpriteError, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::raster::normalize::pad_to_square;
use crate::raster::slice::slice_into_frames;
use crate::raster::{FrameSequence, RasterImage};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "spritegen")]
#[command(
    author,
    version,
    about = "Generate pixel-art sprite sheets and looping GIFs from a reference image"
)]
/// Command-line arguments for the sprite generation tool
pub struct Cli {
    /// Reference character image (PNG, JPEG, or WebP)
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Motion description, e.g. "wave" or "jump in place"
    #[arg(short, long)]
    pub prompt: String,

    /// Generation API key (falls back to the GEMINI_API_KEY environment variable)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Generation model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Generation API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Display time per frame in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_FRAME_INTERVAL_MS)]
    pub interval_ms: u32,

    /// Output directory (defaults to the input image's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write the 16 individual frames as PNG files
    #[arg(short, long)]
    pub export_frames: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the credential from the flag or the environment
    ///
    /// The environment is consulted once here; the core pipeline never
    /// reads ambient state.
    ///
    /// # Errors
    ///
    /// Returns an error when neither source yields a non-empty key
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = &self.api_key {
            if !key.trim().is_empty() {
                return Ok(key.clone());
            }
        }

        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(invalid_parameter(
                "api-key",
                &"<empty>",
                &format!("pass --api-key or set {API_KEY_ENV}"),
            )),
        }
    }

    fn resolve_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            self.image
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }

    fn square_file_name(&self) -> String {
        let stem = self.image.file_stem().unwrap_or_default();
        format!("{}{SQUARE_SUFFIX}.png", stem.to_string_lossy())
    }
}

/// Sequences the pipeline: load, normalize, generate, slice, assemble, write
pub struct SpritePipeline {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SpritePipeline {
    /// Create a new pipeline from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the full pipeline
    ///
    /// # Errors
    ///
    /// Returns the first failure. When GIF encoding is the failing step the
    /// sprite sheet and frames have already been written and stay usable.
    // Allow print for user feedback on results and remediation hints
    #[allow(clippy::print_stderr)]
    pub async fn run(&mut self) -> Result<()> {
        let api_key = self.cli.resolve_api_key()?;
        if self.cli.prompt.trim().is_empty() {
            return Err(invalid_parameter(
                "prompt",
                &self.cli.prompt,
                &"enter a movement description",
            ));
        }

        let output_dir = self.cli.resolve_output_dir();
        fs::create_dir_all(&output_dir).map_err(|e| SpriteError::FileSystem {
            path: output_dir.clone(),
            operation: "create directory",
            source: e,
        })?;

        self.start_stage("Processing reference image");
        let reference = load_reference(&self.cli.image)?;
        let normalized = pad_to_square(&reference)?;
        let square_path = output_dir.join(self.cli.square_file_name());
        write_bytes(&square_path, normalized.as_bytes(), "write normalized reference")?;
        self.complete_stage("Reference image normalized");

        self.start_stage("Generating sprite sheet (this can take tens of seconds)");
        let client = GenerationClient::new(self.cli.api_base.clone(), self.cli.model.clone());
        let sheet = match client
            .generate(&api_key, &normalized, &self.cli.prompt)
            .await
        {
            Ok(sheet) => sheet,
            Err(error) => {
                self.abandon_stage();
                if let Some(hint) = credential_hint(&error) {
                    eprintln!("{hint}");
                }
                return Err(error);
            }
        };
        let sheet_path = output_dir.join(SHEET_FILE_NAME);
        write_bytes(&sheet_path, sheet.image().as_bytes(), "write sprite sheet")?;
        self.complete_stage("Sprite sheet generated");

        self.start_stage("Slicing frames");
        let frames = slice_into_frames(&sheet)?;
        if self.cli.export_frames {
            export_frames(&output_dir, &frames)?;
        }
        self.complete_stage("Frames sliced");

        self.start_stage("Encoding animation");
        let animation = match assemble_gif(
            &frames,
            frames.frame_width(),
            frames.frame_height(),
            self.cli.interval_ms,
        ) {
            Ok(animation) => animation,
            Err(error) => {
                // The sheet and frames on disk stay usable without the GIF
                self.abandon_stage();
                eprintln!(
                    "Animation encoding failed; the sprite sheet at '{}' is still usable.",
                    sheet_path.display()
                );
                return Err(error);
            }
        };
        let animation_path = output_dir.join(ANIMATION_FILE_NAME);
        animation.write_to(&animation_path)?;
        self.complete_stage("Animation encoded");

        self.finish();
        if !self.cli.quiet {
            eprintln!("Sprite sheet: {}", sheet_path.display());
            eprintln!("Animation:    {}", animation_path.display());
        }

        Ok(())
    }

    fn start_stage(&mut self, message: &str) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage(message);
        }
    }

    fn complete_stage(&mut self, message: &str) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_stage(message);
        }
    }

    fn abandon_stage(&mut self) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.abandon_stage();
        }
    }

    fn finish(&mut self) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
    }
}

/// Remediation hint for credential-class service failures
///
/// The service reports an invalid key or a missing project as a not-found
/// entity; mapping that onto user guidance is an orchestration concern, so
/// it lives here rather than in the client.
fn credential_hint(error: &SpriteError) -> Option<&'static str> {
    match error {
        SpriteError::Service { message, .. }
            if message.contains("Requested entity was not found") =>
        {
            Some("The API key may be invalid or its project missing; supply a new key with --api-key.")
        }
        _ => None,
    }
}

fn load_reference(path: &Path) -> Result<RasterImage> {
    let bytes = fs::read(path).map_err(|e| SpriteError::FileSystem {
        path: path.to_path_buf(),
        operation: "read reference image",
        source: e,
    })?;

    // Decode eagerly so format problems surface with the file path attached
    image::load_from_memory(&bytes).map_err(|e| SpriteError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(RasterImage::from_encoded_bytes(bytes))
}

fn export_frames(output_dir: &Path, frames: &FrameSequence) -> Result<()> {
    let frames_dir = output_dir.join(FRAMES_DIR_NAME);
    fs::create_dir_all(&frames_dir).map_err(|e| SpriteError::FileSystem {
        path: frames_dir.clone(),
        operation: "create directory",
        source: e,
    })?;

    for (index, frame) in frames.frames().iter().enumerate() {
        let path = frames_dir.join(format!("frame_{index:02}.png"));
        write_bytes(&path, frame.as_bytes(), "write frame")?;
    }

    Ok(())
}

fn write_bytes(path: &Path, bytes: &[u8], operation: &'static str) -> Result<()> {
    fs::write(path, bytes).map_err(|e| SpriteError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_hint_matches_not_found_entity() {
        let error = SpriteError::Service {
            status: 404,
            message: "Requested entity was not found.".to_string(),
        };

        assert!(credential_hint(&error).is_some());
    }

    #[test]
    fn test_credential_hint_ignores_other_failures() {
        let error = SpriteError::Service {
            status: 500,
            message: "internal error".to_string(),
        };

        assert!(credential_hint(&error).is_none());
        assert!(credential_hint(&SpriteError::NoImageInResponse).is_none());
    }
}

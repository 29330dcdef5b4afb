//! Pipeline constants and runtime configuration defaults

// Sprite sheet geometry is fixed by the generation contract
/// Cells per row and per column in a generated sprite sheet
pub const GRID_DIMENSION: u32 = 4;

/// Total frames in a generated sprite sheet
pub const FRAME_COUNT: usize = (GRID_DIMENSION * GRID_DIMENSION) as usize;

// Animation timing
/// Default display time per frame in milliseconds (100 ms = 10 fps)
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 100;

// Generation service defaults
/// Base URL of the generation REST API
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Image generation model identifier
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Requested output aspect ratio
pub const ASPECT_RATIO: &str = "1:1";

// 1K is the standard tier for sprite work
/// Requested output resolution tier
pub const IMAGE_SIZE_TIER: &str = "1K";

/// Environment variable consulted when no API key flag is given
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

// Output artifact names, fixed to match the download contract
/// File name for the full sprite sheet
pub const SHEET_FILE_NAME: &str = "sprite_sheet.png";

/// File name for the assembled animation
pub const ANIMATION_FILE_NAME: &str = "animation.gif";

/// Suffix added to the normalized reference image file name
pub const SQUARE_SUFFIX: &str = "_square";

/// Directory name for exported individual frames
pub const FRAMES_DIR_NAME: &str = "frames";

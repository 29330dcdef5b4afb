//! Error types for the sprite generation pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum SpriteError {
    /// Input bytes could not be decoded as an image
    InvalidImageFormat {
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// In-memory image encoding failed
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// The generation service responded but produced no image payload
    ///
    /// The request succeeded at the transport level; the response simply
    /// contained no inline-image part. Not retried automatically.
    NoImageInResponse,

    /// The generation service response could not be interpreted
    MalformedResponse {
        /// Description of what was wrong with the response
        reason: String,
    },

    /// Animation codec support is missing or encoding failed
    ///
    /// Recoverable from the caller's perspective: the sprite sheet and raw
    /// frames remain usable even when GIF encoding fails.
    EncodingUnavailable {
        /// Description of the encoding failure
        reason: String,
    },

    /// The HTTP request itself failed (network, DNS, TLS)
    Transport {
        /// Underlying transport error
        source: reqwest::Error,
    },

    /// The generation service returned a non-success status
    Service {
        /// HTTP status code
        status: u16,
        /// Raw response body, preserved verbatim for caller classification
        message: String,
    },

    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImageFormat { source } => {
                write!(f, "Input could not be decoded as an image: {source}")
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode image: {source}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::NoImageInResponse => {
                write!(f, "No image generated in the response")
            }
            Self::MalformedResponse { reason } => {
                write!(f, "Malformed generation response: {reason}")
            }
            Self::EncodingUnavailable { reason } => {
                write!(f, "Animation encoding unavailable: {reason}")
            }
            Self::Transport { source } => {
                write!(f, "Generation request failed: {source}")
            }
            Self::Service { status, message } => {
                write!(f, "Generation service error ({status}): {message}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SpriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidImageFormat { source }
            | Self::ImageEncode { source }
            | Self::ImageLoad { source, .. } => Some(source),
            Self::Transport { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, SpriteError>;

impl From<image::ImageError> for SpriteError {
    fn from(err: image::ImageError) -> Self {
        Self::InvalidImageFormat { source: err }
    }
}

impl From<reqwest::Error> for SpriteError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport { source: err }
    }
}

impl From<std::io::Error> for SpriteError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SpriteError {
    SpriteError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed response error
pub fn malformed_response(reason: &impl ToString) -> SpriteError {
    SpriteError::MalformedResponse {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SpriteError::FileSystem {
            path: "/tmp/sheet.png".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    #[test]
    fn test_service_error_preserves_message() {
        let error = SpriteError::Service {
            status: 404,
            message: "Requested entity was not found.".to_string(),
        };

        let rendered = error.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Requested entity was not found."));
    }

    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("frame-width", &0, &"must be positive");

        let rendered = error.to_string();
        assert!(rendered.contains("frame-width"));
        assert!(rendered.contains("must be positive"));
    }
}

//! Error types for argument validation and image I/O

use crate::io::configuration::{EXIT_FAILURE, EXIT_USAGE_ERROR};
use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile flipping operations
#[derive(Debug)]
pub enum FlipError {
    /// Input path does not reference an existing regular file
    MissingInput {
        /// Path supplied on the command line
        path: PathBuf,
    },

    /// Tile size argument is not a positive integer
    InvalidTileSize {
        /// Raw argument as supplied
        value: String,
    },

    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or write the flipped image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Internal parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl FlipError {
    /// Whether this error came from argument validation rather than processing
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::MissingInput { .. } | Self::InvalidTileSize { .. })
    }

    /// Process exit code reported for this error
    pub const fn exit_code(&self) -> u8 {
        if self.is_usage_error() {
            EXIT_USAGE_ERROR
        } else {
            EXIT_FAILURE
        }
    }
}

impl fmt::Display for FlipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { .. } => write!(f, "please provide a filepath to an image"),
            Self::InvalidTileSize { .. } => write!(f, "please provide a valid integer tile size"),
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for FlipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile flipping results
pub type Result<T> = std::result::Result<T, FlipError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FlipError {
    FlipError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

//! Error types for pipeline operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum AbstractionError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the abstracted image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Engine parameter validation failed
    ///
    /// Raised before any buffer mutation; a degenerate configuration never
    /// produces a partially abstracted image.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source data doesn't meet engine requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// A region escaped the pixel buffer
    ///
    /// Indicates a bug in partition maintenance, not a recoverable user
    /// condition: every region produced by the split search must stay inside
    /// the canvas.
    RegionOutOfBounds {
        /// Inclusive region bounds as (`min_x`, `min_y`, `max_x`, `max_y`)
        bounds: (u32, u32, u32, u32),
        /// Buffer dimensions (width, height)
        dimensions: (u32, u32),
    },
}

impl fmt::Display for AbstractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::RegionOutOfBounds { bounds, dimensions } => {
                write!(
                    f,
                    "Region ({}, {})..({}, {}) escapes the {}x{} buffer",
                    bounds.0, bounds.1, bounds.2, bounds.3, dimensions.0, dimensions.1
                )
            }
        }
    }
}

impl std::error::Error for AbstractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, AbstractionError>;

impl From<image::ImageError> for AbstractionError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AbstractionError {
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
) -> AbstractionError {
    AbstractionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an internal-invariant error for a region escaping the buffer
pub const fn region_out_of_bounds(
    bounds: (u32, u32, u32, u32),
    dimensions: (u32, u32),
) -> AbstractionError {
    AbstractionError::RegionOutOfBounds { bounds, dimensions }
}

/// Create an error for an unusable CLI target path
pub fn target_error(msg: &str) -> AbstractionError {
    AbstractionError::InvalidParameter {
        parameter: "target",
        value: String::new(),
        reason: msg.to_string(),
    }
}

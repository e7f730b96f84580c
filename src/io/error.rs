//! Error types for catalog loading, configuration and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator setup and I/O operations
///
/// Anomalies inside the collapse loop itself (contradictions, malformed
/// constraints) never surface here; they degrade to a logged warning.
#[derive(Debug)]
pub enum GenerationError {
    /// Tile catalog does not meet generator requirements
    InvalidCatalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile index exceeds the catalog
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the catalog
        max_tiles: usize,
    },

    /// Input override names a tile the catalog doesn't contain
    UnknownTile {
        /// Name that failed to resolve
        name: String,
        /// Flat grid index of the override
        cell: usize,
    },

    /// Tileset file could not be parsed
    TilesetParse {
        /// Path to the tileset file
        path: PathBuf,
        /// Parser diagnostic
        reason: String,
    },

    /// Failed to save preview image to disk
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

    /// Output could not be serialized
    Serialization {
        /// Serializer diagnostic
        reason: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid tile catalog: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (catalog has {max_tiles} tiles)")
            }
            Self::UnknownTile { name, cell } => {
                write!(f, "Input override at cell {cell} names unknown tile '{name}'")
            }
            Self::TilesetParse { path, reason } => {
                write!(f, "Failed to parse tileset '{}': {reason}", path.display())
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
            Self::Serialization { reason } => {
                write!(f, "Serialization failed: {reason}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidCatalog {
        reason: reason.to_string(),
    }
}

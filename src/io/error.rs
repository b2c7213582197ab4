//! Error types and context management for tile generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// No (tile, rotation) pair fits the cell's resolved and boundary neighbors
    ///
    /// Terminal for the run: cells are never revisited, so the caller either
    /// aborts or retries with another seed.
    UnsatisfiableCell {
        /// Column of the offending cell
        x: usize,
        /// Row of the offending cell
        y: usize,
    },

    /// Candidate weights sum to zero, a negative or a non-finite value
    DegenerateWeights {
        /// Cell being resolved when the selection failed, if known
        cell: Option<[usize; 2]>,
        /// Number of candidates offered to the selector
        candidates: usize,
    },

    /// Tile definition rejected while building the catalog
    InvalidTileDefinition {
        /// Identity of the rejected tile
        tile: String,
        /// Description of what's wrong with the definition
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile index exceeds available tile set
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of available tiles
        max_tiles: usize,
    },

    /// Tile artwork cannot be used for rendering
    InvalidTileArtwork {
        /// Identity of the tile whose artwork was rejected
        tile: String,
        /// Description of the problem
        reason: String,
    },

    /// Generation stopped by the per-column observer
    Cancelled {
        /// Last fully resolved column
        column: usize,
    },

    /// Tile configuration could not be parsed
    Configuration {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying YAML error
        source: serde_yaml::Error,
    },

    /// Failed to load tile artwork from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save generated image to disk
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

    /// Logger could not be started
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsatisfiableCell { x, y } => {
                write!(f, "No tile fits cell ({x}, {y})")
            }
            Self::DegenerateWeights { cell, candidates } => {
                write!(
                    f,
                    "Candidate weights are degenerate across {candidates} candidates"
                )?;
                if let Some([x, y]) = cell {
                    write!(f, " at cell ({x}, {y})")?;
                }
                Ok(())
            }
            Self::InvalidTileDefinition { tile, reason } => {
                write!(f, "Invalid tile definition '{tile}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (tiles: {max_tiles})")
            }
            Self::InvalidTileArtwork { tile, reason } => {
                write!(f, "Invalid artwork for tile '{tile}': {reason}")
            }
            Self::Cancelled { column } => {
                write!(f, "Generation cancelled after column {column}")
            }
            Self::Configuration { path, source } => {
                write!(
                    f,
                    "Failed to parse configuration '{}': {source}",
                    path.display()
                )
            }
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
            Self::Logging { reason } => {
                write!(f, "Failed to start logger: {reason}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Configuration { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Grid coordinates `[x, y]` where the error occurred
    pub cell: Option<[usize; 2]>,
}

/// Enriches errors with the state of the fill
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the cell coordinates
    ///
    /// # Errors
    ///
    /// Propagates the original error with the cell context applied
    fn at_cell(self, x: usize, y: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GenerationError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only selection failures are raised without knowing their cell
            if let GenerationError::DegenerateWeights { cell, .. } = &mut error {
                if cell.is_none() {
                    *cell = context.cell;
                }
            }
            error
        })
    }

    fn at_cell(self, x: usize, y: usize) -> Result<T> {
        self.with_context(ErrorContext {
            cell: Some([x, y]),
        })
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

/// Create an invalid tile definition error
pub fn invalid_tile(tile: &impl ToString, reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidTileDefinition {
        tile: tile.to_string(),
        reason: reason.to_string(),
    }
}

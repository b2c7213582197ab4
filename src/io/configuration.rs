//! Runtime configuration defaults and the YAML tile configuration
//!
//! A configuration file lists the tile vocabulary:
//!
//! ```yaml
//! tiles:
//!   - filename: tiles/corner.png
//!     edges: [0, 1, 1, 0]
//!     rotations: [0, 1, 2, 3]
//!     weight: 2.5
//! ```
//!
//! `rotations` and `weight` are optional.

use crate::io::error::{GenerationError, Result};
use crate::spatial::tiles::{EdgeCode, TileCatalog, TileDefinition};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// Default values for configurable parameters
/// Configuration file read when none is given
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Image written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "output.png";

/// Default grid width in tiles
pub const DEFAULT_GRID_WIDTH: usize = 40;

/// Default grid height in tiles
pub const DEFAULT_GRID_HEIGHT: usize = 40;

/// Default side length of one rendered tile in pixels
pub const DEFAULT_TILE_PIXEL_SIZE: u32 = 15;

/// Default number of seeds tried before giving up on a dead end
pub const DEFAULT_ATTEMPTS: u32 = 1;

/// Log specification used when none is given
pub const DEFAULT_LOG_SPEC: &str = "warn";

// Safety limits to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Maximum allowed tile side length in pixels
pub const MAX_TILE_PIXEL_SIZE: u32 = 1024;

/// Maximum selection weight of a single tile
///
/// Keeps the summed weight of any cell's candidates finite.
pub const MAX_TILE_WEIGHT: f64 = 1e12;

/// One tile entry as written in the configuration file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileConfig {
    /// Artwork path, also used as the tile identity
    pub filename: String,
    /// Edge codes in `[up, right, down, left]` order
    pub edges: Vec<EdgeCode>,
    /// Allowed quarter-turn counts, all four when empty
    #[serde(default)]
    pub rotations: Vec<i32>,
    /// Selection weight, 1 when missing or not positive
    #[serde(default)]
    pub weight: f64,
}

/// Parsed configuration file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Tile vocabulary in file order
    #[serde(default)]
    pub tiles: Vec<TileConfig>,
}

impl Config {
    /// Parse a YAML document
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the document is not a valid tile list
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::parse(yaml, Path::new("<inline>"))
    }

    /// Read and parse a YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `Configuration`
    /// if it cannot be parsed
    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| GenerationError::FileSystem {
            path: path.to_path_buf(),
            operation: "read configuration",
            source: e,
        })?;
        Self::parse(&yaml, path)
    }

    fn parse(yaml: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| GenerationError::Configuration {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate every entry into a tile catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileDefinition` for the first malformed tile and
    /// `InvalidParameter` if the list is empty
    pub fn into_catalog(self) -> Result<TileCatalog> {
        let tiles = self
            .tiles
            .iter()
            .map(|tile| {
                TileDefinition::new(&tile.filename, &tile.edges, &tile.rotations, tile.weight)
            })
            .collect::<Result<Vec<_>>>()?;
        TileCatalog::new(tiles)
    }
}

/// Directory tile artwork paths are resolved against
pub fn artwork_base_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map_or_else(PathBuf::new, Path::to_path_buf)
}

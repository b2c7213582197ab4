//! Spatial data structures: the tile vocabulary and the grid it fills
//!
//! This module contains:
//! - Edge codes, sides, rotations and the validated tile catalog
//! - The cell grid with boundary-aware neighbor lookup

/// Cell grid and neighbor lookup
pub mod grid;
/// Tile definitions, rotations and the tile catalog
pub mod tiles;

pub use grid::{Cell, Grid, Neighbor, Placement};
pub use tiles::{EdgeCode, Edges, Rotation, Side, TileCatalog, TileDefinition};

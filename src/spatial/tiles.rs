//! Tile vocabulary: edge codes, rotations and the validated tile catalog
//!
//! Tiles are square and described only by the codes on their four edges.
//! Rotating a tile never changes those codes, it changes which side each
//! code faces.

use crate::io::configuration::MAX_TILE_WEIGHT;
use crate::io::error::{Result, invalid_parameter, invalid_tile};

/// Integer label on one side of a tile
pub type EdgeCode = i32;

/// Edge code of the open boundary surrounding the grid
pub const BOUNDARY_EDGE: EdgeCode = 0;

/// One side of a square cell, in clockwise order starting at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top edge
    Up = 0,
    /// Right edge
    Right = 1,
    /// Bottom edge
    Down = 2,
    /// Left edge
    Left = 3,
}

impl Side {
    /// All sides in index order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The side facing this one across a shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Position of this side in an edge tuple
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Side at `index`, wrapping modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Up,
            1 => Self::Right,
            2 => Self::Down,
            _ => Self::Left,
        }
    }
}

/// Number of quarter turns applied to a tile, always in `0..4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rotation(u8);

impl Rotation {
    /// Unrotated placement
    pub const IDENTITY: Self = Self(0);

    /// Every rotation step in ascending order
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    /// Build a rotation from a quarter-turn count, rejecting values outside `0..4`
    pub fn new(steps: i32) -> Option<Self> {
        u8::try_from(steps)
            .ok()
            .filter(|&s| s < 4)
            .map(Self)
    }

    /// Quarter-turn count
    pub const fn steps(self) -> u8 {
        self.0
    }
}

/// Edge codes of a tile indexed by [`Side`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edges([EdgeCode; 4]);

impl Edges {
    /// The synthetic tile standing in for everything outside the grid
    pub const BOUNDARY: Self = Self([BOUNDARY_EDGE; 4]);

    /// Edge codes in `[up, right, down, left]` order
    pub const fn new(codes: [EdgeCode; 4]) -> Self {
        Self(codes)
    }

    /// Code on an unrotated side
    pub const fn code(&self, side: Side) -> EdgeCode {
        match side {
            Side::Up => self.0[0],
            Side::Right => self.0[1],
            Side::Down => self.0[2],
            Side::Left => self.0[3],
        }
    }

    /// Code facing `side` once the tile is turned by `rotation`
    ///
    /// Rotation shifts the side index circularly: `edges[(side + rotation) % 4]`.
    pub const fn rotated(&self, rotation: Rotation, side: Side) -> EdgeCode {
        self.code(Side::from_index(side.index() + rotation.steps() as usize))
    }

    /// Raw codes in `[up, right, down, left]` order
    pub const fn codes(&self) -> [EdgeCode; 4] {
        self.0
    }
}

/// A validated tile: identity, edges, allowed rotations and selection weight
#[derive(Debug, Clone, PartialEq)]
pub struct TileDefinition {
    id: String,
    edges: Edges,
    rotations: Vec<Rotation>,
    weight: f64,
}

impl TileDefinition {
    /// Validate and normalize a raw tile description
    ///
    /// An empty rotation list allows all four steps, repeated rotations are
    /// collapsed and a non-positive (or NaN) weight becomes 1.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileDefinition` if the identity is empty, the edge list
    /// does not hold exactly four codes, a rotation lies outside `0..4` or the
    /// weight is infinite or exceeds `MAX_TILE_WEIGHT`
    pub fn new(id: &str, edges: &[EdgeCode], rotations: &[i32], weight: f64) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(invalid_tile(&"<unnamed>", &"tile identity is empty"));
        }

        let &[up, right, down, left] = edges else {
            return Err(invalid_tile(
                &id,
                &format!("expected 4 edge codes, found {}", edges.len()),
            ));
        };

        let mut allowed = Vec::with_capacity(4);
        for &steps in rotations {
            let rotation = Rotation::new(steps).ok_or_else(|| {
                invalid_tile(&id, &format!("rotation {steps} is outside 0..=3"))
            })?;
            if !allowed.contains(&rotation) {
                allowed.push(rotation);
            }
        }
        if allowed.is_empty() {
            allowed.extend(Rotation::ALL);
        }

        if weight.is_infinite() || weight > MAX_TILE_WEIGHT {
            return Err(invalid_tile(
                &id,
                &format!("weight {weight} must be finite and at most {MAX_TILE_WEIGHT}"),
            ));
        }
        let weight = if weight > 0.0 { weight } else { 1.0 };

        Ok(Self {
            id: id.to_string(),
            edges: Edges::new([up, right, down, left]),
            rotations: allowed,
            weight,
        })
    }

    /// Identity reference, typically the artwork filename
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Unrotated edge codes
    pub const fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Allowed rotations in configured order
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Selection weight shared by every rotation of this tile
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// Immutable ordered set of tile definitions for one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct TileCatalog {
    tiles: Vec<TileDefinition>,
}

impl TileCatalog {
    /// Build a catalog from validated tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if no tiles are supplied
    pub fn new(tiles: Vec<TileDefinition>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(invalid_parameter(
                "tiles",
                &0,
                &"catalog needs at least one tile",
            ));
        }
        Ok(Self { tiles })
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false, catalogs are never empty
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `index`
    pub fn get(&self, index: usize) -> Option<&TileDefinition> {
        self.tiles.get(index)
    }

    /// Tiles in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, TileDefinition> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a TileCatalog {
    type Item = &'a TileDefinition;
    type IntoIter = std::slice::Iter<'a, TileDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

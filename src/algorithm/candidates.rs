use crate::{
    algorithm::compatibility::{compatible, neighbor_constraint},
    spatial::{
        grid::{Grid, Placement},
        tiles::{Edges, Rotation, Side, TileCatalog},
    },
};

/// A (tile, rotation) pair considered for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index into the tile catalog
    pub tile: usize,
    /// Rotation the tile would be placed at
    pub rotation: Rotation,
    /// Weight of the owning tile, shared across its rotations
    pub weight: f64,
}

impl Candidate {
    /// The placement committing this candidate would produce
    pub const fn placement(&self) -> Placement {
        Placement {
            tile: self.tile,
            rotation: self.rotation,
        }
    }
}

/// List every (tile, rotation) admissible at `(x, y)`
///
/// Every side is consulted: boundaries demand the open edge code, resolved
/// neighbors demand a matching code and unresolved neighbors impose nothing.
/// Candidates come out in catalog order, then in each tile's rotation order.
/// An empty result means the cell cannot be filled.
pub fn enumerate_candidates(catalog: &TileCatalog, grid: &Grid, x: usize, y: usize) -> Vec<Candidate> {
    let constraints: Vec<(Side, Edges, Rotation)> = Side::ALL
        .iter()
        .filter_map(|&side| {
            neighbor_constraint(catalog, grid.neighbor(x, y, side))
                .map(|(edges, rotation)| (side, edges, rotation))
        })
        .collect();

    let mut candidates = Vec::new();
    for (index, tile) in catalog.iter().enumerate() {
        for &rotation in tile.rotations() {
            let admissible = constraints.iter().all(|(side, edges, neighbor_rotation)| {
                compatible(tile.edges(), rotation, edges, *neighbor_rotation, *side)
            });

            if admissible {
                candidates.push(Candidate {
                    tile: index,
                    rotation,
                    weight: tile.weight(),
                });
            }
        }
    }

    candidates
}

use crate::spatial::{
    grid::Neighbor,
    tiles::{EdgeCode, Edges, Rotation, Side, TileCatalog},
};

/// Code facing `side` of a tile turned by `rotation`
pub const fn edge_of(edges: &Edges, rotation: Rotation, side: Side) -> EdgeCode {
    edges.rotated(rotation, side)
}

/// Whether a candidate can sit next to a neighbor across `shared_side`
///
/// `shared_side` is the candidate's side facing the neighbor; the neighbor
/// contributes its opposite side.
pub const fn compatible(
    candidate: &Edges,
    candidate_rotation: Rotation,
    neighbor: &Edges,
    neighbor_rotation: Rotation,
    shared_side: Side,
) -> bool {
    edge_of(candidate, candidate_rotation, shared_side)
        == edge_of(neighbor, neighbor_rotation, shared_side.opposite())
}

/// Edges a neighbor imposes on the cell next to it, if any
///
/// Boundaries act as the all-zero tile; unresolved cells constrain nothing.
/// A resolved placement whose tile is missing from the catalog also yields
/// nothing, which cannot happen for grids filled from the same catalog.
pub fn neighbor_constraint(
    catalog: &TileCatalog,
    neighbor: Neighbor,
) -> Option<(Edges, Rotation)> {
    match neighbor {
        Neighbor::Boundary => Some((Edges::BOUNDARY, Rotation::IDENTITY)),
        Neighbor::Unresolved => None,
        Neighbor::Resolved(placement) => catalog
            .get(placement.tile)
            .map(|tile| (*tile.edges(), placement.rotation)),
    }
}

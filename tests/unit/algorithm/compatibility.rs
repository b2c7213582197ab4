//! Tests for edge lookup and pairwise compatibility

#[cfg(test)]
mod tests {
    use edgetile::algorithm::compatibility::{compatible, edge_of, neighbor_constraint};
    use edgetile::spatial::grid::{Neighbor, Placement};
    use edgetile::spatial::tiles::{Edges, Rotation, Side, TileCatalog, TileDefinition};

    fn rotation(steps: i32) -> Rotation {
        Rotation::new(steps).unwrap()
    }

    // Tests edge lookup indexes edges[(side + rotation) % 4]
    // Verified by indexing with (side - rotation)
    #[test]
    fn test_edge_of_circular_shift() {
        let edges = Edges::new([1, 2, 3, 4]);

        for (steps, side, expected) in [
            (0, Side::Up, 1),
            (1, Side::Up, 2),
            (2, Side::Up, 3),
            (3, Side::Up, 4),
            (1, Side::Left, 1),
            (2, Side::Right, 4),
            (3, Side::Down, 2),
        ] {
            assert_eq!(edge_of(&edges, rotation(steps), side), expected);
        }
    }

    // Tests facing edges must be equal across the shared side
    // Verified by comparing the candidate's side with the neighbor's same side
    #[test]
    fn test_compatible_requires_facing_codes_equal() {
        let candidate = Edges::new([0, 5, 0, 0]);
        let matching = Edges::new([0, 0, 0, 5]);
        let mismatching = Edges::new([0, 5, 0, 0]);

        assert!(compatible(
            &candidate,
            Rotation::IDENTITY,
            &matching,
            Rotation::IDENTITY,
            Side::Right
        ));
        assert!(!compatible(
            &candidate,
            Rotation::IDENTITY,
            &mismatching,
            Rotation::IDENTITY,
            Side::Right
        ));

        // Rotating the neighbor a half turn brings its right code to the left
        assert!(compatible(
            &candidate,
            Rotation::IDENTITY,
            &mismatching,
            rotation(2),
            Side::Right
        ));
    }

    // Tests compatible(t1,r1,t2,r2,s) == compatible(t2,r2,t1,r1,opposite(s))
    // Verified by dropping opposite() on the neighbor side
    #[test]
    fn test_compatible_symmetric() {
        let tiles = [
            Edges::new([0, 1, 0, 1]),
            Edges::new([1, 0, 1, 0]),
            Edges::new([2, 1, 0, 3]),
            Edges::BOUNDARY,
        ];

        for t1 in &tiles {
            for t2 in &tiles {
                for r1 in Rotation::ALL {
                    for r2 in Rotation::ALL {
                        for side in Side::ALL {
                            assert_eq!(
                                compatible(t1, r1, t2, r2, side),
                                compatible(t2, r2, t1, r1, side.opposite())
                            );
                        }
                    }
                }
            }
        }
    }

    // Tests neighbor states map to boundary, none, or the placed tile's edges
    // Verified by returning no constraint for boundaries
    #[test]
    fn test_neighbor_constraint_per_state() {
        let tile = TileDefinition::new("t.png", &[7, 8, 9, 6], &[], 1.0).unwrap();
        let catalog = TileCatalog::new(vec![tile]).unwrap();

        assert_eq!(
            neighbor_constraint(&catalog, Neighbor::Boundary),
            Some((Edges::BOUNDARY, Rotation::IDENTITY))
        );
        assert_eq!(neighbor_constraint(&catalog, Neighbor::Unresolved), None);

        let placed = Neighbor::Resolved(Placement {
            tile: 0,
            rotation: rotation(3),
        });
        assert_eq!(
            neighbor_constraint(&catalog, placed),
            Some((Edges::new([7, 8, 9, 6]), rotation(3)))
        );
    }
}

//! Tests for edge codes, rotations and tile catalog validation

#[cfg(test)]
mod tests {
    use edgetile::GenerationError;
    use edgetile::io::configuration::MAX_TILE_WEIGHT;
    use edgetile::spatial::tiles::{Edges, Rotation, Side, TileCatalog, TileDefinition};

    // Tests opposite sides pair up/down and left/right
    // Verified by swapping Right and Left in opposite()
    #[test]
    fn test_side_opposite_pairs() {
        assert_eq!(Side::Up.opposite(), Side::Down);
        assert_eq!(Side::Down.opposite(), Side::Up);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);

        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    // Tests side indices wrap modulo four
    // Verified by removing the modulo in from_index
    #[test]
    fn test_side_from_index_wraps() {
        assert_eq!(Side::from_index(0), Side::Up);
        assert_eq!(Side::from_index(3), Side::Left);
        assert_eq!(Side::from_index(4), Side::Up);
        assert_eq!(Side::from_index(6), Side::Down);
    }

    // Tests rotation construction accepts only 0..=3
    // Verified by widening the accepted range
    #[test]
    fn test_rotation_bounds() {
        for steps in 0..4 {
            assert_eq!(Rotation::new(steps).map(Rotation::steps), Some(steps as u8));
        }
        assert!(Rotation::new(4).is_none());
        assert!(Rotation::new(-1).is_none());
        assert!(Rotation::new(i32::MAX).is_none());
    }

    // Tests rotation shifts the side index rather than the edge values
    // Verified by subtracting the rotation instead of adding it
    #[test]
    fn test_edges_rotated_shifts_side_index() {
        let edges = Edges::new([10, 11, 12, 13]);

        assert_eq!(edges.rotated(Rotation::IDENTITY, Side::Up), 10);
        assert_eq!(edges.rotated(Rotation::IDENTITY, Side::Left), 13);

        let quarter = Rotation::new(1).unwrap();
        assert_eq!(edges.rotated(quarter, Side::Up), 11);
        assert_eq!(edges.rotated(quarter, Side::Right), 12);
        assert_eq!(edges.rotated(quarter, Side::Down), 13);
        assert_eq!(edges.rotated(quarter, Side::Left), 10);

        let three_quarters = Rotation::new(3).unwrap();
        assert_eq!(edges.rotated(three_quarters, Side::Up), 13);
    }

    // Tests the boundary tile is open on every side at every rotation
    // Verified by setting a boundary edge to 1
    #[test]
    fn test_boundary_edges_all_open() {
        for rotation in Rotation::ALL {
            for side in Side::ALL {
                assert_eq!(Edges::BOUNDARY.rotated(rotation, side), 0);
            }
        }
    }

    // Tests non-positive and NaN weights are coerced to 1
    // Verified by removing the weight normalization
    #[test]
    fn test_tile_weight_normalization() {
        for weight in [0.0, -3.5, f64::NAN] {
            let tile = TileDefinition::new("a.png", &[0, 0, 0, 0], &[], weight).unwrap();
            assert!((tile.weight() - 1.0).abs() < f64::EPSILON);
        }

        let tile = TileDefinition::new("a.png", &[0, 0, 0, 0], &[], 2.5).unwrap();
        assert!((tile.weight() - 2.5).abs() < f64::EPSILON);
    }

    // Tests infinite weights are rejected
    // Verified by coercing infinity to 1 instead
    #[test]
    fn test_tile_infinite_weight_rejected() {
        let result = TileDefinition::new("a.png", &[0, 0, 0, 0], &[], f64::INFINITY);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidTileDefinition { .. })
        ));
    }

    // Tests weights above the per-tile limit are rejected while the limit itself is kept
    // Verified by only rejecting infinite weights
    #[test]
    fn test_tile_weight_limit() {
        for weight in [1e308, MAX_TILE_WEIGHT * 2.0, f64::NEG_INFINITY] {
            assert!(matches!(
                TileDefinition::new("a.png", &[0, 0, 0, 0], &[], weight),
                Err(GenerationError::InvalidTileDefinition { .. })
            ));
        }

        let heaviest = TileDefinition::new("a.png", &[0, 0, 0, 0], &[], MAX_TILE_WEIGHT).unwrap();
        assert!((heaviest.weight() - MAX_TILE_WEIGHT).abs() < 1.0);
    }

    // Tests the heaviest valid tiles still sum to a finite candidate weight
    // Verified by raising the limit to f64::MAX
    #[test]
    fn test_heaviest_catalog_fills() {
        let tiles = (0..8)
            .map(|i| {
                TileDefinition::new(&format!("t{i}.png"), &[0, 0, 0, 0], &[], MAX_TILE_WEIGHT)
                    .unwrap()
            })
            .collect();
        let catalog = TileCatalog::new(tiles).unwrap();

        let grid = edgetile::generate(&catalog, 2, 2, 0).unwrap();
        assert!(grid.is_complete());
    }

    // Tests empty rotation lists allow all four steps
    // Verified by defaulting to the identity rotation only
    #[test]
    fn test_tile_rotations_default_to_all() {
        let tile = TileDefinition::new("a.png", &[1, 2, 3, 4], &[], 1.0).unwrap();
        assert_eq!(tile.rotations(), &Rotation::ALL);
    }

    // Tests repeated rotations collapse while keeping configured order
    // Verified by sorting the rotation list
    #[test]
    fn test_tile_rotations_deduplicated_in_order() {
        let tile = TileDefinition::new("a.png", &[1, 2, 3, 4], &[2, 0, 2, 0], 1.0).unwrap();
        let steps: Vec<u8> = tile.rotations().iter().map(|r| r.steps()).collect();
        assert_eq!(steps, vec![2, 0]);
    }

    // Tests edge lists of the wrong length are rejected with the tile identity
    // Verified by padding short edge lists with zeros
    #[test]
    fn test_tile_wrong_edge_count_rejected() {
        for edges in [&[0, 1, 0][..], &[0, 1, 0, 1, 0][..], &[][..]] {
            match TileDefinition::new("short.png", edges, &[], 1.0) {
                Err(GenerationError::InvalidTileDefinition { tile, reason }) => {
                    assert_eq!(tile, "short.png");
                    assert!(reason.contains("4 edge codes"));
                }
                other => panic!("Expected InvalidTileDefinition, got {other:?}"),
            }
        }
    }

    // Tests rotation steps outside 0..=3 are rejected
    // Verified by skipping invalid rotations instead of failing
    #[test]
    fn test_tile_invalid_rotation_rejected() {
        for rotation in [4, -1, 90] {
            let result = TileDefinition::new("a.png", &[0, 0, 0, 0], &[0, rotation], 1.0);
            assert!(matches!(
                result,
                Err(GenerationError::InvalidTileDefinition { .. })
            ));
        }
    }

    // Tests tiles require an identity
    // Verified by accepting blank identities
    #[test]
    fn test_tile_empty_identity_rejected() {
        let result = TileDefinition::new("  ", &[0, 0, 0, 0], &[], 1.0);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidTileDefinition { .. })
        ));
    }

    // Tests catalog keeps tiles in insertion order
    // Verified by reversing the tile list on construction
    #[test]
    fn test_catalog_preserves_order() {
        let a = TileDefinition::new("a.png", &[0, 0, 0, 0], &[0], 1.0).unwrap();
        let b = TileDefinition::new("b.png", &[1, 1, 1, 1], &[0], 1.0).unwrap();
        let catalog = TileCatalog::new(vec![a, b]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(0).map(TileDefinition::id), Some("a.png"));
        assert_eq!(catalog.get(1).map(TileDefinition::id), Some("b.png"));
        assert!(catalog.get(2).is_none());

        let ids: Vec<&str> = catalog.iter().map(TileDefinition::id).collect();
        assert_eq!(ids, vec!["a.png", "b.png"]);
    }

    // Tests an empty catalog is rejected
    // Verified by allowing empty tile lists
    #[test]
    fn test_catalog_empty_rejected() {
        assert!(matches!(
            TileCatalog::new(Vec::new()),
            Err(GenerationError::InvalidParameter { .. })
        ));
    }
}

//! Grid of cells filled one at a time in scan order
//!
//! Cells are stored row-major in an `Array2` of shape `(height, width)` and
//! addressed by `(x, y)`. Lookups beyond the grid produce
//! [`Neighbor::Boundary`], which is deliberately distinct from an in-bounds
//! cell that has not been resolved yet.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::{Rotation, Side};

/// A tile committed to a cell at a given rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index into the tile catalog
    pub tile: usize,
    /// Rotation applied to the tile
    pub rotation: Rotation,
}

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not visited yet
    #[default]
    Unresolved,
    /// Committed placement, never changed afterwards
    Resolved(Placement),
}

impl Cell {
    /// Placement if the cell has been resolved
    pub const fn placement(self) -> Option<Placement> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(placement) => Some(placement),
        }
    }
}

/// What lies across one side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// Outside the grid
    Boundary,
    /// In-bounds cell not yet visited
    Unresolved,
    /// In-bounds cell already committed
    Resolved(Placement),
}

/// Width×height grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid with every cell unresolved
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::Unresolved),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Cell at `(x, y)`, `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get([y, x]).copied()
    }

    /// Placement at `(x, y)` if it exists and is resolved
    pub fn placement(&self, x: usize, y: usize) -> Option<Placement> {
        self.get(x, y).and_then(Cell::placement)
    }

    /// Look across `side` of the cell at `(x, y)`
    pub fn neighbor(&self, x: usize, y: usize, side: Side) -> Neighbor {
        let target = match side {
            Side::Up => y.checked_sub(1).map(|ny| (x, ny)),
            Side::Right => x.checked_add(1).map(|nx| (nx, y)),
            Side::Down => y.checked_add(1).map(|ny| (x, ny)),
            Side::Left => x.checked_sub(1).map(|nx| (nx, y)),
        };

        match target.and_then(|(nx, ny)| self.get(nx, ny)) {
            None => Neighbor::Boundary,
            Some(Cell::Unresolved) => Neighbor::Unresolved,
            Some(Cell::Resolved(placement)) => Neighbor::Resolved(placement),
        }
    }

    /// Commit a placement to an unresolved cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `(x, y)` lies outside the grid or the
    /// cell has already been resolved
    pub fn commit(&mut self, x: usize, y: usize, placement: Placement) -> Result<()> {
        let cell = self.cells.get_mut([y, x]).ok_or_else(|| {
            invalid_parameter(
                "cell",
                &format!("({x}, {y})"),
                &"coordinates lie outside the grid",
            )
        })?;

        if let Cell::Resolved(_) = cell {
            return Err(invalid_parameter(
                "cell",
                &format!("({x}, {y})"),
                &"cell is already resolved",
            ));
        }

        *cell = Cell::Resolved(placement);
        Ok(())
    }

    /// Whether every cell has been resolved
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| matches!(cell, Cell::Resolved(_)))
    }

    /// Number of resolved cells
    pub fn resolved_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Resolved(_)))
            .count()
    }

    /// Resolved cells as `(x, y, placement)` in row-major order
    pub fn placements(&self) -> impl Iterator<Item = (usize, usize, Placement)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((y, x), cell)| cell.placement().map(|placement| (x, y, placement)))
    }
}

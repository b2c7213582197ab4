use crate::{
    algorithm::{candidates::enumerate_candidates, selection::WeightedSelector},
    io::configuration::MAX_GRID_DIMENSION,
    io::error::{GenerationError, Result, WithContext, invalid_parameter},
    spatial::{
        grid::{Grid, Placement},
        tiles::TileCatalog,
    },
};
use log::{debug, info, trace};
use rand::{Rng, rngs::StdRng};
use std::ops::ControlFlow;

/// Scan-order grid filler
///
/// Visits columns left to right and, within a column, rows top to bottom.
/// When a cell is reached its up and left neighbors are always resolved and
/// its down and right neighbors never are, so only the former (and the grid
/// boundary) constrain the choice. Committed cells are never revisited.
pub struct GridFiller<'a, R = StdRng> {
    catalog: &'a TileCatalog,
    grid: Grid,
    selector: WeightedSelector<R>,
}

impl<'a> GridFiller<'a, StdRng> {
    /// Create a filler with a deterministic random stream
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn from_seed(
        catalog: &'a TileCatalog,
        width: usize,
        height: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::new(catalog, width, height, WeightedSelector::from_seed(seed))
    }
}

impl<'a, R: Rng> GridFiller<'a, R> {
    /// Create a filler over an empty `width`×`height` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(
        catalog: &'a TileCatalog,
        width: usize,
        height: usize,
        selector: WeightedSelector<R>,
    ) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        Ok(Self {
            catalog,
            grid: Grid::new(width, height),
            selector,
        })
    }

    /// Partially filled grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Resolve every cell and hand back the finished grid
    ///
    /// # Errors
    ///
    /// Returns `UnsatisfiableCell` for the first cell with no admissible
    /// candidate, or `DegenerateWeights` if a selection cannot be weighted
    pub fn fill(self) -> Result<Grid> {
        self.fill_with(|_| ControlFlow::Continue(()))
    }

    /// Resolve every cell, reporting each finished column to `on_column`
    ///
    /// Returning `ControlFlow::Break` from the observer stops the run.
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` when the observer breaks, otherwise the same
    /// errors as [`GridFiller::fill`]
    pub fn fill_with<F>(mut self, mut on_column: F) -> Result<Grid>
    where
        F: FnMut(usize) -> ControlFlow<()>,
    {
        info!(
            "Filling {}x{} grid from {} tiles",
            self.grid.width(),
            self.grid.height(),
            self.catalog.len()
        );

        for x in 0..self.grid.width() {
            self.fill_column(x)?;
            debug!("Column {x} resolved");

            if on_column(x).is_break() {
                return Err(GenerationError::Cancelled { column: x });
            }
        }

        info!("Grid complete with {} cells", self.grid.resolved_count());
        Ok(self.grid)
    }

    fn fill_column(&mut self, x: usize) -> Result<()> {
        for y in 0..self.grid.height() {
            self.resolve_cell(x, y)?;
        }
        Ok(())
    }

    fn resolve_cell(&mut self, x: usize, y: usize) -> Result<Placement> {
        let candidates = enumerate_candidates(self.catalog, &self.grid, x, y);
        if candidates.is_empty() {
            return Err(GenerationError::UnsatisfiableCell { x, y });
        }

        let chosen = self.selector.select(&candidates).at_cell(x, y)?;
        let placement = chosen.placement();
        self.grid.commit(x, y, placement)?;

        trace!(
            "Cell ({x}, {y}) <- tile {} rotation {} ({} candidates)",
            placement.tile,
            placement.rotation.steps(),
            candidates.len()
        );
        Ok(placement)
    }
}

/// Fill a `width`×`height` grid from `catalog` using a seeded random stream
///
/// The same catalog, dimensions and seed always produce the same grid.
///
/// # Errors
///
/// Returns the errors of [`GridFiller::from_seed`] and [`GridFiller::fill`]
pub fn generate(catalog: &TileCatalog, width: usize, height: usize, seed: u64) -> Result<Grid> {
    GridFiller::from_seed(catalog, width, height, seed)?.fill()
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

//! Edge-matching tile mosaics filled in a single scan
//!
//! Cells are visited column by column. Each cell takes a weighted random
//! choice among the (tile, rotation) pairs whose edge codes match the
//! neighbors already placed and the open grid boundary. There is no
//! propagation and no backtracking: a cell with no admissible tile ends the
//! run with an error naming the cell.

#![forbid(unsafe_code)]

/// Compatibility checks, candidate enumeration, selection and grid filling
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile vocabulary and grid data structures
pub mod spatial;

pub use algorithm::executor::{GridFiller, generate};
pub use io::error::{GenerationError, Result};

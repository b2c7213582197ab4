/// Candidate enumeration for a single cell
pub mod candidates;
/// Edge compatibility between a candidate and its neighbors
pub mod compatibility;
/// Scan-order grid filling
pub mod executor;
/// Weighted random candidate selection
pub mod selection;

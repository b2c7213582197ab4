//! Input/output around the core algorithm

/// Command-line interface and run pipeline
pub mod cli;
/// Defaults and YAML tile configuration
pub mod configuration;
/// Error types and context management
pub mod error;
/// Tile artwork, rendering and PNG export
pub mod image;
/// Logger initialization
pub mod logging;
/// Progress display during filling
pub mod progress;

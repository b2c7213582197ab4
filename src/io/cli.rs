//! Command-line interface wiring configuration, generation and rendering

use crate::algorithm::executor::GridFiller;
use crate::io::configuration::{
    Config, DEFAULT_ATTEMPTS, DEFAULT_CONFIG_PATH, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_LOG_SPEC, DEFAULT_OUTPUT_PATH, DEFAULT_TILE_PIXEL_SIZE, artwork_base_dir,
};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::image::{export_png, load_tile_artwork, render_grid};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileCatalog;
use clap::Parser;
use log::{info, warn};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "edgetile")]
#[command(
    author,
    version,
    about = "Fill a grid with edge-matching tiles and render it to PNG"
)]
/// Command-line arguments for the tile mosaic generator
pub struct Cli {
    /// Tile configuration file (YAML)
    #[arg(short, long, value_name = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output PNG file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Grid width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Side length of one tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_PIXEL_SIZE)]
    pub tile_size: u32,

    /// Random seed for reproducible generation (defaults to the clock)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Seeds to try when a cell cannot be filled
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log specification, e.g. "info" or "debug"
    #[arg(short, long, default_value = DEFAULT_LOG_SPEC)]
    pub log: String,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed for the first attempt, taken from the clock when not given
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_nanos() as u64)
        })
    }
}

/// Runs one generation end to end: load, fill, render, export
pub struct Generator {
    cli: Cli,
}

impl Generator {
    /// Create a generator for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the configuration, fill the grid and write the image
    ///
    /// # Errors
    ///
    /// Returns configuration, artwork, generation or export failures
    pub fn run(&self) -> Result<()> {
        let catalog = Config::from_path(&self.cli.config)?.into_catalog()?;
        info!(
            "Loaded {} tiles from {}",
            catalog.len(),
            self.cli.config.display()
        );

        let artwork = load_tile_artwork(
            &catalog,
            &artwork_base_dir(&self.cli.config),
            self.cli.tile_size,
        )?;

        let grid = self.generate(&catalog)?;

        let image = render_grid(&grid, &artwork, self.cli.tile_size)?;
        export_png(&image, &self.cli.output)?;
        info!("Wrote {}", self.cli.output.display());

        Ok(())
    }

    /// Fill a grid, reseeding after dead ends up to the attempt limit
    ///
    /// Attempt `n` (counting from 0) uses `seed + n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if no attempts are allowed, the last
    /// `UnsatisfiableCell` once attempts run out, and any other error
    /// immediately
    pub fn generate(&self, catalog: &TileCatalog) -> Result<Grid> {
        if self.cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"must be at least 1",
            ));
        }

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.width)
        } else {
            ProgressManager::hidden(self.cli.width)
        };

        let base_seed = self.cli.resolve_seed();
        let mut attempt = 0;
        let result = loop {
            let seed = base_seed.wrapping_add(u64::from(attempt));
            attempt += 1;
            progress.start_attempt(attempt, seed);

            let filler = GridFiller::from_seed(catalog, self.cli.width, self.cli.height, seed)?;
            match filler.fill_with(|column| {
                progress.complete_column(column);
                ControlFlow::Continue(())
            }) {
                Err(GenerationError::UnsatisfiableCell { x, y }) if attempt < self.cli.attempts => {
                    warn!("Seed {seed} dead-ended at cell ({x}, {y}), retrying");
                }
                outcome => break outcome,
            }
        };

        progress.finish();
        result
    }
}

//! CLI entry point for the edge-matching tile generator

use clap::Parser;
use edgetile::io::cli::{Cli, Generator};
use edgetile::io::logging::init_logger;

fn main() -> edgetile::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logger(&cli.log)?;
    let generator = Generator::new(cli);
    generator.run()
}

//! CLI entry point for the tessellated rug triangle counter

use clap::Parser;
use rug_triangles::io::cli::{Cli, RugProcessor};
use rug_triangles::io::logging;

fn main() -> rug_triangles::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    let processor = RugProcessor::new(cli);
    processor.process()
}

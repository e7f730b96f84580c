//! CLI entry point for the edge-label wave function collapse generator

use clap::Parser;
use edgewave::io::cli::{Cli, LayoutProcessor};
use edgewave::io::logging::init_tracing;

fn main() -> edgewave::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let processor = LayoutProcessor::new(cli);
    processor.process().map(|_| ())
}

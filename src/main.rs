//! CLI entry point for the LBM benchmark sweep driver

use clap::Parser;
use lbmsweep::io::cli::{Cli, SweepProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> lbmsweep::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let processor = SweepProcessor::new(cli);
    processor.process().map(|_| ())
}

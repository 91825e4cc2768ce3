//! CLI entry point for continuum.

use clap::Parser;
use continuum_cli::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    config.run()
}

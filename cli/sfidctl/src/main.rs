//! sfidctl (sfid) - CLI for record IDs
//!
//! Inspects, normalizes, and derives record IDs, and renders ID ranges as
//! SQL predicates for chunked extraction.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;
mod range;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::from_env()?;

    logging::init(&config.log_level);

    // Run the command
    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

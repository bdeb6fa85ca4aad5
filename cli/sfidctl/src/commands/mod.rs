//! CLI commands.

mod arith;
mod chunks;
mod convert;
mod inspect;
mod numeric;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sfid_id::{Edition, IdError, RecordId};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::CliError;
use crate::output::{print_failure, OutputFormat};

/// sfid - Inspect, normalize, and derive record IDs.
#[derive(Debug, Parser)]
#[command(name = "sfid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "SFID_FORMAT", default_value = "table")]
    format: String,

    /// Field layout used to report pod and reserved characters (classic or extended).
    #[arg(long, global = true, env = "SFID_EDITION", default_value = "classic")]
    edition: Edition,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the fields of one or more IDs.
    Parse(inspect::ParseCommand),

    /// Print the canonical 18 character form of one or more IDs.
    Normalize(convert::ConvertCommand),

    /// Print the 15 character case-sensitive form of one or more IDs.
    Short(convert::ConvertCommand),

    /// Add to the record sequence of an ID.
    Add(arith::ArithCommand),

    /// Subtract from the record sequence of an ID.
    Subtract(arith::ArithCommand),

    /// Encode a number as an 8 character numeric identifier.
    Encode(numeric::EncodeCommand),

    /// Decode an 8 character numeric identifier.
    Decode(numeric::DecodeCommand),

    /// Split an ID space into ranges and print SQL range queries.
    Chunks(chunks::ChunksCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: OutputFormat::from_flag(&self.format),
            edition: self.edition,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Normalize(cmd) => cmd.run(&ctx, convert::Target::Canonical),
            Commands::Short(cmd) => cmd.run(&ctx, convert::Target::Short),
            Commands::Add(cmd) => cmd.run(&ctx, arith::Op::Add),
            Commands::Subtract(cmd) => cmd.run(&ctx, arith::Op::Subtract),
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
            Commands::Chunks(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("sfid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub edition: Edition,
}

impl CommandContext {
    /// Parse an ID with the selected edition, naming the input on failure.
    pub fn parse_id(&self, input: &str) -> Result<RecordId, CliError> {
        RecordId::parse(input, self.edition).map_err(|e| CliError::invalid_id(input, e))
    }
}

/// Apply `f` to every input, reporting failures without stopping.
///
/// Successful results are handed to `emit` in input order. If any input
/// failed, [`CliError::PartialFailure`] is returned after that.
pub fn for_each_input<T, F, E>(inputs: &[String], f: F, emit: E) -> Result<()>
where
    F: Fn(&str) -> Result<T, IdError>,
    E: FnOnce(Vec<T>),
{
    let mut ok = Vec::with_capacity(inputs.len());
    let mut failed = 0;

    for input in inputs {
        match f(input.as_str()) {
            Ok(value) => {
                debug!(input = %input, "processed record ID");
                ok.push(value);
            }
            Err(e) => {
                warn!(input = %input, error = %e, "record ID rejected");
                print_failure(input, &e.to_string());
                failed += 1;
            }
        }
    }

    emit(ok);

    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: inputs.len(),
        }
        .into());
    }
    Ok(())
}

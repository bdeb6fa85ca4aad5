//! Add and subtract commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sfid_id::RecordId;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

/// Arithmetic operation on the record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
}

/// Derive a new ID from an existing one.
#[derive(Debug, Args)]
pub struct ArithCommand {
    /// Record ID (15 or 18 characters).
    id: String,

    /// Amount to move the record sequence by.
    delta: u64,
}

#[derive(Debug, Serialize, Tabled)]
struct Derived {
    #[tabled(rename = "From")]
    from: RecordId,

    #[tabled(rename = "Delta")]
    delta: String,

    #[tabled(rename = "To")]
    to: RecordId,
}

fn apply(id: &RecordId, op: Op, delta: u64) -> Result<RecordId, sfid_id::IdError> {
    match op {
        Op::Add => id.add(delta),
        Op::Subtract => id.subtract(delta),
    }
}

impl ArithCommand {
    pub fn run(self, ctx: &CommandContext, op: Op) -> Result<()> {
        let from = ctx.parse_id(&self.id)?;
        let to = apply(&from, op, self.delta).map_err(|e| CliError::invalid_id(&self.id, e))?;
        debug!(from = %from, to = %to, delta = self.delta, ?op, "derived record ID");

        let sign = match op {
            Op::Add => '+',
            Op::Subtract => '-',
        };
        let derived = Derived {
            from,
            delta: format!("{sign}{}", self.delta),
            to,
        };

        match ctx.format {
            OutputFormat::Json => print_single(&derived),
            OutputFormat::Table => print_output(&[derived], ctx.format),
        }
        Ok(())
    }
}

//! Normalize and short commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sfid_id::{Format, RecordId};

use crate::output::{print_single, OutputFormat};

use super::{for_each_input, CommandContext};

/// Form to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Canonical,
    Short,
}

impl From<Target> for Format {
    fn from(target: Target) -> Self {
        match target {
            Target::Canonical => Format::Canonical,
            Target::Short => Format::Short,
        }
    }
}

/// Convert one or more IDs.
#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Record IDs (15 or 18 characters).
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Converted {
    input: String,
    output: String,
}

fn convert(input: &str, id: &RecordId, target: Target) -> Converted {
    Converted {
        input: input.to_string(),
        output: id.format(target.into()).to_string(),
    }
}

impl ConvertCommand {
    pub fn run(self, ctx: &CommandContext, target: Target) -> Result<()> {
        for_each_input(
            &self.ids,
            |input| RecordId::parse(input, ctx.edition).map(|id| convert(input, &id, target)),
            |converted| match ctx.format {
                OutputFormat::Json => print_single(&converted),
                OutputFormat::Table => {
                    for c in &converted {
                        println!("{}", c.output);
                    }
                }
            },
        )
    }
}

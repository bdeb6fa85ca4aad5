//! Encode and decode commands for the numeric identifier.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sfid_id::IdError;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Encode a number as an 8 character numeric identifier.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Value below 62^8.
    value: u64,
}

/// Decode an 8 character numeric identifier.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Base62 numeric identifier (8 characters, 0-9A-Za-z).
    text: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct NumericView {
    value: u64,
    encoded: String,
}

impl NumericView {
    fn encode(value: u64) -> Result<Self, IdError> {
        let encoded = sfid_id::encode_numeric(value)?;
        Ok(Self { value, encoded })
    }

    fn decode(text: String) -> Result<Self, IdError> {
        let value = sfid_id::decode_numeric(text.as_bytes())?;
        Ok(Self {
            value,
            encoded: text,
        })
    }
}

fn emit(view: &NumericView, ctx: &CommandContext, plain: String) {
    match ctx.format {
        OutputFormat::Json => print_single(view),
        OutputFormat::Table => println!("{plain}"),
    }
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let view = NumericView::encode(self.value)?;
        emit(&view, ctx, view.encoded.clone());
        Ok(())
    }
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let view = NumericView::decode(self.text)?;
        emit(&view, ctx, view.value.to_string());
        Ok(())
    }
}

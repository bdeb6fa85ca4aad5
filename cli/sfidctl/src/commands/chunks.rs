//! Chunks command (ID ranges as SQL range queries).

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::print_output;
use crate::range::{Chunks, IdRange};

use super::CommandContext;

/// Split an ID space into ranges and print SQL range queries.
#[derive(Debug, Args)]
pub struct ChunksCommand {
    /// First record ID of the first range.
    start: String,

    /// Records added to each range's start to get its end (default: SFID_CHUNK_SIZE or 250000).
    #[arg(long)]
    size: Option<u64>,

    /// Maximum number of ranges to print.
    #[arg(long, default_value = "10")]
    count: usize,

    /// Object to query (default: SFID_SQL_OBJECT or Account).
    #[arg(long)]
    object: Option<String>,

    /// ID column to filter on (default: SFID_SQL_FIELD or Id).
    #[arg(long)]
    field: Option<String>,

    /// Print only the queries, one per line.
    #[arg(long)]
    plain: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct ChunkRow {
    #[tabled(rename = "#")]
    index: usize,

    #[tabled(rename = "Start")]
    start: String,

    #[tabled(rename = "End")]
    end: String,

    #[tabled(rename = "Query")]
    query: String,
}

fn rows(ranges: &[IdRange], object: &str, field: &str) -> Vec<ChunkRow> {
    ranges
        .iter()
        .enumerate()
        .map(|(index, range)| ChunkRow {
            index: index + 1,
            start: range.start.to_string(),
            end: range.end.to_string(),
            query: range.to_sql(object, field),
        })
        .collect()
}

impl ChunksCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let start = ctx.parse_id(&self.start)?;
        let size = self.size.unwrap_or(ctx.config.chunk_size);
        let object = self.object.as_deref().unwrap_or(&ctx.config.sql_object);
        let field = self.field.as_deref().unwrap_or(&ctx.config.sql_field);

        debug!(start = %start, size, count = self.count, "generating ID ranges");

        let ranges: Vec<IdRange> = Chunks::new(start, size)
            .take(self.count)
            .collect::<Result<_, _>>()
            .map_err(|e| CliError::invalid_id(&self.start, e))?;

        if ranges.len() < self.count {
            info!(
                produced = ranges.len(),
                requested = self.count,
                "numeric identifier space exhausted"
            );
        }

        let rows = rows(&ranges, object, field);
        if self.plain {
            for row in &rows {
                println!("{}", row.query);
            }
            return Ok(());
        }

        print_output(&rows, ctx.format);
        Ok(())
    }
}

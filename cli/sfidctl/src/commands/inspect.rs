//! Parse command (field breakdown).

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sfid_id::{Edition, RecordId};
use tabled::Tabled;

use crate::output::{display_option, print_output};

use super::{for_each_input, CommandContext};

/// Show the fields of one or more IDs.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Record IDs (15 or 18 characters).
    #[arg(required = true)]
    ids: Vec<String>,
}

/// Field breakdown of a parsed ID.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct IdView {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Short")]
    short: String,

    #[tabled(rename = "Prefix")]
    key_prefix: String,

    #[tabled(rename = "Pod")]
    pod_identifier: String,

    #[tabled(rename = "Reserved")]
    reserved: String,

    #[tabled(rename = "Numeric")]
    numeric_identifier: String,

    #[tabled(rename = "Sequence", display = "display_option")]
    sequence: Option<u64>,

    #[tabled(rename = "Suffix")]
    suffix: String,

    #[tabled(rename = "Edition")]
    edition: Edition,
}

impl From<&RecordId> for IdView {
    fn from(id: &RecordId) -> Self {
        Self {
            id: id.to_canonical(),
            short: id.to_short(),
            key_prefix: id.key_prefix().to_string(),
            pod_identifier: id.pod_identifier().to_string(),
            reserved: id.reserved().to_string(),
            numeric_identifier: id.numeric_identifier().to_string(),
            // Parsing does not validate the numeric field.
            sequence: id.numeric_value().ok(),
            suffix: id.suffix().to_string(),
            edition: id.edition(),
        }
    }
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        for_each_input(
            &self.ids,
            |input| RecordId::parse(input, ctx.edition).map(|id| IdView::from(&id)),
            |views| print_output(&views, ctx.format),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_classic() {
        let id = RecordId::parse_default("003d0000001ah2aiau").unwrap();
        let view = IdView::from(&id);
        assert_eq!(view.id, "003D0000001aH2AIAU");
        assert_eq!(view.short, "003D0000001aH2A");
        assert_eq!(view.key_prefix, "003");
        assert_eq!(view.pod_identifier, "D0");
        assert_eq!(view.reserved, "00");
        assert_eq!(view.numeric_identifier, "0001aH2A");
        assert_eq!(view.sequence, Some(23_421_626));
        assert_eq!(view.suffix, "IAU");
    }

    #[test]
    fn test_view_json_shape() {
        let id = RecordId::parse("00D5g00000abcXY", Edition::Extended).unwrap();
        let json = serde_json::to_value(IdView::from(&id)).unwrap();
        assert_eq!(json["pod_identifier"], "5g0");
        assert_eq!(json["reserved"], "0");
        assert_eq!(json["edition"], "extended");
    }

    #[test]
    fn test_view_unreadable_sequence() {
        let id = RecordId::parse_default("0010000000-0000").unwrap();
        assert_eq!(IdView::from(&id).sequence, None);
    }
}

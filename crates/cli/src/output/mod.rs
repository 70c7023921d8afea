//! Rendering of search results for the terminal.
pub mod delimited;
pub mod json;
pub mod stats;
pub mod table;

use pdnsgrep_domain::config::{OutputConfig, OutputFormat};
use pdnsgrep_domain::{RecordStats, SearchResultItem};
use std::io::Write;

pub const HEADERS: [&str; 6] = ["Zone", "Name", "Type", "Content", "TTL", "Object Type"];

pub const NOTHING_FOUND: &str = "Nothing found";

/// The six columns of one result, in header order.
pub fn row_cells(record: &SearchResultItem) -> [String; 6] {
    [
        record.zone.clone(),
        record.name.clone(),
        record.record_type.clone(),
        record.content.clone(),
        record.ttl.to_string(),
        record.object_type.to_string(),
    ]
}

/// Writes `records` in the configured format, or the stats summary when
/// stats are requested.
pub fn write_results<W: Write>(
    out: &mut W,
    records: &[SearchResultItem],
    config: &OutputConfig,
) -> anyhow::Result<()> {
    if records.is_empty() {
        writeln!(out, "{NOTHING_FOUND}")?;
        return Ok(());
    }

    if config.stats {
        stats::write_stats(out, &RecordStats::from_records(records))?;
        return Ok(());
    }

    match config.format {
        OutputFormat::Table => table::write_table(out, records, config)?,
        OutputFormat::Csv => {
            delimited::write_csv(out, records, config.delimiter_byte(), config.no_header)?
        }
        OutputFormat::Raw => delimited::write_raw(out, records, config.no_header)?,
        OutputFormat::Json => json::write_json(out, records)?,
    }

    Ok(())
}

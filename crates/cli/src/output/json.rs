use pdnsgrep_domain::SearchResultItem;
use std::io::Write;

/// Pretty-printed JSON array using the API's field names.
pub fn write_json<W: Write>(out: &mut W, records: &[SearchResultItem]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

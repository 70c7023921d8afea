use pdnsgrep_domain::RecordStats;
use std::io::{self, Write};

pub fn write_stats<W: Write>(out: &mut W, stats: &RecordStats) -> io::Result<()> {
    writeln!(out, "Total Records: {}", stats.total)?;
    writeln!(out)?;

    writeln!(out, "By Type:")?;
    for (record_type, count) in &stats.by_type {
        writeln!(out, "  {record_type:<6} {count}")?;
    }

    writeln!(out)?;
    writeln!(out, "By Zone:")?;
    for (zone, count) in &stats.by_zone {
        writeln!(out, "  {zone:<30} {count}")?;
    }

    Ok(())
}

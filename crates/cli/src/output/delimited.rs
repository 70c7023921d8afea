use super::{row_cells, HEADERS};
use pdnsgrep_domain::SearchResultItem;
use std::io::{self, Write};

const RAW_DELIMITER: &str = " ";

/// CSV with a configurable single-byte delimiter. Fields containing the
/// delimiter or quotes are quoted.
pub fn write_csv<W: Write>(
    out: &mut W,
    records: &[SearchResultItem],
    delimiter: u8,
    no_header: bool,
) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    if !no_header {
        writer.write_record(HEADERS)?;
    }
    for record in records {
        writer.write_record(row_cells(record))?;
    }

    writer.flush()?;
    Ok(())
}

/// One line per result, fields joined by a single space, nothing quoted.
pub fn write_raw<W: Write>(
    out: &mut W,
    records: &[SearchResultItem],
    no_header: bool,
) -> io::Result<()> {
    if !no_header {
        writeln!(out, "{}", HEADERS.join(RAW_DELIMITER))?;
    }
    for record in records {
        writeln!(out, "{}", row_cells(record).join(RAW_DELIMITER))?;
    }
    Ok(())
}

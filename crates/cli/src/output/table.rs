use super::{row_cells, HEADERS};
use crossterm::style::{StyledContent, Stylize};
use pdnsgrep_domain::config::OutputConfig;
use pdnsgrep_domain::SearchResultItem;
use std::io::{self, Write};

/// Extra spaces after the widest cell of each column.
const PADDING: usize = 2;

/// Every column but the last is padded.
const PADDED_COLUMNS: usize = HEADERS.len() - 1;

pub fn write_table<W: Write>(
    out: &mut W,
    records: &[SearchResultItem],
    config: &OutputConfig,
) -> io::Result<()> {
    let rows: Vec<[String; 6]> = records.iter().map(row_cells).collect();
    let widths = column_widths(&rows);

    if !config.no_header {
        let header = HEADERS.map(String::from);
        write_row(out, &header, &widths, config.no_color, true)?;
    }

    for row in &rows {
        write_row(out, row, &widths, config.no_color, false)?;
    }

    Ok(())
}

fn column_widths(rows: &[[String; 6]]) -> [usize; PADDED_COLUMNS] {
    let mut widths = [0; PADDED_COLUMNS];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = header.chars().count();
    }
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| w + PADDING)
}

fn write_row<W: Write>(
    out: &mut W,
    cells: &[String; 6],
    widths: &[usize; PADDED_COLUMNS],
    no_color: bool,
    header: bool,
) -> io::Result<()> {
    let mut line = String::new();

    for (column, cell) in cells.iter().enumerate() {
        let text = match widths.get(column) {
            Some(width) => format!("{cell:<width$}"),
            None => cell.clone(),
        };

        if no_color {
            line.push_str(&text);
        } else if header {
            line.push_str(&text.bold().white().to_string());
        } else {
            line.push_str(&colorize(column, text).to_string());
        }
    }

    if no_color {
        writeln!(out, "{}", line.trim_end())
    } else {
        writeln!(out, "{line}")
    }
}

fn colorize(column: usize, text: String) -> StyledContent<String> {
    match column {
        0 => text.cyan(),
        1 => text.green(),
        2 => text.yellow(),
        3 => text.white(),
        4 => text.magenta(),
        _ => text.blue(),
    }
}

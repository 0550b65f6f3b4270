//! CSV payload parsing
//!
//! Parses the textual content of an uploaded dataset into a
//! [`TableData`] with per-cell numeric typing.
//!
//! This is deliberately a naive comma-splitter, not a full CSV
//! implementation: a field is trimmed and stripped of one surrounding
//! pair of double quotes, and embedded commas inside quoted fields will
//! split the field. Malformed numeric text never fails parsing; it
//! degrades to a text cell so a renderable table is always produced.

use crate::data::error::{DataError, DataResult};
use crate::data::table::{Cell, TableData};

/// Parse CSV text into a [`TableData`].
///
/// The first non-blank line is the header row; every other non-blank
/// line becomes a data row, right-padded with empty text cells or
/// truncated to the header width.
///
/// Fails with [`DataError::EmptyInput`] when no non-blank line remains
/// and [`DataError::NoHeaders`] when the header split yields no fields.
pub fn parse_csv(text: &str) -> DataResult<TableData> {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(DataError::EmptyInput)?;
    let headers: Vec<String> = split_line(header_line);

    if headers.is_empty() {
        return Err(DataError::NoHeaders);
    }

    let rows: Vec<Vec<Cell>> = lines
        .map(|line| {
            let mut cells: Vec<Cell> = split_line(line)
                .iter()
                .map(|field| Cell::parse(field))
                .collect();

            // Normalize row length to the header count
            while cells.len() < headers.len() {
                cells.push(Cell::Text(String::new()));
            }
            cells.truncate(headers.len());

            cells
        })
        .collect();

    Ok(TableData { headers, rows })
}

/// Split a line on commas, trimming each field and stripping one
/// leading and one trailing double-quote character independently.
fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(|field| unquote(field.trim())).collect()
}

/// Remove at most one leading and one trailing `"` from a field.
fn unquote(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.to_string()
}

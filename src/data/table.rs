//! In-memory tabular dataset
//!
//! `TableData` is the structured result of parsing a CSV payload:
//! ordered headers plus positionally-aligned rows of typed cells. It is
//! constructed once per payload, never mutated, and shared with the
//! chart configuration UI and the renderers.

use crate::constants::NUMERIC_COLUMN_THRESHOLD;
use serde::{Deserialize, Serialize};

/// A single cell value: numeric if the source text parsed as a finite
/// decimal, text otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Parse a trimmed, unquoted field into a cell.
    ///
    /// The numeric attempt tolerates surrounding whitespace left behind
    /// by quote stripping (`" 42 "` is a number); anything that still
    /// does not parse as a finite f64 (including the empty string,
    /// "NaN", and "inf") degrades to a text cell holding the field
    /// verbatim.
    pub fn parse(field: &str) -> Self {
        match field.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(field.to_string()),
        }
    }

    /// Numeric value if this cell is number-tagged.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }

    /// True for number-tagged cells. Always finite by construction.
    pub fn is_number(&self) -> bool {
        matches!(self, Cell::Number(_))
    }

    /// Display form of the cell (empty string for empty text cells).
    pub fn display(&self) -> String {
        match self {
            Cell::Number(n) => {
                // No trailing ".0" for whole numbers
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Cell::Text(s) => s.clone(),
        }
    }
}

/// Parsed tabular dataset: headers plus rows of typed cells.
///
/// Invariants maintained by the parser:
/// - `headers` is never empty
/// - every row has exactly `headers.len()` cells
///
/// Header names are not deduplicated; lookups resolve to the first
/// occurrence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableData {
    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Names of columns where a supermajority of cells are numeric.
    ///
    /// A column qualifies when strictly more than 70% of its cells are
    /// number-tagged. With no rows there is nothing to classify and the
    /// result is empty. Duplicate header names are each evaluated at
    /// their own index and may each appear in the result.
    pub fn numeric_columns(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let threshold = self.rows.len() as f64 * NUMERIC_COLUMN_THRESHOLD;
        self.headers
            .iter()
            .enumerate()
            .filter(|(index, _)| {
                // A missing cell in a hand-built ragged row counts as
                // non-numeric rather than panicking.
                let numeric_count = self
                    .rows
                    .iter()
                    .filter(|row| row.get(*index).is_some_and(Cell::is_number))
                    .count();
                numeric_count as f64 > threshold
            })
            .map(|(_, name)| name.clone())
            .collect()
    }
}

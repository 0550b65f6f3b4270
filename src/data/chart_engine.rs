//! Chart series extraction
//!
//! Turns a [`TableData`] plus a chart definition into ready numeric
//! series for the renderers. Column-name resolution and the
//! text-cell-to-number fallback both live here rather than being
//! repeated inside every renderer.

use crate::data::error::{DataError, DataResult};
use crate::data::table::{Cell, TableData};
use crate::types::ChartDefinition;

/// Processed chart data ready for a renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Xy(XySeries),
    Parallel(ParallelSeries),
}

/// Paired axes for scatterplots and line plots.
#[derive(Clone, Debug, PartialEq)]
pub struct XySeries {
    pub title: String,
    /// X-axis column name
    pub x_label: String,
    /// Y-axis column name
    pub y_label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// One labeled dimension of a parallel-coordinates plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    pub label: String,
    pub values: Vec<f64>,
}

/// Dimensions for a parallel-coordinates plot.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallelSeries {
    pub title: String,
    pub dimensions: Vec<Dimension>,
}

/// Extract renderer-ready series for a chart definition.
///
/// Scatterplots and line plots fail with [`DataError::ColumnNotFound`]
/// when either axis column is missing; parallel coordinates silently
/// skip unresolvable columns.
pub fn extract_chart_data(table: &TableData, chart: &ChartDefinition) -> DataResult<ChartData> {
    match chart {
        ChartDefinition::Scatterplot(axes) | ChartDefinition::Lineplot(axes) => {
            Ok(ChartData::Xy(xy_series(
                table,
                &axes.title,
                &axes.column_x,
                &axes.column_y,
            )?))
        }
        ChartDefinition::ParallelCoordinates(config) => Ok(ChartData::Parallel(parallel_series(
            table,
            &config.title,
            &config.columns,
        ))),
    }
}

/// Extract paired axis series for a scatterplot or line plot.
///
/// Both columns must resolve (first occurrence wins for duplicate
/// headers). Each axis is filtered independently: number cells are kept
/// as-is, text cells are re-parsed and dropped when non-finite.
pub fn xy_series(
    table: &TableData,
    title: &str,
    column_x: &str,
    column_y: &str,
) -> DataResult<XySeries> {
    let x_index = table
        .column_index(column_x)
        .ok_or_else(|| DataError::ColumnNotFound(column_x.to_string()))?;
    let y_index = table
        .column_index(column_y)
        .ok_or_else(|| DataError::ColumnNotFound(column_y.to_string()))?;

    Ok(XySeries {
        title: title.to_string(),
        x_label: column_x.to_string(),
        y_label: column_y.to_string(),
        x: column_values(table, x_index),
        y: column_values(table, y_index),
    })
}

/// Extract labeled dimensions for a parallel-coordinates plot.
///
/// Columns that do not resolve are skipped rather than reported; the
/// plot renders with whatever dimensions remain.
pub fn parallel_series(table: &TableData, title: &str, columns: &[String]) -> ParallelSeries {
    let dimensions = columns
        .iter()
        .filter_map(|column| {
            let index = table.column_index(column)?;
            Some(Dimension {
                label: column.clone(),
                values: column_values(table, index),
            })
        })
        .collect();

    ParallelSeries {
        title: title.to_string(),
        dimensions,
    }
}

/// Numeric values of one column, with non-numeric entries dropped.
///
/// Cells missing from a hand-built ragged row are dropped like any
/// other non-numeric entry.
fn column_values(table: &TableData, index: usize) -> Vec<f64> {
    table
        .rows
        .iter()
        .filter_map(|row| match row.get(index)? {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        })
        .collect()
}

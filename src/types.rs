//! Core types for the chartboard client.
//!
//! This module defines the chart-definition model shared between the
//! configuration UI, the renderers, and the dashboard service wire
//! format, plus the dataset and dashboard summaries the service
//! reports.

use serde::{Deserialize, Serialize};

// ============================================================================
// Chart Definitions
// ============================================================================

/// Paired axis columns shared by scatterplots and line plots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisPair {
    pub title: String,
    /// Name of the column plotted on the X axis
    pub column_x: String,
    /// Name of the column plotted on the Y axis
    pub column_y: String,
}

/// Column list for a parallel-coordinates plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParallelConfig {
    pub title: String,
    pub columns: Vec<String>,
}

/// A configured chart on a dashboard.
///
/// Serialized as a tagged union (`"type"` discriminant), which is also
/// the wire shape the dashboard service persists. Column references are
/// not validated here; resolution happens at series-extraction time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartDefinition {
    Scatterplot(AxisPair),
    Lineplot(AxisPair),
    ParallelCoordinates(ParallelConfig),
}

impl ChartDefinition {
    /// Create a scatterplot definition.
    pub fn scatterplot(
        title: impl Into<String>,
        column_x: impl Into<String>,
        column_y: impl Into<String>,
    ) -> Self {
        ChartDefinition::Scatterplot(AxisPair {
            title: title.into(),
            column_x: column_x.into(),
            column_y: column_y.into(),
        })
    }

    /// Create a line plot definition.
    pub fn lineplot(
        title: impl Into<String>,
        column_x: impl Into<String>,
        column_y: impl Into<String>,
    ) -> Self {
        ChartDefinition::Lineplot(AxisPair {
            title: title.into(),
            column_x: column_x.into(),
            column_y: column_y.into(),
        })
    }

    /// Create a parallel-coordinates definition.
    pub fn parallel_coordinates(title: impl Into<String>, columns: Vec<String>) -> Self {
        ChartDefinition::ParallelCoordinates(ParallelConfig {
            title: title.into(),
            columns,
        })
    }

    /// The chart kind of this definition.
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartDefinition::Scatterplot(_) => ChartKind::Scatterplot,
            ChartDefinition::Lineplot(_) => ChartKind::Lineplot,
            ChartDefinition::ParallelCoordinates(_) => ChartKind::ParallelCoordinates,
        }
    }

    /// The user-facing chart title.
    pub fn title(&self) -> &str {
        match self {
            ChartDefinition::Scatterplot(axes) | ChartDefinition::Lineplot(axes) => &axes.title,
            ChartDefinition::ParallelCoordinates(config) => &config.title,
        }
    }

    /// Column names this chart references, in definition order.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            ChartDefinition::Scatterplot(axes) | ChartDefinition::Lineplot(axes) => {
                vec![axes.column_x.as_str(), axes.column_y.as_str()]
            }
            ChartDefinition::ParallelCoordinates(config) => {
                config.columns.iter().map(String::as_str).collect()
            }
        }
    }
}

/// Kinds of charts a dashboard can contain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Scatterplot,
    Lineplot,
    ParallelCoordinates,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Scatterplot => "Scatterplot",
            ChartKind::Lineplot => "Line Plot",
            ChartKind::ParallelCoordinates => "Parallel Coordinates",
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Scatterplot,
            ChartKind::Lineplot,
            ChartKind::ParallelCoordinates,
        ]
    }
}

// ============================================================================
// Service Resources
// ============================================================================

/// A dataset as listed by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: String,
    pub name: String,
}

/// A dashboard: the dataset it plots plus its chart definitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub dataset_id: String,
    pub visualizations: Vec<ChartDefinition>,
}

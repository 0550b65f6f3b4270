//! Tests for chart series extraction dispatch.

use crate::helpers::{TestTableBuilder, num, text};
use chartboard::data::{ChartData, DataError, extract_chart_data};
use chartboard::types::ChartDefinition;

fn sample_table() -> chartboard::data::TableData {
    TestTableBuilder::new(&["name", "height", "weight"])
        .with_row(&[text("alice"), num(170.0), num(60.0)])
        .with_row(&[text("bob"), num(180.0), text("unknown")])
        .build()
}

#[test]
fn scatterplot_extracts_xy_series() {
    let table = sample_table();
    let chart = ChartDefinition::scatterplot("Height vs Weight", "height", "weight");

    let data = extract_chart_data(&table, &chart).unwrap();

    let ChartData::Xy(series) = data else {
        panic!("expected xy series");
    };
    assert_eq!(series.title, "Height vs Weight");
    assert_eq!(series.x, vec![170.0, 180.0]);
    assert_eq!(series.y, vec![60.0]);
}

#[test]
fn lineplot_uses_the_same_extraction() {
    let table = sample_table();
    let chart = ChartDefinition::lineplot("Trend", "height", "weight");

    let data = extract_chart_data(&table, &chart).unwrap();
    assert!(matches!(data, ChartData::Xy(_)));
}

#[test]
fn missing_axis_column_fails() {
    let table = sample_table();
    let chart = ChartDefinition::scatterplot("t", "height", "age");

    let err = extract_chart_data(&table, &chart).unwrap_err();
    assert!(matches!(err, DataError::ColumnNotFound(name) if name == "age"));
}

#[test]
fn parallel_coordinates_skip_missing_columns() {
    let table = sample_table();
    let chart = ChartDefinition::parallel_coordinates(
        "Overview",
        vec!["height".to_string(), "age".to_string()],
    );

    let data = extract_chart_data(&table, &chart).unwrap();

    let ChartData::Parallel(series) = data else {
        panic!("expected parallel series");
    };
    assert_eq!(series.dimensions.len(), 1);
    assert_eq!(series.dimensions[0].label, "height");
}

#[test]
fn text_cells_are_reparsed_for_series() {
    // The renderer-side fallback: text cells that hold numeric text
    // still contribute to the series.
    let table = TestTableBuilder::new(&["v"])
        .with_row(&[text("1.5")])
        .with_row(&[text("nope")])
        .with_row(&[num(2.0)])
        .build();

    let chart = ChartDefinition::parallel_coordinates("t", vec!["v".to_string()]);
    let ChartData::Parallel(series) = extract_chart_data(&table, &chart).unwrap() else {
        panic!("expected parallel series");
    };
    assert_eq!(series.dimensions[0].values, vec![1.5, 2.0]);
}

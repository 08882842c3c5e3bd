//! Common test utilities for tabstat-polars tests

use polars::prelude::*;

/// Sales frame with nulls in both measures
pub fn sales_df() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            PlSmallStr::from("Region"),
            ["North", "North", "South", "South", "East"],
        )
        .into(),
        Series::new(
            PlSmallStr::from("Month"),
            ["Jan", "Feb", "Jan", "Jan", "Feb"],
        )
        .into(),
        Series::new(
            PlSmallStr::from("Sales"),
            [Some(100.0), None, Some(300.0), Some(250.0), None],
        )
        .into(),
        Series::new(
            PlSmallStr::from("Expenses"),
            [Some(80i64), Some(90), None, Some(120), Some(60)],
        )
        .into(),
    ])
    .unwrap()
}

/// First `f64` value of a column
pub fn f64_at(df: &DataFrame, column: &str, row: usize) -> Option<f64> {
    df.column(column).unwrap().f64().unwrap().get(row)
}

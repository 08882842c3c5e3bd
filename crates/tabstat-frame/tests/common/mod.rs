//! Common test utilities for tabstat-frame tests

use proptest::prelude::*;
use tabstat_core::{Column, Table};

/// The sales dataset: two categorical keys and two numeric measures with gaps
pub fn sales_table() -> Table {
    Table::new(vec![
        Column::categorical("Region", ["North", "North", "South", "South", "East"]),
        Column::categorical("Month", ["Jan", "Feb", "Jan", "Jan", "Feb"]),
        Column::numeric_opt("Sales", [Some(100.0), None, Some(300.0), Some(250.0), None]),
        Column::numeric_opt("Expenses", [Some(80.0), Some(90.0), None, Some(120.0), Some(60.0)]),
    ])
    .unwrap()
}

/// Random tables with a `Region` key and a `Sales` column holding at least
/// one value
pub fn random_sales_table() -> impl Strategy<Value = Table> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["North", "South", "East"]),
            prop::option::weighted(0.7, 0i32..1000),
        ),
        1..40,
    )
    .prop_filter("needs an observed value", |rows| rows.iter().any(|(_, s)| s.is_some()))
    .prop_map(|rows| {
        Table::new(vec![
            Column::categorical("Region", rows.iter().map(|(r, _)| *r)),
            Column::numeric_opt("Sales", rows.iter().map(|(_, s)| s.map(f64::from))),
        ])
        .unwrap()
    })
}

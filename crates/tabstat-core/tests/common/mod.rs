//! Common test utilities for tabstat-core tests

use tabstat_core::{Column, Table};

/// The sales dataset shape used throughout: two categorical keys and two
/// numeric measures, with gaps in both measures
pub fn sales_table() -> Table {
    Table::new(vec![
        Column::categorical("Region", ["North", "North", "South", "South", "East"]),
        Column::categorical("Month", ["Jan", "Feb", "Jan", "Jan", "Feb"]),
        Column::numeric_opt("Sales", [Some(100.0), None, Some(300.0), Some(250.0), None]),
        Column::numeric_opt("Expenses", [Some(80.0), Some(90.0), None, Some(120.0), Some(60.0)]),
    ])
    .unwrap()
}

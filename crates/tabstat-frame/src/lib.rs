//! Table operations for tabstat
//!
//! - [`Imputer`] / [`impute_column`]: fill missing numeric cells with a
//!   per-column [`ImputeStrategy`]
//! - [`GroupAggregator`]: group rows by categorical keys and reduce each
//!   group with a [`Reducer`]
//! - [`hstack`]: stack numeric columns into row vectors
//!
//! # Example
//!
//! ```rust
//! use tabstat_core::{Column, Table};
//! use tabstat_frame::{GroupAggregator, ImputeStrategy, Imputer, Reducer};
//!
//! let mut table = Table::new(vec![
//!     Column::categorical("Region", ["North", "North", "South"]),
//!     Column::numeric_opt("Sales", [Some(100.0), None, Some(300.0)]),
//! ])
//! .unwrap();
//!
//! let report = Imputer::new()
//!     .with("Sales", ImputeStrategy::Median)
//!     .apply(&mut table)
//!     .unwrap();
//! assert_eq!(report.fills[0].value, 200.0);
//!
//! let totals = GroupAggregator::new(["Region"])
//!     .reduce("Sales", "Sales", Reducer::Sum)
//!     .aggregate(&table)
//!     .unwrap();
//! assert_eq!(totals.value(&[Some("North")], "Sales"), Some(300.0));
//! ```

pub mod aggregate;
pub mod config;
pub mod impute;
pub mod stack;

pub use aggregate::{AggregationResult, Group, GroupAggregator, GroupKey, ReducerSpec};
pub use config::{ImputeStrategy, Reducer};
pub use impute::{impute_column, ColumnFill, ImputationReport, Imputer};
pub use stack::hstack;

//! Polars integration for tabstat
//!
//! Converts between Polars `DataFrame`s and tabstat [`Table`]s and runs
//! imputation and grouped aggregation directly on a `DataFrame` through the
//! [`TableExt`] extension trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use tabstat_frame::{GroupAggregator, Reducer};
//! use tabstat_polars::TableExt;
//!
//! let df = df![
//!     "Region" => ["North", "North", "South"],
//!     "Sales" => [100.0, 200.0, 300.0],
//! ]?;
//!
//! let totals = df.aggregate(
//!     &GroupAggregator::new(["Region"]).reduce("Sales", "Sales", Reducer::Sum),
//! )?;
//! ```
//!
//! [`Table`]: tabstat_core::Table

mod error;
mod traits;

pub use error::{Error, Result};
pub use traits::{table_to_dataframe, TableExt};

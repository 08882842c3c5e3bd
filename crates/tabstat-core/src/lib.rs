//! Core types for tabstat
//!
//! This crate provides the pieces every other tabstat crate builds on:
//!
//! - [`Error`] / [`Result`]: the single error type for all statistical and
//!   table operations
//! - [`Series`]: an immutable, validated numeric sample
//! - [`Table`], [`Column`], [`Bitmap`]: typed tabular data with explicit
//!   missing-value tracking
//! - [`numeric`]: shared kernels (mean, median, variance, quantiles)
//!
//! # Example
//!
//! ```rust
//! use tabstat_core::{Column, Table};
//!
//! let table = Table::new(vec![
//!     Column::categorical("Region", ["North", "South"]),
//!     Column::numeric_opt("Sales", [Some(100.0), None]),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.missing_count(), 1);
//! ```

pub mod bitmap;
pub mod error;
pub mod numeric;
pub mod series;
pub mod table;

pub use bitmap::Bitmap;
pub use error::{Error, Result};
pub use series::Series;
pub use table::{Cell, Column, ColumnData, ColumnInfo, ColumnKind, Table};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

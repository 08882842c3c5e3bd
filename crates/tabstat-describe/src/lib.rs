//! Descriptive statistics for tabstat
//!
//! - [`DescriptiveStats`]: mean, median and sample standard deviation of a
//!   [`Series`](tabstat_core::Series)
//! - [`Summary`] / [`describe`]: count, mean, std, min, quartiles and max
//!   per numeric table column
//!
//! # Example
//!
//! ```rust
//! use tabstat_core::Series;
//! use tabstat_describe::DescriptiveStats;
//!
//! let a = Series::new(vec![3.0, 5.0, 7.0, 9.0, 11.0]).unwrap();
//! let stats = DescriptiveStats::compute(&a).unwrap();
//! assert_eq!(stats.mean, 7.0);
//! assert_eq!(stats.median, 7.0);
//! ```

mod descriptive;
mod summary;

pub use descriptive::DescriptiveStats;
pub use summary::{describe, quantile, ColumnSummary, Summary};

// The scalar statistics are shared kernels from the core crate.
pub use tabstat_core::numeric::{mean, median, std_dev, variance};

//! tabstat: descriptive statistics, normality and correlation tests,
//! imputation and grouped aggregation over typed tables
//!
//! This crate re-exports the workspace crates:
//!
//! - [`tabstat_core`]: error type, `Series`, `Table`
//! - [`tabstat_describe`]: mean, median, standard deviation and column summaries
//! - [`tabstat_hypothesis`]: Shapiro-Wilk and Pearson correlation tests
//! - [`tabstat_frame`]: imputation, grouped aggregation and column stacking
//! - `tabstat_polars` (feature `polars`): DataFrame conversion
//!
//! # Example
//!
//! ```rust
//! use tabstat::prelude::*;
//!
//! let a = Series::named("Group A", vec![3.0, 5.0, 7.0, 9.0, 11.0]).unwrap();
//! let b = Series::named("Group B", vec![2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
//!
//! let stats = DescriptiveStats::compute(&a).unwrap();
//! assert_eq!(stats.median, 7.0);
//!
//! let corr = CorrelationTest::new().test(&a, &b).unwrap();
//! assert_eq!(corr.strength().to_string(), "perfect positive");
//! assert_eq!(NormalityTest::default().test(&b).unwrap().classification, Normality::Normal);
//! ```
//!
//! Tables are cleaned in place and then grouped:
//!
//! ```rust
//! use tabstat::prelude::*;
//!
//! let mut table = Table::new(vec![
//!     Column::categorical("Region", ["X", "X", "Y"]),
//!     Column::numeric_opt("Sales", [Some(10.0), Some(20.0), None]),
//! ])
//! .unwrap();
//!
//! let report = Imputer::new()
//!     .with("Sales", ImputeStrategy::Median)
//!     .apply(&mut table)
//!     .unwrap();
//! assert_eq!(report.fills[0].value, 15.0);
//!
//! let grouped = GroupAggregator::new(["Region"])
//!     .reduce("Sales", "Sales", Reducer::Sum)
//!     .aggregate(&table)
//!     .unwrap();
//! assert_eq!(grouped.value(&[Some("X")], "Sales"), Some(30.0));
//! assert_eq!(grouped.value(&[Some("Y")], "Sales"), Some(15.0));
//! ```

pub use tabstat_core;
pub use tabstat_describe;
pub use tabstat_frame;
pub use tabstat_hypothesis;
#[cfg(feature = "polars")]
pub use tabstat_polars;

pub use tabstat_core::{Error, Result};

pub mod prelude {
    pub use tabstat_core::{Column, ColumnKind, Error, Result, Series, Table};
    pub use tabstat_describe::{describe, DescriptiveStats, Summary};
    pub use tabstat_frame::{
        hstack, AggregationResult, GroupAggregator, ImputationReport, ImputeStrategy, Imputer,
        Reducer,
    };
    pub use tabstat_hypothesis::{
        pearson, shapiro_wilk, CorrelationResult, CorrelationStrength, CorrelationTest,
        Normality, NormalityResult, NormalityTest,
    };

    #[cfg(feature = "polars")]
    pub use tabstat_polars::{table_to_dataframe, TableExt};
}

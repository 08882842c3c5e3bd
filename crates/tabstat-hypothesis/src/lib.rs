//! Hypothesis tests for tabstat
//!
//! - [`shapiro_wilk`] / [`NormalityTest`]: Shapiro-Wilk W test with a
//!   normal / not-normal classification at a significance level
//! - [`pearson`] / [`CorrelationTest`]: Pearson correlation coefficient with
//!   a two-tailed t-test p-value
//!
//! # Example
//!
//! ```rust
//! use tabstat_core::Series;
//! use tabstat_hypothesis::{CorrelationTest, Normality, NormalityTest};
//!
//! let a = Series::named("Group A", vec![3.0, 5.0, 7.0, 9.0, 11.0]).unwrap();
//! let b = Series::named("Group B", vec![2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
//!
//! let normality = NormalityTest::default().test(&a).unwrap();
//! assert_eq!(normality.classification, Normality::Normal);
//!
//! let corr = CorrelationTest::new().test(&a, &b).unwrap();
//! assert_eq!(corr.r, 1.0);
//! ```

mod correlation;
mod normality;
mod shapiro;

pub use correlation::{
    pearson, pearson_test, CorrelationResult, CorrelationStrength, CorrelationTest, Direction,
    Strength,
};
pub use normality::{Normality, NormalityResult, NormalityTest};
pub use shapiro::{shapiro_wilk, ShapiroWilk, MAX_CALIBRATED_N};

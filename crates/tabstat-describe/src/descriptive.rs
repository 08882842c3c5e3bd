//! Mean, median and sample standard deviation of a series

use serde::Serialize;
use std::fmt;
use tabstat_core::{numeric, Result, Series};

/// Descriptive statistics of a single series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of observations
    pub n: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value (average of the two middle values for even n)
    pub median: f64,
    /// Sample standard deviation (Bessel's correction, ddof = 1)
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Compute the statistics of a series
    ///
    /// Fails with `Undefined` for a single-element series, since the
    /// sample standard deviation needs at least two values.
    pub fn compute(series: &Series) -> Result<Self> {
        Self::from_slice(series.values())
    }

    /// Compute the statistics of a raw slice
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let sorted = numeric::sorted(values);
        Ok(Self {
            n: values.len(),
            mean: numeric::mean(values)?,
            median: numeric::median_sorted(&sorted)?,
            std_dev: numeric::std_dev(values)?,
        })
    }
}

impl fmt::Display for DescriptiveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean: {:.2}, median: {:.2}, std dev: {:.2}",
            self.mean, self.median, self.std_dev
        )
    }
}

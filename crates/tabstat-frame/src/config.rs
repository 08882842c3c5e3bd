//! Configuration types for table operations

use serde::{Deserialize, Serialize};
use std::fmt;
use tabstat_core::{numeric, Result};

/// Statistic used to fill missing numeric cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImputeStrategy {
    /// Median of the observed values
    Median,
    /// Arithmetic mean of the observed values
    Mean,
}

impl ImputeStrategy {
    /// Get the name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Median => "median",
            Self::Mean => "mean",
        }
    }

    /// Fill value for the observed (non-missing) values of a column
    pub fn fill_value(&self, observed: &[f64]) -> Result<f64> {
        match self {
            Self::Median => numeric::median(observed),
            Self::Mean => numeric::mean(observed),
        }
    }
}

impl Default for ImputeStrategy {
    fn default() -> Self {
        Self::Median
    }
}

impl fmt::Display for ImputeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-group reduction of a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reducer {
    Sum,
    Mean,
}

impl Reducer {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
        }
    }

    /// Reduce the non-missing values of one group
    ///
    /// `Sum` of no values is 0; `Mean` of no values is `None`.
    pub fn reduce(&self, values: &[f64]) -> Option<f64> {
        match self {
            Self::Sum => Some(numeric::sum(values)),
            Self::Mean => numeric::mean(values).ok(),
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

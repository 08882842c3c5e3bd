//! Column summaries: count, mean, spread and quartiles
//!
//! Mirrors the usual dataframe `describe()` output. Quartiles use linear
//! interpolation between order statistics.

use serde::Serialize;
use std::fmt;
use tabstat_core::{numeric, ColumnKind, Result, Table};
use tracing::{debug, instrument};

/// Summary of one numeric sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` when `count < 2`
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize a non-empty slice
    pub fn compute(values: &[f64]) -> Result<Self> {
        let sorted = numeric::sorted(values);
        let std = if values.len() >= 2 {
            Some(numeric::std_dev(values)?)
        } else {
            None
        };
        Ok(Self {
            count: values.len(),
            mean: numeric::mean(values)?,
            std,
            min: numeric::quantile_sorted(&sorted, 0.0)?,
            q25: numeric::quantile_sorted(&sorted, 0.25)?,
            q50: numeric::quantile_sorted(&sorted, 0.5)?,
            q75: numeric::quantile_sorted(&sorted, 0.75)?,
            max: numeric::quantile_sorted(&sorted, 1.0)?,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let std = self.std.map_or_else(|| "NA".to_string(), |s| format!("{s:.2}"));
        write!(
            f,
            "count {} mean {:.2} std {} min {:.2} 25% {:.2} 50% {:.2} 75% {:.2} max {:.2}",
            self.count, self.mean, std, self.min, self.q25, self.q50, self.q75, self.max
        )
    }
}

/// Summary of one table column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Quantile of unsorted values (linear interpolation)
pub fn quantile(values: &[f64], p: f64) -> Result<f64> {
    numeric::quantile_sorted(&numeric::sorted(values), p)
}

/// Summarize every numeric column over its non-missing values
///
/// Categorical columns and numeric columns without any valid value are
/// skipped.
#[instrument(skip_all, fields(columns = table.n_cols(), rows = table.n_rows()))]
pub fn describe(table: &Table) -> Result<Vec<ColumnSummary>> {
    let mut out = Vec::new();
    for column in table.columns() {
        if column.kind() != ColumnKind::Numeric {
            continue;
        }
        let values = column.numeric_values()?;
        if values.is_empty() {
            debug!(column = column.name(), "skipping column without values");
            continue;
        }
        out.push(ColumnSummary {
            column: column.name().to_string(),
            summary: Summary::compute(&values)?,
        });
    }
    Ok(out)
}

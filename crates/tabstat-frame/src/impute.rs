//! Missing-value imputation
//!
//! Each designated numeric column has its missing cells replaced with a
//! statistic of its observed values. Columns are processed independently
//! and the table keeps its shape.

use crate::config::ImputeStrategy;
use serde::Serialize;
use std::fmt;
use tabstat_core::{Error, Result, Table};
use tracing::{debug, instrument};

/// Outcome of imputing one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnFill {
    pub column: String,
    pub strategy: ImputeStrategy,
    /// Value written into the missing cells
    pub value: f64,
    /// Number of cells that were missing
    pub filled: usize,
}

impl fmt::Display for ColumnFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} = {} ({} filled)",
            self.column, self.strategy, self.value, self.filled
        )
    }
}

/// Per-column fills from one [`Imputer::apply`] run, in declared order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ImputationReport {
    pub fills: Vec<ColumnFill>,
}

impl ImputationReport {
    /// Total number of cells filled across all columns
    pub fn total_filled(&self) -> usize {
        self.fills.iter().map(|f| f.filled).sum()
    }

    pub fn get(&self, column: &str) -> Option<&ColumnFill> {
        self.fills.iter().find(|f| f.column == column)
    }
}

impl fmt::Display for ImputationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fill in &self.fills {
            writeln!(f, "{fill}")?;
        }
        Ok(())
    }
}

/// Fill value for a column without modifying it
fn fill_value(table: &Table, name: &str, strategy: ImputeStrategy) -> Result<f64> {
    let observed = table.column(name)?.numeric_values()?;
    if observed.is_empty() {
        return Err(Error::EmptyColumn(name.to_string()));
    }
    strategy.fill_value(&observed)
}

/// Impute a single column in place
pub fn impute_column(table: &mut Table, name: &str, strategy: ImputeStrategy) -> Result<ColumnFill> {
    let value = fill_value(table, name, strategy)?;
    let filled = table.column_mut(name)?.fill_missing(value)?;
    debug!(column = name, %strategy, value, filled, "imputed");
    Ok(ColumnFill {
        column: name.to_string(),
        strategy,
        value,
        filled,
    })
}

/// Builder for a set of per-column imputation strategies
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Imputer {
    strategies: Vec<(String, ImputeStrategy)>,
}

impl Imputer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Impute `column` with `strategy`; a repeated column replaces its
    /// earlier strategy
    pub fn with(mut self, column: impl Into<String>, strategy: ImputeStrategy) -> Self {
        let column = column.into();
        match self.strategies.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = strategy,
            None => self.strategies.push((column, strategy)),
        }
        self
    }

    pub fn strategies(&self) -> &[(String, ImputeStrategy)] {
        &self.strategies
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Fill every designated column of `table` in place
    ///
    /// All fill values are computed before the table is touched, so an
    /// error leaves the table unchanged.
    #[instrument(skip_all, fields(columns = self.strategies.len(), rows = table.n_rows()))]
    pub fn apply(&self, table: &mut Table) -> Result<ImputationReport> {
        let values = self
            .strategies
            .iter()
            .map(|(name, strategy)| fill_value(table, name, *strategy))
            .collect::<Result<Vec<f64>>>()?;

        let mut fills = Vec::with_capacity(values.len());
        for ((name, strategy), value) in self.strategies.iter().zip(values) {
            let filled = table.column_mut(name)?.fill_missing(value)?;
            debug!(column = name.as_str(), %strategy, value, filled, "imputed");
            fills.push(ColumnFill {
                column: name.clone(),
                strategy: *strategy,
                value,
                filled,
            });
        }
        Ok(ImputationReport { fills })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstat_core::Column;

    fn sales() -> Table {
        Table::new(vec![
            Column::categorical("Region", ["North", "North", "South"]),
            Column::numeric_opt("Sales", [Some(100.0), None, Some(300.0)]),
            Column::numeric_opt("Expenses", [Some(80.0), Some(90.0), None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_median_fill() {
        let mut table = sales();
        let fill = impute_column(&mut table, "Sales", ImputeStrategy::Median).unwrap();
        assert_eq!(fill.value, 200.0);
        assert_eq!(fill.filled, 1);
        assert_eq!(
            table.column("Sales").unwrap().numeric_options().unwrap(),
            vec![Some(100.0), Some(200.0), Some(300.0)]
        );
    }

    #[test]
    fn test_apply_reports_in_order() {
        let mut table = sales();
        let report = Imputer::new()
            .with("Sales", ImputeStrategy::Median)
            .with("Expenses", ImputeStrategy::Mean)
            .apply(&mut table)
            .unwrap();
        assert_eq!(report.fills.len(), 2);
        assert_eq!(report.fills[0].column, "Sales");
        assert_eq!(report.get("Expenses").unwrap().value, 85.0);
        assert_eq!(report.total_filled(), 2);
        assert_eq!(table.missing_count(), 0);
        assert_eq!(table.n_rows(), 3);
    }

    #[test]
    fn test_repeated_column_replaces_strategy() {
        let imputer = Imputer::new()
            .with("Sales", ImputeStrategy::Median)
            .with("Sales", ImputeStrategy::Mean);
        assert_eq!(
            imputer.strategies(),
            &[("Sales".to_string(), ImputeStrategy::Mean)]
        );
    }

    #[test]
    fn test_errors_leave_table_unchanged() {
        let mut table = sales();
        let before = table.clone();
        let err = Imputer::new()
            .with("Sales", ImputeStrategy::Median)
            .with("Profit", ImputeStrategy::Mean)
            .apply(&mut table)
            .unwrap_err();
        assert_eq!(err, Error::UnknownColumn("Profit".to_string()));
        assert_eq!(table, before);
    }

    #[test]
    fn test_categorical_rejected() {
        let mut table = sales();
        let err = impute_column(&mut table, "Region", ImputeStrategy::Median).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_all_missing_column() {
        let mut table = Table::new(vec![Column::numeric_opt("Sales", [None, None])]).unwrap();
        assert_eq!(
            impute_column(&mut table, "Sales", ImputeStrategy::Mean).unwrap_err(),
            Error::EmptyColumn("Sales".to_string())
        );
    }
}

//! Grouped aggregation
//!
//! Rows are partitioned by the tuple of their grouping-column values and
//! each partition is reduced with the configured reducers. Groups come out
//! sorted by key, component by component, with missing components first.

use crate::config::Reducer;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tabstat_core::{Column, Error, Result, Table};
use tracing::{debug, instrument};

/// Composite group key, one component per grouping column
pub type GroupKey = Vec<Option<String>>;

/// One output column of an aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReducerSpec {
    pub output: String,
    pub source: String,
    pub reducer: Reducer,
}

/// A group and its reduced values, aligned with the reducer specs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub key: GroupKey,
    pub values: Vec<Option<f64>>,
}

/// Groups in key order, plus the column names needed to rebuild a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub keys: Vec<String>,
    pub outputs: Vec<String>,
    pub groups: Vec<Group>,
}

impl AggregationResult {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group with exactly this key
    pub fn group(&self, key: &[Option<&str>]) -> Option<&Group> {
        self.groups.iter().find(|g| {
            g.key.len() == key.len() && g.key.iter().zip(key).all(|(a, b)| a.as_deref() == *b)
        })
    }

    /// Reduced value of `output` for the group with this key
    pub fn value(&self, key: &[Option<&str>], output: &str) -> Option<f64> {
        let index = self.outputs.iter().position(|o| o == output)?;
        self.group(key)?.values[index]
    }

    /// Grouping columns first (categorical), then one numeric column per
    /// reducer
    pub fn to_table(&self) -> Result<Table> {
        let mut columns = Vec::with_capacity(self.keys.len() + self.outputs.len());
        for (i, name) in self.keys.iter().enumerate() {
            columns.push(Column::categorical_opt(
                name.as_str(),
                self.groups.iter().map(|g| g.key[i].clone()),
            ));
        }
        for (i, name) in self.outputs.iter().enumerate() {
            columns.push(Column::numeric_opt(
                name.as_str(),
                self.groups.iter().map(|g| g.values[i]),
            ));
        }
        Table::new(columns)
    }
}

impl fmt::Display for AggregationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            let key: Vec<&str> = group
                .key
                .iter()
                .map(|k| k.as_deref().unwrap_or("NA"))
                .collect();
            write!(f, "({})", key.join(", "))?;
            for (name, value) in self.outputs.iter().zip(&group.values) {
                match value {
                    Some(v) => write!(f, " {name}={v}")?,
                    None => write!(f, " {name}=NA")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Group-by over categorical key columns with per-output reducers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupAggregator {
    keys: Vec<String>,
    reducers: Vec<ReducerSpec>,
}

impl GroupAggregator {
    pub fn new<S: Into<String>>(keys: impl IntoIterator<Item = S>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            reducers: Vec::new(),
        }
    }

    /// Add an output column reducing `source` with `reducer`
    pub fn reduce(
        mut self,
        output: impl Into<String>,
        source: impl Into<String>,
        reducer: Reducer,
    ) -> Self {
        self.reducers.push(ReducerSpec {
            output: output.into(),
            source: source.into(),
            reducer,
        });
        self
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn reducers(&self) -> &[ReducerSpec] {
        &self.reducers
    }

    /// Partition `table` by the key columns and reduce each group
    #[instrument(skip_all, fields(keys = ?self.keys, rows = table.n_rows()))]
    pub fn aggregate(&self, table: &Table) -> Result<AggregationResult> {
        if self.keys.is_empty() {
            return Err(Error::InvalidParameter(
                "Aggregation requires at least one grouping column".to_string(),
            ));
        }

        let key_columns = self
            .keys
            .iter()
            .map(|name| table.column(name)?.categorical_options())
            .collect::<Result<Vec<_>>>()?;
        let sources = self
            .reducers
            .iter()
            .map(|spec| table.column(&spec.source)?.numeric_options())
            .collect::<Result<Vec<_>>>()?;

        let mut partitions: BTreeMap<GroupKey, Vec<usize>> = BTreeMap::new();
        for row in 0..table.n_rows() {
            let key: GroupKey = key_columns
                .iter()
                .map(|col| col[row].map(str::to_string))
                .collect();
            partitions.entry(key).or_default().push(row);
        }

        let groups: Vec<Group> = partitions
            .into_iter()
            .map(|(key, rows)| {
                let values = self
                    .reducers
                    .iter()
                    .zip(&sources)
                    .map(|(spec, cells)| {
                        let present: Vec<f64> = rows.iter().filter_map(|&r| cells[r]).collect();
                        spec.reducer.reduce(&present)
                    })
                    .collect();
                Group { key, values }
            })
            .collect();

        debug!(groups = groups.len(), "aggregated");
        Ok(AggregationResult {
            keys: self.keys.clone(),
            outputs: self.reducers.iter().map(|s| s.output.clone()).collect(),
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_jan_rows() -> Table {
        Table::new(vec![
            Column::categorical("Region", ["X", "X"]),
            Column::categorical("Month", ["Jan", "Jan"]),
            Column::numeric("Sales", [10.0, 20.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_single_group_sum() {
        let result = GroupAggregator::new(["Region", "Month"])
            .reduce("Sales", "Sales", Reducer::Sum)
            .aggregate(&two_jan_rows())
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.value(&[Some("X"), Some("Jan")], "Sales"), Some(30.0));
    }

    #[test]
    fn test_groups_sorted_missing_first() {
        let table = Table::new(vec![
            Column::categorical_opt("Region", [Some("South"), None, Some("North"), Some("South")]),
            Column::numeric("Sales", [1.0, 2.0, 3.0, 4.0]),
        ])
        .unwrap();
        let result = GroupAggregator::new(["Region"])
            .reduce("Total", "Sales", Reducer::Sum)
            .aggregate(&table)
            .unwrap();
        let keys: Vec<GroupKey> = result.groups.iter().map(|g| g.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                vec![None],
                vec![Some("North".to_string())],
                vec![Some("South".to_string())],
            ]
        );
        assert_eq!(result.value(&[Some("South")], "Total"), Some(5.0));
    }

    #[test]
    fn test_missing_cells_skipped() {
        let table = Table::new(vec![
            Column::categorical("Region", ["A", "A", "B"]),
            Column::numeric_opt("Sales", [Some(4.0), None, None]),
        ])
        .unwrap();
        let result = GroupAggregator::new(["Region"])
            .reduce("Total", "Sales", Reducer::Sum)
            .reduce("Average", "Sales", Reducer::Mean)
            .aggregate(&table)
            .unwrap();
        assert_eq!(result.value(&[Some("A")], "Average"), Some(4.0));
        assert_eq!(result.value(&[Some("B")], "Total"), Some(0.0));
        assert_eq!(result.value(&[Some("B")], "Average"), None);

        let out = result.to_table().unwrap();
        assert_eq!(out.column_names(), vec!["Region", "Total", "Average"]);
        assert_eq!(out.column("Average").unwrap().f64_at(1), None);
    }

    #[test]
    fn test_validation_errors() {
        let table = two_jan_rows();
        let none: [&str; 0] = [];
        assert!(matches!(
            GroupAggregator::new(none).aggregate(&table),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(
            GroupAggregator::new(["Quarter"]).aggregate(&table).unwrap_err(),
            Error::UnknownColumn("Quarter".to_string())
        );
        assert!(matches!(
            GroupAggregator::new(["Sales"]).aggregate(&table),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            GroupAggregator::new(["Region"])
                .reduce("x", "Month", Reducer::Sum)
                .aggregate(&table),
            Err(Error::TypeMismatch { .. })
        ));
    }
}

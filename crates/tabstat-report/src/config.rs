//! Report configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. The defaults describe the sales dataset (Sales and Expenses
//! grouped by Region and Month) and the two literal samples.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tabstat_core::Series;
use tabstat_frame::{GroupAggregator, ImputeStrategy, Imputer, Reducer};
use tabstat_hypothesis::NormalityTest;

/// One aggregation output column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducerConfig {
    pub output: String,
    pub source: String,
    pub reducer: Reducer,
}

/// A named literal sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub name: String,
    pub values: Vec<f64>,
}

impl SeriesConfig {
    pub fn to_series(&self) -> tabstat_core::Result<Series> {
        Series::named(self.name.as_str(), self.values.clone())
    }
}

/// The two samples compared by the sample report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPair {
    pub a: SeriesConfig,
    pub b: SeriesConfig,
}

impl Default for SeriesPair {
    fn default() -> Self {
        Self {
            a: SeriesConfig {
                name: "Group A".to_string(),
                values: vec![3.0, 5.0, 7.0, 9.0, 11.0],
            },
            b: SeriesConfig {
                name: "Group B".to_string(),
                values: vec![2.0, 4.0, 6.0, 8.0, 10.0],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Cell texts treated as missing when loading CSV (blank cells always are)
    pub missing_tokens: Vec<String>,
    /// Imputation strategy per column
    pub impute: BTreeMap<String, ImputeStrategy>,
    pub group_by: Vec<String>,
    pub reducers: Vec<ReducerConfig>,
    /// Numeric columns stacked side by side after imputation
    pub stack: Vec<String>,
    pub series: SeriesPair,
    /// Significance level of the normality test
    pub alpha: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            missing_tokens: vec!["NA".to_string()],
            impute: BTreeMap::from([
                ("Sales".to_string(), ImputeStrategy::Median),
                ("Expenses".to_string(), ImputeStrategy::Mean),
            ]),
            group_by: vec!["Region".to_string(), "Month".to_string()],
            reducers: vec![
                ReducerConfig {
                    output: "Sales".to_string(),
                    source: "Sales".to_string(),
                    reducer: Reducer::Sum,
                },
                ReducerConfig {
                    output: "Expenses".to_string(),
                    source: "Expenses".to_string(),
                    reducer: Reducer::Mean,
                },
            ],
            stack: vec!["Sales".to_string(), "Expenses".to_string()],
            series: SeriesPair::default(),
            alpha: NormalityTest::DEFAULT_ALPHA,
        }
    }
}

impl ReportConfig {
    /// Read a JSON config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config '{}'", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn missing_tokens(&self) -> Vec<&str> {
        self.missing_tokens.iter().map(String::as_str).collect()
    }

    pub fn imputer(&self) -> Imputer {
        self.impute
            .iter()
            .fold(Imputer::new(), |imputer, (column, strategy)| {
                imputer.with(column.as_str(), *strategy)
            })
    }

    pub fn aggregator(&self) -> GroupAggregator {
        self.reducers.iter().fold(
            GroupAggregator::new(self.group_by.iter().map(String::as_str)),
            |agg, r| agg.reduce(r.output.as_str(), r.source.as_str(), r.reducer),
        )
    }

    pub fn normality_test(&self) -> tabstat_core::Result<NormalityTest> {
        NormalityTest::new(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ReportConfig::from_json(
            r#"{ "group_by": ["Região", "Mês"], "impute": { "Vendas": "median" } }"#,
        )
        .unwrap();
        assert_eq!(config.group_by, vec!["Região", "Mês"]);
        assert_eq!(config.impute.len(), 1);
        assert_eq!(config.alpha, 0.05);
        assert_eq!(config.series, SeriesPair::default());
        assert_eq!(config.aggregator().keys(), &["Região", "Mês"]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ReportConfig::from_json(r#"{ "groupby": [] }"#).is_err());
        assert!(ReportConfig::from_json(r#"{ "impute": { "Sales": "mode" } }"#).is_err());
    }

    #[test]
    fn test_default_pipelines() {
        let config = ReportConfig::default();
        assert_eq!(config.imputer().strategies().len(), 2);
        assert_eq!(config.aggregator().reducers().len(), 2);
        assert_eq!(config.missing_tokens(), vec!["NA"]);
        assert!(config.normality_test().is_ok());
    }
}

//! Report assembly and text rendering
//!
//! The table pipeline runs load → impute → aggregate → stack → describe;
//! the sample pipeline computes descriptive statistics, a normality test per
//! sample and the correlation between the two. Both are independent.

use crate::config::ReportConfig;
use serde::Serialize;
use std::fmt;
use tabstat_core::{ColumnInfo, Result, Table};
use tabstat_describe::{describe, ColumnSummary, DescriptiveStats};
use tabstat_frame::{hstack, ImputationReport};
use tabstat_hypothesis::{CorrelationResult, CorrelationStrength, CorrelationTest, NormalityResult};
use tracing::instrument;

/// Results of the table pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub original: Table,
    pub info: Vec<ColumnInfo>,
    pub imputation: ImputationReport,
    pub cleaned: Table,
    pub group_by: Vec<String>,
    pub aggregation: Table,
    pub stack_columns: Vec<String>,
    pub stacked: Vec<Vec<f64>>,
    pub summary: Vec<ColumnSummary>,
}

impl TableReport {
    #[instrument(skip_all, fields(rows = table.n_rows()))]
    pub fn build(table: Table, config: &ReportConfig) -> Result<Self> {
        let original = table.clone();
        let info = table.info();

        let mut cleaned = table;
        let imputation = config.imputer().apply(&mut cleaned)?;
        let aggregation = config.aggregator().aggregate(&cleaned)?.to_table()?;

        let stack: Vec<&str> = config.stack.iter().map(String::as_str).collect();
        let stacked = hstack(&cleaned, &stack)?;
        let summary = describe(&cleaned)?;

        Ok(Self {
            original,
            info,
            imputation,
            cleaned,
            group_by: config.group_by.clone(),
            aggregation,
            stack_columns: config.stack.clone(),
            stacked,
            summary,
        })
    }
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original data:\n{}", self.original)?;
        writeln!(f, "Column info:")?;
        for info in &self.info {
            writeln!(f, "  {info}")?;
        }
        writeln!(f, "\nImputation:")?;
        for fill in &self.imputation.fills {
            writeln!(f, "  {fill}")?;
        }
        writeln!(f, "\nCleaned data:\n{}", self.cleaned)?;
        writeln!(
            f,
            "Grouped by {}:\n{}",
            self.group_by.join(", "),
            self.aggregation
        )?;
        writeln!(f, "Stacked {}:", self.stack_columns.join(", "))?;
        for row in &self.stacked {
            let cells: Vec<String> = row.iter().map(|x| x.to_string()).collect();
            writeln!(f, "  [{}]", cells.join(", "))?;
        }
        writeln!(f, "\nSummary:")?;
        for column in &self.summary {
            writeln!(f, "  {}: {}", column.column, column.summary)?;
        }
        Ok(())
    }
}

/// Descriptive statistics and normality of one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport {
    pub name: String,
    pub values: Vec<f64>,
    pub descriptive: DescriptiveStats,
    pub normality: NormalityResult,
}

/// Two-sample comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub samples: [SampleReport; 2],
    pub correlation: CorrelationResult,
    pub strength: CorrelationStrength,
}

impl ComparisonReport {
    #[instrument(skip_all)]
    pub fn build(config: &ReportConfig) -> Result<Self> {
        let a = config.series.a.to_series()?;
        let b = config.series.b.to_series()?;
        let normality = config.normality_test()?;

        let sample = |series: &tabstat_core::Series| -> Result<SampleReport> {
            Ok(SampleReport {
                name: series.name().to_string(),
                values: series.values().to_vec(),
                descriptive: DescriptiveStats::compute(series)?,
                normality: normality.test(series)?,
            })
        };
        let samples = [sample(&a)?, sample(&b)?];

        let correlation = CorrelationTest::new().test(&a, &b)?;
        Ok(Self {
            samples,
            strength: correlation.strength(),
            correlation,
        })
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.samples {
            writeln!(f, "{}: {:?}", sample.name, sample.values)?;
            writeln!(f, "  {}", sample.descriptive)?;
            writeln!(f, "  Shapiro-Wilk: {}", sample.normality)?;
        }
        writeln!(
            f,
            "Correlation ({} vs {}): {} ({})",
            self.samples[0].name, self.samples[1].name, self.correlation, self.strength
        )
    }
}

/// Everything one invocation produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableReport>,
    pub comparison: ComparisonReport,
}

impl Report {
    pub fn build(table: Option<Table>, config: &ReportConfig) -> Result<Self> {
        let table = table
            .map(|t| TableReport::build(t, config))
            .transpose()?;
        Ok(Self {
            table,
            comparison: ComparisonReport::build(config)?,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            writeln!(f, "{table}")?;
        }
        write!(f, "{}", self.comparison)
    }
}

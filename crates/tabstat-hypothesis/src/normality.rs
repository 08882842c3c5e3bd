//! Normality classification on top of the Shapiro-Wilk test

use crate::shapiro::shapiro_wilk;
use serde::Serialize;
use std::fmt;
use tabstat_core::{Error, Result, Series};
use tracing::{debug, instrument};

/// Outcome of a normality test at a given significance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Normality {
    /// Normality not rejected (p > alpha)
    Normal,
    /// Normality rejected (p <= alpha)
    NotNormal,
}

impl Normality {
    /// Classify a p-value; the boundary `p == alpha` is `NotNormal`
    pub fn classify(p_value: f64, alpha: f64) -> Self {
        if p_value > alpha {
            Self::Normal
        } else {
            Self::NotNormal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::NotNormal => "not normal",
        }
    }
}

impl fmt::Display for Normality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`NormalityTest::test`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalityResult {
    pub statistic: f64,
    pub p_value: f64,
    pub classification: Normality,
}

impl fmt::Display for NormalityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W = {:.4}, p = {:.4} ({})",
            self.statistic, self.p_value, self.classification
        )
    }
}

/// Shapiro-Wilk normality test with a fixed significance level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalityTest {
    alpha: f64,
}

impl NormalityTest {
    pub const DEFAULT_ALPHA: f64 = 0.05;

    /// Create a test with significance level `alpha` in (0, 1)
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Significance level {alpha} must be in (0, 1)"
            )));
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Test a series; requires at least 3 values
    #[instrument(skip_all, fields(series = series.name(), n = series.len()))]
    pub fn test(&self, series: &Series) -> Result<NormalityResult> {
        let sw = shapiro_wilk(series.values())?;
        let classification = Normality::classify(sw.p_value, self.alpha);
        debug!(
            statistic = sw.statistic,
            p_value = sw.p_value,
            %classification,
            "shapiro-wilk"
        );
        Ok(NormalityResult {
            statistic: sw.statistic,
            p_value: sw.p_value,
            classification,
        })
    }
}

impl Default for NormalityTest {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
        }
    }
}

//! Pearson correlation with a two-tailed t-test

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;
use tabstat_core::{numeric, Error, Result, Series};
use tracing::{debug, instrument};

/// Calculate the Pearson correlation coefficient
///
/// `r = Σ dx·dy / sqrt(Σ dx² · Σ dy²)`. The result is symmetric in its
/// arguments and clamped to [-1, 1]; `pearson(x, x)` is exactly 1 for any
/// non-constant `x`.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Error::check_len("pearson correlation", x.len(), 2)?;
    if is_constant(x) || is_constant(y) {
        return Err(Error::Degenerate(
            "Cannot compute correlation: zero variance".to_string(),
        ));
    }

    // Two distinct points always lie on a line
    if x.len() == 2 {
        let slope = (x[1] - x[0]) * (y[1] - y[0]);
        return Ok(if slope < 0.0 { -1.0 } else { 1.0 });
    }

    let mean_x = numeric::mean(x)?;
    let mean_y = numeric::mean(y)?;

    // Deviations are divided by their largest magnitude so the squared sums
    // stay in range for large inputs; r is unchanged by per-series scaling.
    let scale_x = max_abs_dev(x, mean_x);
    let scale_y = max_abs_dev(y, mean_y);
    if ![mean_x, mean_y, scale_x, scale_y].iter().all(|v| v.is_finite()) {
        return Err(Error::Computation(
            "Correlation overflowed while centring the data".to_string(),
        ));
    }

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = (xi - mean_x) / scale_x;
        let dy = (yi - mean_y) / scale_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    if !(numerator.is_finite() && sum_sq_x.is_finite() && sum_sq_y.is_finite()) {
        return Err(Error::Computation(
            "Correlation sums are not finite".to_string(),
        ));
    }
    if sum_sq_x == 0.0 || sum_sq_y == 0.0 {
        return Err(Error::Degenerate(
            "Cannot compute correlation: zero variance".to_string(),
        ));
    }

    Ok((numerator / (sum_sq_x * sum_sq_y).sqrt()).clamp(-1.0, 1.0))
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}

fn max_abs_dev(values: &[f64], mean: f64) -> f64 {
    values.iter().fold(0.0, |acc, &v| acc.max((v - mean).abs()))
}

/// Two-tailed p-value of `r` under H0: rho = 0, with `n - 2` degrees of freedom
///
/// An exact linear relation (|r| = 1, which includes every two-point sample)
/// has p = 0.
fn p_value(r: f64, n: usize) -> Result<f64> {
    if r.abs() == 1.0 || n == 2 {
        return Ok(0.0);
    }

    let df = (n - 2) as f64;
    let t = r * (df / (1.0 - r * r)).sqrt();
    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {e}")))?;
    Ok((2.0 * (1.0 - t_dist.cdf(t.abs()))).clamp(0.0, 1.0))
}

/// Result of a Pearson correlation test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationResult {
    /// Pearson correlation coefficient
    pub r: f64,
    /// Two-tailed p-value
    pub p_value: f64,
    /// Number of pairs
    pub n: usize,
}

impl CorrelationResult {
    /// Descriptive label for the coefficient
    pub fn strength(&self) -> CorrelationStrength {
        CorrelationStrength::from_r(self.r)
    }
}

impl fmt::Display for CorrelationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r = {:.4}, p = {:.4}", self.r, self.p_value)
    }
}

/// Pearson correlation test between two paired series
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationTest;

impl CorrelationTest {
    pub fn new() -> Self {
        Self
    }

    /// Correlation coefficient only
    pub fn pearson(&self, x: &Series, y: &Series) -> Result<f64> {
        pearson(x.values(), y.values())
    }

    /// Correlation coefficient and its two-tailed p-value
    #[instrument(skip_all, fields(x = x.name(), y = y.name(), n = x.len()))]
    pub fn test(&self, x: &Series, y: &Series) -> Result<CorrelationResult> {
        pearson_test(x.values(), y.values())
    }
}

/// Correlation coefficient and p-value for raw slices
pub fn pearson_test(x: &[f64], y: &[f64]) -> Result<CorrelationResult> {
    let r = pearson(x, y)?;
    let p_value = p_value(r, x.len())?;
    debug!(r, p_value, "pearson");
    Ok(CorrelationResult {
        r,
        p_value,
        n: x.len(),
    })
}

/// Magnitude bucket of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Perfect,
    Strong,
    Moderate,
    Weak,
    Negligible,
}

/// Sign of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

/// Descriptive interpretation of `r`, for presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CorrelationStrength {
    pub strength: Strength,
    pub direction: Direction,
}

impl CorrelationStrength {
    pub fn from_r(r: f64) -> Self {
        let abs_r = r.abs();
        let strength = if abs_r == 1.0 {
            Strength::Perfect
        } else if abs_r >= 0.7 {
            Strength::Strong
        } else if abs_r >= 0.4 {
            Strength::Moderate
        } else if abs_r >= 0.1 {
            Strength::Weak
        } else {
            Strength::Negligible
        };
        let direction = if r < 0.0 {
            Direction::Negative
        } else {
            Direction::Positive
        };
        Self {
            strength,
            direction,
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strength = match self.strength {
            Strength::Perfect => "perfect",
            Strength::Strong => "strong",
            Strength::Moderate => "moderate",
            Strength::Weak => "weak",
            Strength::Negligible => return f.write_str("negligible"),
        };
        let direction = match self.direction {
            Direction::Positive => "positive",
            Direction::Negative => "negative",
        };
        write!(f, "{strength} {direction}")
    }
}

//! Shapiro-Wilk W test for normality
//!
//! Implements Royston's approximation (Applied Statistics algorithm AS R94,
//! 1995): the coefficients `a_i` are derived from the expected normal order
//! statistics with polynomial corrections for the two most extreme values,
//! and the p-value comes from a normalizing transformation of `W` whose
//! mean and scale are polynomials in `n` (small samples) or `ln n`.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_3, PI};
use tabstat_core::{numeric, Error, Result};
use tracing::warn;

/// Largest sample size for which the p-value approximation was calibrated
pub const MAX_CALIBRATED_N: usize = 5000;

const SMALL: f64 = 1e-19;

// Corrections for the two most extreme coefficients, polynomials in 1/sqrt(n)
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];

// Mean and log-scale of the transformed statistic, 4 <= n <= 11 (in n)
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];

// Mean and log-scale of ln(1 - W), n >= 12 (in ln n)
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];

// Upper bound gamma(n) of the small-sample transformation
const G: [f64; 2] = [-2.273, 0.459];

/// Result of a Shapiro-Wilk test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapiroWilk {
    /// The W statistic, in (0, 1]
    pub statistic: f64,
    /// Probability of a W at least this small under normality
    pub p_value: f64,
    /// Sample size
    pub n: usize,
}

/// Evaluate `c[0] + c[1] x + c[2] x^2 + ...`
#[inline]
fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))
}

/// Coefficients `a_1 .. a_{n/2}` for the lower half of the order statistics
///
/// The full coefficient vector is antisymmetric (`a_{n+1-i} = -a_i`) with
/// unit norm, so only the first half is stored.
fn coefficients(n: usize, normal: &Normal) -> Vec<f64> {
    let half = n / 2;
    if n == 3 {
        return vec![FRAC_1_SQRT_2];
    }

    let an25 = n as f64 + 0.25;
    let m: Vec<f64> = (1..=half)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / an25))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / (n as f64).sqrt();

    let mut a = vec![0.0; half];
    a[0] = poly(&C1, rsn) - m[0] / ssumm2;

    let (first_plain, fac) = if n > 5 {
        a[1] = poly(&C2, rsn) - m[1] / ssumm2;
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a[0] * a[0] - 2.0 * a[1] * a[1]))
            .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a[0] * a[0])).sqrt();
        (1, fac)
    };

    for i in first_plain..half {
        a[i] = -m[i] / fac;
    }
    a
}

/// Upper-tail p-value for `w` at sample size `n`
fn p_value(w: f64, n: usize, normal: &Normal) -> f64 {
    if w >= 1.0 {
        return 1.0;
    }
    if n == 3 {
        // Exact distribution for n = 3
        let p = 6.0 / PI * (w.sqrt().asin() - FRAC_PI_3);
        return p.clamp(0.0, 1.0);
    }

    let an = n as f64;
    let mut y = (1.0 - w).ln();
    let (mean, scale) = if n <= 11 {
        let gamma = poly(&G, an);
        if y >= gamma {
            return 0.0;
        }
        y = -(gamma - y).ln();
        (poly(&C3, an), poly(&C4, an).exp())
    } else {
        let ln_n = an.ln();
        (poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };

    (1.0 - normal.cdf((y - mean) / scale)).clamp(0.0, 1.0)
}

/// Run the Shapiro-Wilk test on a sample
///
/// The sample is sorted internally, so the result does not depend on the
/// input order. Requires at least 3 values and a non-zero range.
pub fn shapiro_wilk(values: &[f64]) -> Result<ShapiroWilk> {
    let n = values.len();
    Error::check_len("shapiro-wilk", n, 3)?;
    numeric::check_finite(values, "shapiro-wilk sample")?;
    if n > MAX_CALIBRATED_N {
        warn!(n, "Shapiro-Wilk p-value may be inaccurate for n > {MAX_CALIBRATED_N}");
    }

    let sorted = numeric::sorted(values);
    let range = sorted[n - 1] - sorted[0];
    if !range.is_finite() {
        return Err(Error::Computation(
            "Shapiro-Wilk sample range overflows".to_string(),
        ));
    }
    if range < SMALL {
        return Err(Error::Degenerate(
            "Shapiro-Wilk is undefined for a sample with zero range".to_string(),
        ));
    }

    let normal = standard_normal()?;
    let a = coefficients(n, &normal);

    // W is location and scale invariant; working on [0, 1] keeps the sums in range
    let x: Vec<f64> = sorted.iter().map(|&v| (v - sorted[0]) / range).collect();
    let mean = numeric::mean(&x)?;
    let ss = numeric::sum_sq_dev(&x, mean);
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, &ai)| ai * (x[n - 1 - i] - x[i]))
        .sum();
    let w = numerator * numerator / ss;
    if !w.is_finite() {
        return Err(Error::Computation(format!(
            "Shapiro-Wilk statistic is not finite (ss = {ss})"
        )));
    }
    // Rounding can push an exactly linear sample a hair above 1
    let statistic = w.min(1.0);

    Ok(ShapiroWilk {
        statistic,
        p_value: p_value(statistic, n, &normal),
        n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_poly() {
        assert_eq!(poly(&[1.0, 2.0, 3.0], 2.0), 1.0 + 4.0 + 12.0);
        assert_eq!(poly(&G, 5.0), -2.273 + 0.459 * 5.0);
    }

    #[test]
    fn test_coefficients_unit_norm() {
        let normal = standard_normal().unwrap();
        for n in [3, 4, 5, 6, 7, 10, 11, 12, 20, 51, 200] {
            let a = coefficients(n, &normal);
            assert_eq!(a.len(), n / 2);
            let norm: f64 = 2.0 * a.iter().map(|v| v * v).sum::<f64>();
            assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-10);
            assert!(a.iter().all(|&v| v > 0.0), "n = {n}: {a:?}");
        }
    }

    #[test]
    fn test_equally_spaced_five() {
        let result = shapiro_wilk(&[3.0, 5.0, 7.0, 9.0, 11.0]).unwrap();
        assert_eq!(result.n, 5);
        assert_abs_diff_eq!(result.statistic, 0.98676, epsilon = 1e-4);
        assert_abs_diff_eq!(result.p_value, 0.96717, epsilon = 1e-4);
    }

    #[test]
    fn test_n_three_exact() {
        let result = shapiro_wilk(&[1.0, 2.0, 4.0]).unwrap();
        assert_abs_diff_eq!(result.statistic, 27.0 / 28.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 0.63689, epsilon = 1e-4);

        let even = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();
        assert_abs_diff_eq!(even.statistic, 1.0, epsilon = 1e-12);
        assert_eq!(even.p_value, 1.0);
    }

    #[test]
    fn test_scale_invariant_for_large_values() {
        let unit = shapiro_wilk(&[1.0, 2.0, 5.0, 9.0, 3.0]).unwrap();
        assert_abs_diff_eq!(unit.statistic, 0.91240, epsilon = 1e-4);
        assert_abs_diff_eq!(unit.p_value, 0.48215, epsilon = 1e-4);

        let large = shapiro_wilk(&[1e200, 2e200, 5e200, 9e200, 3e200]).unwrap();
        assert_abs_diff_eq!(large.statistic, unit.statistic, epsilon = 1e-12);
        assert_abs_diff_eq!(large.p_value, unit.p_value, epsilon = 1e-12);
    }

    #[test]
    fn test_range_overflow() {
        assert!(matches!(
            shapiro_wilk(&[-f64::MAX, 0.0, f64::MAX]),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_twenty_values_skewed() {
        // shapiro.test: W = 0.7893, p-value = 0.0006009
        let sample = [
            2.1, 3.4, 1.9, 5.6, 2.8, 4.2, 3.3, 2.5, 7.9, 3.1, 2.2, 4.8, 3.6, 2.9, 6.4, 3.0, 2.6,
            4.1, 3.8, 11.2,
        ];
        let result = shapiro_wilk(&sample).unwrap();
        assert_eq!(result.n, 20);
        assert_abs_diff_eq!(result.statistic, 0.78930, epsilon = 1e-4);
        assert_abs_diff_eq!(result.p_value, 6.0086e-4, epsilon = 1e-6);
    }

    #[test]
    fn test_mtcars_mpg() {
        // R shapiro.test(mtcars$mpg): W = 0.94756, p-value = 0.1229
        let mpg = [
            21.0, 21.0, 22.8, 21.4, 18.7, 18.1, 14.3, 24.4, 22.8, 19.2, 17.8, 16.4, 17.3, 15.2,
            10.4, 10.4, 14.7, 32.4, 30.4, 33.9, 21.5, 15.5, 15.2, 13.3, 19.2, 27.3, 26.0, 30.4,
            15.8, 19.7, 15.0, 21.4,
        ];
        let result = shapiro_wilk(&mpg).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.94756, epsilon = 1e-4);
        assert_abs_diff_eq!(result.p_value, 0.1229, epsilon = 1e-4);
    }

    #[test]
    fn test_too_few_values() {
        assert!(matches!(
            shapiro_wilk(&[1.0, 2.0]),
            Err(Error::InsufficientSample { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn test_zero_range() {
        assert!(matches!(
            shapiro_wilk(&[4.0, 4.0, 4.0, 4.0]),
            Err(Error::Degenerate(_))
        ));
    }
}

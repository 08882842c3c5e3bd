//! Shared numeric kernels
//!
//! Small, allocation-light building blocks used by the descriptive,
//! hypothesis and frame crates. All functions operate on slices of valid
//! (non-missing, finite) values.

use crate::{Error, Result};

/// Sum of all values
#[inline]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean; fails on an empty slice
pub fn mean(values: &[f64]) -> Result<f64> {
    Error::check_len("mean", values.len(), 1)?;
    Ok(sum(values) / values.len() as f64)
}

/// Sorted copy of the values (ascending, total order)
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Median of already-sorted values
///
/// Even-length input averages the two middle elements.
pub fn median_sorted(sorted: &[f64]) -> Result<f64> {
    Error::check_len("median", sorted.len(), 1)?;
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Median of unsorted values (sorts a copy)
pub fn median(values: &[f64]) -> Result<f64> {
    median_sorted(&sorted(values))
}

/// Sum of squared deviations from the mean
pub fn sum_sq_dev(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|&x| (x - mean) * (x - mean)).sum()
}

/// Sample variance with Bessel's correction
///
/// Undefined for fewer than two values.
pub fn variance(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(Error::Undefined(format!(
            "sample variance requires at least 2 values, got {}",
            values.len()
        )));
    }
    let m = mean(values)?;
    Ok(sum_sq_dev(values, m) / (values.len() - 1) as f64)
}

/// Sample standard deviation (ddof = 1)
pub fn std_dev(values: &[f64]) -> Result<f64> {
    variance(values).map(f64::sqrt)
}

/// Quantile of sorted values by linear interpolation between order statistics
///
/// Uses `h = (n - 1) * p`, the default definition in most dataframe
/// libraries.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "Quantile {p} must be in [0, 1]"
        )));
    }
    Error::check_len("quantile", sorted.len(), 1)?;

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Check that every value is finite
pub fn check_finite(values: &[f64], context: &str) -> Result<()> {
    if values.iter().any(|x| !x.is_finite()) {
        return Err(Error::NonFinite(context.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_and_median() {
        let data = [3.0, 5.0, 7.0, 9.0, 11.0];
        assert_eq!(mean(&data).unwrap(), 7.0);
        assert_eq!(median(&data).unwrap(), 7.0);

        let even = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&even).unwrap(), 2.5);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            mean(&[]),
            Err(Error::InsufficientSample { expected: 1, actual: 0, .. })
        ));
        assert!(median(&[]).is_err());
    }

    #[test]
    fn test_variance_bessel() {
        let data = [3.0, 5.0, 7.0, 9.0, 11.0];
        assert_abs_diff_eq!(variance(&data).unwrap(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(std_dev(&data).unwrap(), 10f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_variance_single_value_undefined() {
        assert!(matches!(variance(&[42.0]), Err(Error::Undefined(_))));
        assert!(matches!(std_dev(&[42.0]), Err(Error::Undefined(_))));
    }

    #[test]
    fn test_quantile_linear() {
        let data = [100.0, 200.0, 300.0];
        assert_eq!(quantile_sorted(&data, 0.0).unwrap(), 100.0);
        assert_eq!(quantile_sorted(&data, 0.25).unwrap(), 150.0);
        assert_eq!(quantile_sorted(&data, 0.5).unwrap(), 200.0);
        assert_eq!(quantile_sorted(&data, 1.0).unwrap(), 300.0);
        assert!(matches!(
            quantile_sorted(&data, 1.5),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite(&[1.0, 2.0], "data").is_ok());
        assert!(check_finite(&[1.0, f64::NAN], "data").is_err());
        assert!(check_finite(&[f64::INFINITY], "data").is_err());
    }
}

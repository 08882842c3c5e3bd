//! Common test utilities for tabstat-hypothesis tests

use proptest::prelude::*;

/// Samples with at least `min_len` values and a non-trivial spread
pub fn spread_sample(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e3f64..1e3, min_len..max_len)
        .prop_filter("needs spread", |v| {
            let lo = v.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = v.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            hi - lo > 1e-3
        })
}

/// Paired samples of equal length with spread in both
pub fn paired_samples(min_len: usize, max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (min_len..max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(-1e3f64..1e3, n),
            prop::collection::vec(-1e3f64..1e3, n),
        )
    })
    .prop_filter("needs spread", |(x, y)| has_spread(x) && has_spread(y))
}

fn has_spread(values: &[f64]) -> bool {
    values.iter().any(|&v| (v - values[0]).abs() > 1e-3)
}

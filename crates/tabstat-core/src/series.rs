//! Immutable numeric series

use crate::{numeric, Error, Result};
use serde::Serialize;

/// An ordered, fixed-length sequence of finite real numbers
///
/// A `Series` is validated once at construction and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    values: Vec<f64>,
}

impl Series {
    /// Create an unnamed series
    ///
    /// Fails on empty input or if any value is NaN or infinite.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        Self::named("", values)
    }

    /// Create a named series
    pub fn named(name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        Error::check_len("series", values.len(), 1)?;
        let context = if name.is_empty() { "series" } else { name.as_str() };
        numeric::check_finite(&values, context)?;
        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty input
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

//! Error types for tabstat
//!
//! Provides a unified error type for all tabstat library crates.

use thiserror::Error;

/// Core error type for statistical and table operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Too few data points for the requested operation
    #[error("Insufficient sample for {operation}: expected at least {expected} values, got {actual}")]
    InsufficientSample {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Paired series of unequal length
    #[error("Length mismatch: left has {left} values, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A column has no valid values to derive a statistic from
    #[error("Column '{0}' has no non-missing values")]
    EmptyColumn(String),

    /// A referenced column does not exist
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A statistic is mathematically undefined for the input
    #[error("Undefined: {0}")]
    Undefined(String),

    /// Input has no spread (zero range or zero variance)
    #[error("Degenerate input: {0}")]
    Degenerate(String),

    /// NaN or infinite values where finite values are required
    #[error("{0} contains NaN or infinite values")]
    NonFinite(String),

    /// Column has the wrong type for the operation
    #[error("Type mismatch in column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Column length disagrees with the table's row count
    #[error("Shape mismatch in column '{column}': expected {expected} rows, got {actual}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share a name
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// A cell that must hold a value is missing
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a sample below the operation's minimum size
    pub fn insufficient(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::InsufficientSample {
            operation,
            expected,
            actual,
        }
    }

    /// Create an error for a numeric operation on a non-numeric column (or vice versa)
    pub fn type_mismatch(column: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            column: column.to_string(),
            expected,
            found,
        }
    }

    /// Check the minimum sample size for an operation
    pub fn check_len(operation: &'static str, len: usize, expected: usize) -> Result<()> {
        if len < expected {
            return Err(Self::insufficient(operation, expected, len));
        }
        Ok(())
    }
}

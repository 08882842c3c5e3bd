//! Error types for tabstat-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("tabstat error: {0}")]
    Core(#[from] tabstat_core::Error),

    #[error("Unsupported type in column '{column}': {dtype}")]
    UnsupportedType { column: String, dtype: String },
}

pub type Result<T> = std::result::Result<T, Error>;

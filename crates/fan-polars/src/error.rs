//! Error types for fan-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Fan error: {0}")]
    Fan(#[from] fan_core::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch in column '{column}': expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },

    #[error("Null key in column '{column}' at row {row}")]
    NullKey { column: String, row: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

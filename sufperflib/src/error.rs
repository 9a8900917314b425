//! Error types for sufperflib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while aggregating benchmark logs
#[derive(Error, Debug)]
pub enum SufperfError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Base path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A column (or token position) that the aggregation needs is absent
    #[error("column {column} is missing")]
    MissingColumn { column: usize },

    /// A column is present but holds no values to aggregate
    #[error("column {column} has no values")]
    EmptyColumn { column: usize },

    /// A token could not be read as a number
    #[error("not a number: '{token}'")]
    InvalidNumber { token: String },

    /// Not enough values for the statistic
    #[error("need at least {needed} values, got {count}")]
    TooFewSamples { needed: usize, count: usize },

    /// Sum-of-squares variance came out negative
    #[error("negative variance: {variance}")]
    NegativeVariance { variance: f64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

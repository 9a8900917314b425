//! Summary statistics over benchmark columns.
//!
//! The standard deviation is the sample one (divisor `n - 1`) computed with
//! the sum-of-squares formula:
//!
//! ```text
//! stddev = sqrt((Σx² - n·mean²) / (n - 1))
//! ```
//!
//! The formula is kept as is. For tightly clustered values rounding can
//! push the variance below zero; that surfaces as
//! [`SufperfError::NegativeVariance`] rather than being clamped.

use serde::{Deserialize, Serialize};

use crate::error::SufperfError;
use crate::Result;

/// Parse every token of a column as a floating point number.
pub fn parse_values<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<f64>> {
    tokens.iter().map(|t| parse_value(t.as_ref())).collect()
}

/// Parse a single token as a floating point number.
pub fn parse_value(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| SufperfError::InvalidNumber {
        token: token.to_string(),
    })
}

/// Arithmetic mean.
///
/// Fails on an empty slice.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(SufperfError::TooFewSamples {
            needed: 1,
            count: 0,
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation.
///
/// Fails with fewer than two values, or when the computed variance is
/// negative.
pub fn sample_stddev(values: &[f64]) -> Result<f64> {
    let n = values.len();
    if n < 2 {
        return Err(SufperfError::TooFewSamples {
            needed: 2,
            count: n,
        });
    }

    let avg = mean(values)?;
    let squares_sum: f64 = values.iter().map(|v| v * v).sum();
    let variance = (squares_sum - n as f64 * avg * avg) / (n - 1) as f64;

    if variance < 0.0 {
        return Err(SufperfError::NegativeVariance { variance });
    }

    Ok(variance.sqrt())
}

/// Mean and sample standard deviation of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mean: f64,
    pub stddev: f64,
}

impl Moments {
    /// Compute both statistics, failing if either fails.
    pub fn of(values: &[f64]) -> Result<Self> {
        Ok(Self {
            mean: mean(values)?,
            stddev: sample_stddev(values)?,
        })
    }
}

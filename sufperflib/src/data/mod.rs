//! Data collection: lay rows out and aggregate them.
//!
//! This module handles the second stage of the pipeline - turning token
//! rows into numbers. It provides:
//!
//! - **Statistics**: `mean`, `sample_stddev` and the `Moments` pair
//! - **Columns**: Positional `ColumnSet` and key-grouped `GroupTable`
//! - **Totals**: Per-algorithm sum/count accumulators across files
//!
//! ## Example
//!
//! ```rust
//! use sufperflib::data::{mean, sample_stddev};
//!
//! assert_eq!(mean(&[2.0, 4.0, 6.0]).unwrap(), 4.0);
//! assert_eq!(sample_stddev(&[2.0, 4.0, 6.0]).unwrap(), 2.0);
//! ```

pub mod columns;
pub mod stats;
pub mod totals;

pub use columns::{ColumnSet, GroupTable};
pub use stats::{mean, parse_value, parse_values, sample_stddev, Moments};
pub use totals::{AlgorithmTotals, Tally};

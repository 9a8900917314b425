//! Per-algorithm totals over a whole corpus.
//!
//! Each entry of the base directory holds an `averages` file with one line
//! per algorithm (`<mean> <stddev> <algorithm>`). The means are summed per
//! algorithm across all entries. Algorithms that are missing a result for
//! some entry (out of memory, crashed) are left out of the totals, since
//! their sums would not be comparable.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::{parse_value, AlgorithmTotals};
use crate::error::SufperfError;
use crate::source::{list_entries, read_records};
use crate::Result;

/// Column summed per algorithm.
pub const VALUE_COLUMN: usize = 0;

/// Column holding the algorithm name.
pub const NAME_COLUMN: usize = 2;

/// Corpus-wide total for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSum {
    pub algorithm: String,
    pub total: f64,
}

/// Sum every entry's `averages` file under `base`.
///
/// Only algorithms with as many results as the best-covered one are
/// returned, in the order they were first seen.
pub fn sum_averages(base: impl AsRef<Path>) -> Result<Vec<AlgorithmSum>> {
    let mut totals = AlgorithmTotals::new();

    for entry in list_entries(base)? {
        for record in read_records(&entry.averages)? {
            let name = record
                .get(NAME_COLUMN)
                .ok_or(SufperfError::MissingColumn {
                    column: NAME_COLUMN,
                })?;
            totals.add(name, parse_value(&record[VALUE_COLUMN])?);
        }
    }

    let complete = totals.complete();
    debug!(
        "{} algorithms with {} results each",
        complete.len(),
        totals.max_count()
    );

    Ok(complete
        .into_iter()
        .map(|(algorithm, total)| AlgorithmSum {
            algorithm: algorithm.to_string(),
            total,
        })
        .collect())
}

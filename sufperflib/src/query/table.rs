//! Corpus summary table: one row per corpus file, one column per algorithm.
//!
//! Each row shows every tracked algorithm's mean time for that file, with
//! the fastest one flagged. An algorithm without a result for a file shows
//! [`MISSING_CELL`]. A final row is built from the corpus-wide totals in
//! the `<basedir>.sum.log` file.
//!
//! The row builder is a small state machine over a working map of
//! algorithm → display value ([`SummaryTable`]). Per entry the tracked
//! algorithms are seeded with [`MISSING_CELL`], the file's lines overwrite
//! them, the row is taken and the tracked cells are reset to empty. The
//! total row is taken without seeding, so algorithms absent from the
//! summary file come out empty rather than [`MISSING_CELL`].

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::parse_value;
use crate::error::SufperfError;
use crate::source::{list_entries, read_records, sum_log_path, Row};
use crate::Result;

/// Algorithms shown when none are configured, in column order.
pub const DEFAULT_ALGORITHMS: [&str; 4] = ["BPR", "DIVSUFSORT", "QSUFSORT", "SKEW"];

/// Cell text for an algorithm that produced no result (out of memory).
pub const MISSING_CELL: &str = "oom";

/// Name column of per-entry `averages` lines (`<mean> <stddev> <name>`).
pub const ENTRY_NAME_COLUMN: usize = 2;

/// Name column of `.sum.log` lines (`<total> <name>`).
pub const TOTAL_NAME_COLUMN: usize = 1;

/// Label of the final row.
pub const TOTAL_LABEL: &str = "Total";

/// Options for building the summary table.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Algorithms to show, in column order
    pub algorithms: Vec<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            algorithms: DEFAULT_ALGORITHMS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl TableOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm columns.
    pub fn algorithms(mut self, algorithms: Vec<String>) -> Self {
        self.algorithms = algorithms;
        self
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Display value (a number as written in the file, `oom`, or empty)
    pub value: String,
    /// Whether this is the row's smallest value
    pub best: bool,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Entry name, or [`TOTAL_LABEL`] for the final row
    pub label: String,
    /// One cell per algorithm, in column order
    pub cells: Vec<Cell>,
}

/// The complete table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTableReport {
    /// Column algorithms
    pub algorithms: Vec<String>,
    /// One row per base directory entry
    pub rows: Vec<TableRow>,
    /// Row built from the summary file
    pub total: TableRow,
}

/// Working state shared by consecutive rows.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    algorithms: Vec<String>,
    cells: HashMap<String, String>,
}

impl SummaryTable {
    pub fn new(algorithms: Vec<String>) -> Self {
        Self {
            algorithms,
            cells: HashMap::new(),
        }
    }

    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// Current working value for `algorithm`.
    pub fn cell(&self, algorithm: &str) -> Option<&str> {
        self.cells.get(algorithm).map(String::as_str)
    }

    /// Mark every tracked algorithm as having no result.
    pub fn seed_missing(&mut self) {
        for algorithm in &self.algorithms {
            self.cells.insert(algorithm.clone(), MISSING_CELL.to_string());
        }
    }

    /// Fold a file's records into the working cells and take a row.
    ///
    /// Each record sets the cell named by its `name_column` token to its
    /// first token. The record with the smallest first token (the earliest
    /// one on ties) marks the row's best cell. After the row is taken each
    /// tracked cell is reset to empty.
    ///
    /// A tracked algorithm with no working value yet (no entry row has been
    /// taken and no record names it) is taken as an empty cell.
    pub fn take_row(
        &mut self,
        label: &str,
        records: &[Row],
        name_column: usize,
    ) -> Result<TableRow> {
        let mut min = f64::MAX;
        let mut best = String::new();

        for record in records {
            let name = record.get(name_column).ok_or(SufperfError::MissingColumn {
                column: name_column,
            })?;
            self.cells.insert(name.clone(), record[0].clone());

            let value = parse_value(&record[0])?;
            if value < min {
                min = value;
                best = name.clone();
            }
        }

        let mut cells = Vec::with_capacity(self.algorithms.len());
        for algorithm in &self.algorithms {
            let value = self
                .cells
                .insert(algorithm.clone(), String::new())
                .unwrap_or_default();
            cells.push(Cell {
                best: *algorithm == best && !value.is_empty(),
                value,
            });
        }

        Ok(TableRow {
            label: label.to_string(),
            cells,
        })
    }
}

/// Build the summary table for the result directories under `base`.
pub fn build_summary_table(
    base: impl AsRef<Path>,
    options: &TableOptions,
) -> Result<SummaryTableReport> {
    let base = base.as_ref();
    let mut table = SummaryTable::new(options.algorithms.clone());

    let mut rows = Vec::new();
    for entry in list_entries(base)? {
        table.seed_missing();
        let records = read_records(&entry.averages)?;
        rows.push(table.take_row(&entry.name, &records, ENTRY_NAME_COLUMN)?);
    }

    let sum_log = sum_log_path(base);
    debug!("{} rows, totals from {}", rows.len(), sum_log.display());
    let records = read_records(&sum_log)?;
    let total = table.take_row(TOTAL_LABEL, &records, TOTAL_NAME_COLUMN)?;

    Ok(SummaryTableReport {
        algorithms: table.algorithms().to_vec(),
        rows,
        total,
    })
}

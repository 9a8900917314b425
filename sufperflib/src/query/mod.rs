//! Query processing: the four benchmark log summaries.
//!
//! This module handles the third stage of the pipeline - turning rows and
//! result files into summaries ready for formatting. It provides:
//!
//! - **Corpus**: Mean/stddev of one corpus-file log (`average_corpus`)
//! - **Grouped**: Per-round mean/stddev of a random-input log (`average_groups`)
//! - **Sums**: Per-algorithm totals across result directories (`sum_averages`)
//! - **Table**: Per-file algorithm comparison table (`build_summary_table`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use sufperflib::query::{build_summary_table, TableOptions};
//!
//! let report = build_summary_table("runs/corpus", &TableOptions::new())?;
//! println!("{} rows", report.rows.len());
//! ```

pub mod corpus;
pub mod grouped;
pub mod sums;
pub mod table;

pub use corpus::{average_corpus, summarize_columns, CorpusAverage};
pub use grouped::{average_groups, summarize_groups, GroupAverage, STDDEV_SENTINEL};
pub use sums::{sum_averages, AlgorithmSum};
pub use table::{
    build_summary_table, Cell, SummaryTable, SummaryTableReport, TableOptions, TableRow,
    DEFAULT_ALGORITHMS, MISSING_CELL, TOTAL_LABEL,
};

//! # sufperflib
//!
//! Aggregation of suffix-sorting benchmark logs into summary lines and
//! LaTeX tables.
//!
//! ## Overview
//!
//! Benchmark runs of suffix array construction algorithms (BPR, DIVSUFSORT,
//! QSUFSORT, SKEW, ...) leave whitespace-delimited logs, one row per
//! measured round. This library turns them into:
//!
//! - **Corpus averages**: Mean/stddev of the time column of one log
//! - **Grouped averages**: Per-round mean/stddev of time and memory
//! - **Algorithm sums**: Per-algorithm totals over a corpus, complete
//!   algorithms only
//! - **Summary table**: One LaTeX row per corpus file, fastest algorithm in
//!   bold, plus a totals row
//!
//! ## Pipeline
//!
//! - [`source`]: Read rows and list result directories
//! - [`data`]: Statistics, column sets and accumulators
//! - [`query`]: The four summaries
//! - [`output`]: Text and LaTeX formatting
//!
//! Library functions return data and never print.
//!
//! ## Example
//!
//! ```rust
//! use sufperflib::output::format_corpus_average;
//! use sufperflib::average_corpus;
//!
//! let log = "\
//! # rnd size time mem(MB) av.lcp status
//!    0 1000 2.000 1.0 0.50 ok alice29_txt
//!    1 1000 4.000 1.0 0.50 ok alice29_txt
//!    2 1000 6.000 1.0 0.50 ok alice29_txt
//! ";
//!
//! let average = average_corpus(log.as_bytes()).unwrap();
//! assert_eq!(format_corpus_average(&average), "4.0000 2.0000 alice29-txt\n");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use error::SufperfError;
pub use query::{
    average_corpus, average_groups, build_summary_table, sum_averages, AlgorithmSum,
    CorpusAverage, GroupAverage, SummaryTableReport, TableOptions,
};

/// Result type for sufperflib operations
pub type Result<T> = std::result::Result<T, SufperfError>;

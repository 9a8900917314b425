//! Source reading: find and read benchmark logs.
//!
//! This module handles the first stage of the pipeline - getting tokens out
//! of log files. It provides:
//!
//! - **Rows**: Line splitting and the leading-token filter for raw logs
//! - **Layout**: Listing result directories and locating summary files
//!
//! ## Example
//!
//! ```rust
//! use sufperflib::source::read_rows;
//!
//! let log = "# rnd size time\n-1 1000 0.9\n0 1000 0.5\n";
//! let rows = read_rows(log.as_bytes()).unwrap();
//! assert_eq!(rows.len(), 1);
//! ```

pub mod layout;
pub mod rows;

pub use layout::{list_entries, sum_log_path, ResultEntry, AVERAGES_FILE, SUM_LOG_SUFFIX};
pub use rows::{is_result_row, leading_integer, read_records, read_rows, Row, KEY_PATTERN};

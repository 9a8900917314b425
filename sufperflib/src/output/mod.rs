//! Output formatting: present summaries as text.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting query results for display. It provides:
//!
//! - **Text**: Whitespace-separated summary lines with four-decimal figures
//! - **LaTeX**: The `tabular` body of the corpus summary table
//!
//! Formatting is pure string building; nothing here touches the filesystem
//! or computes statistics.
//!
//! ## Example
//!
//! ```rust
//! use sufperflib::output::format_algorithm_sums;
//! use sufperflib::AlgorithmSum;
//!
//! let sums = vec![AlgorithmSum { algorithm: "BPR".to_string(), total: 1.5 }];
//! assert_eq!(format_algorithm_sums(&sums), "1.5000 BPR\n");
//! ```

pub mod latex;
pub mod text;

pub use latex::{escape_underscores, render_header, render_summary_table};
pub use text::{format_algorithm_sums, format_corpus_average, format_group_averages};

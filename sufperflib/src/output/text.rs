//! Plain-text summary lines.
//!
//! All statistics are printed with four decimals, fields separated by a
//! single space, one record per line.

use crate::query::{AlgorithmSum, CorpusAverage, GroupAverage};

/// `<mean> <stddev> <label>`
pub fn format_corpus_average(average: &CorpusAverage) -> String {
    format!("{:.4} {:.4} {}\n", average.mean, average.stddev, average.label)
}

/// `<key> <size> <time mean> <time stddev> <memory mean> <memory stddev>`,
/// one line per group.
pub fn format_group_averages(groups: &[GroupAverage]) -> String {
    groups
        .iter()
        .map(|g| {
            format!(
                "{} {} {:.4} {:.4} {:.4} {:.4}\n",
                g.key, g.size, g.time.mean, g.time.stddev, g.memory.mean, g.memory.stddev
            )
        })
        .collect()
}

/// `<total> <algorithm>`, one line per algorithm.
pub fn format_algorithm_sums(sums: &[AlgorithmSum]) -> String {
    sums.iter()
        .map(|s| format!("{:.4} {}\n", s.total, s.algorithm))
        .collect()
}

//! Average of one corpus-file benchmark log.
//!
//! The log holds one row per measured round:
//!
//! ```text
//!  rnd    size    time mem(MB) av.lcp  status  label
//!    0  152089   0.041  12.500  11.40  ok      alice29_txt
//! ```
//!
//! The summary is the mean and sample standard deviation of the `time`
//! column, labelled with the first value of the label column.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::data::{ColumnSet, Moments};
use crate::source::read_rows;
use crate::Result;

/// Column averaged over all rounds.
pub const TIME_COLUMN: usize = 2;

/// Column the summary label is taken from.
pub const LABEL_COLUMN: usize = 6;

/// Summary of a corpus-file log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusAverage {
    pub mean: f64,
    pub stddev: f64,
    /// Label with underscores turned into hyphens.
    pub label: String,
}

/// Read a log stream and summarize it.
///
/// # Example
///
/// ```rust
/// use sufperflib::average_corpus;
///
/// let log = "\
/// -1 100 9.0 1.0 0.5 ok alice29_txt
///  0 100 2.0 1.0 0.5 ok alice29_txt
///  1 100 4.0 1.0 0.5 ok alice29_txt
///  2 100 6.0 1.0 0.5 ok alice29_txt
/// ";
/// let average = average_corpus(log.as_bytes()).unwrap();
/// assert_eq!(average.mean, 4.0);
/// assert_eq!(average.stddev, 2.0);
/// assert_eq!(average.label, "alice29-txt");
/// ```
pub fn average_corpus<R: BufRead>(reader: R) -> Result<CorpusAverage> {
    let rows = read_rows(reader)?;
    summarize_columns(&ColumnSet::from_rows(&rows))
}

/// Summarize an already assembled column set.
///
/// Every failure is fatal: a missing or empty time column, a non-numeric
/// time, fewer than two rounds, or no label column.
pub fn summarize_columns(columns: &ColumnSet) -> Result<CorpusAverage> {
    let times = columns.values(TIME_COLUMN)?;
    let moments = Moments::of(&times)?;
    let label = columns.first(LABEL_COLUMN)?.replace('_', "-");

    Ok(CorpusAverage {
        mean: moments.mean,
        stddev: moments.stddev,
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SufperfError;

    #[test]
    fn test_average_corpus() {
        let log = "\
# rnd size time mem(MB) av.lcp status
  -2 152089 0.900 12.0 11.40 ok alice29_txt_x
  -1 152089 0.800 12.0 11.40 ok alice29_txt_x
   0 152089 2.000 12.0 11.40 ok alice29_txt_x
   1 152089 4.000 12.0 11.40 ok alice29_txt_x
   2 152089 6.000 12.0 11.40 ok alice29_txt_x
";
        let average = average_corpus(log.as_bytes()).unwrap();

        assert_eq!(average.mean, 4.0);
        assert_eq!(average.stddev, 2.0);
        assert_eq!(average.label, "alice29-txt-x");
    }

    #[test]
    fn test_filtered_rows_do_not_contribute() {
        let log = "\
-5 100 1000.0 1.0 0.5 ok a
abc 100 1000.0 1.0 0.5 ok a
0 100 1.0 1.0 0.5 ok a
1 100 3.0 1.0 0.5 ok a
";
        let average = average_corpus(log.as_bytes()).unwrap();

        assert_eq!(average.mean, 2.0);
    }

    #[test]
    fn test_missing_label_column_fails() {
        let log = "0 100 1.0 1.0 0.5 ok\n1 100 3.0 1.0 0.5 ok\n";
        let result = average_corpus(log.as_bytes());

        assert!(matches!(
            result,
            Err(SufperfError::MissingColumn {
                column: LABEL_COLUMN
            })
        ));
    }

    #[test]
    fn test_no_rows_fails() {
        let result = average_corpus("# nothing here\n".as_bytes());

        assert!(matches!(
            result,
            Err(SufperfError::MissingColumn {
                column: TIME_COLUMN
            })
        ));
    }

    #[test]
    fn test_single_round_fails() {
        let result = average_corpus("0 100 1.0 1.0 0.5 ok a\n".as_bytes());

        assert!(matches!(result, Err(SufperfError::TooFewSamples { .. })));
    }
}

//! Per-round averages of a random-input benchmark log.
//!
//! Random-input runs repeat each round several times (samples), each row
//! carrying the round number, input size, time and memory. Rows are grouped
//! by round and the time and memory columns averaged within each group.

use std::io::BufRead;

use log::info;
use serde::{Deserialize, Serialize};

use crate::data::{mean, parse_values, sample_stddev, ColumnSet, GroupTable, Moments};
use crate::error::SufperfError;
use crate::source::read_rows;
use crate::Result;

/// Column holding the input size; only its first value is reported.
pub const SIZE_COLUMN: usize = 1;

/// First averaged column (time).
pub const TIME_COLUMN: usize = 2;

/// Second averaged column (memory).
pub const MEMORY_COLUMN: usize = 3;

/// Standard deviation reported when it cannot be computed.
pub const STDDEV_SENTINEL: f64 = -1.0;

/// Summary of one group of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAverage {
    /// Group key, exactly as it appeared in the log.
    pub key: String,
    /// Input size of the group's first row.
    pub size: i64,
    pub time: Moments,
    pub memory: Moments,
}

/// Read a log stream and summarize each group, in ascending key order.
pub fn average_groups<R: BufRead>(reader: R) -> Result<Vec<GroupAverage>> {
    let rows = read_rows(reader)?;
    summarize_groups(&GroupTable::from_rows(&rows))
}

/// Summarize every group of a table.
pub fn summarize_groups(table: &GroupTable) -> Result<Vec<GroupAverage>> {
    table
        .iter()
        .map(|(key, columns)| summarize_group(key, columns))
        .collect()
}

fn summarize_group(key: &str, columns: &ColumnSet) -> Result<GroupAverage> {
    let size_token = columns.first(SIZE_COLUMN)?;
    let size = size_token
        .parse::<i64>()
        .map_err(|_| SufperfError::InvalidNumber {
            token: size_token.to_string(),
        })?;

    Ok(GroupAverage {
        key: key.to_string(),
        size,
        time: guarded_moments(key, columns, TIME_COLUMN)?,
        memory: guarded_moments(key, columns, MEMORY_COLUMN)?,
    })
}

/// Mean (fatal on failure) and standard deviation (sentinel on failure).
fn guarded_moments(key: &str, columns: &ColumnSet, index: usize) -> Result<Moments> {
    let values = parse_values(columns.column(index)?)?;
    let avg = mean(&values)?;

    let stddev = sample_stddev(&values).unwrap_or_else(|e| {
        info!("group {key}, column {index}: {e}; reporting {STDDEV_SENTINEL}");
        STDDEV_SENTINEL
    });

    Ok(Moments { mean: avg, stddev })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Row;

    fn table(lines: &[&str]) -> GroupTable {
        let rows: Vec<Row> = lines
            .iter()
            .map(|l| l.split_whitespace().map(String::from).collect())
            .collect();
        GroupTable::from_rows(&rows)
    }

    #[test]
    fn test_summarize_groups() {
        let groups =
            summarize_groups(&table(&["A 1 10 100", "A 1 20 200", "B 1 5 50"])).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "A");
        assert_eq!(groups[0].size, 1);
        assert_eq!(groups[0].time.mean, 15.0);
        assert_eq!(groups[0].memory.mean, 150.0);
        assert_eq!(groups[1].key, "B");
    }

    #[test]
    fn test_single_row_group_reports_sentinel() {
        let groups = summarize_groups(&table(&["B 1 5 50"])).unwrap();

        assert_eq!(groups[0].time.mean, 5.0);
        assert_eq!(groups[0].time.stddev, STDDEV_SENTINEL);
        assert_eq!(groups[0].memory.stddev, STDDEV_SENTINEL);
    }

    #[test]
    fn test_groups_sorted_as_strings() {
        let log = "\
# rnd size time mem
 -1 100 9.0 1.0
  9 100 1.0 1.0
  9 100 3.0 1.0
 10 200 2.0 1.0
 10 200 4.0 1.0
";
        let groups = average_groups(log.as_bytes()).unwrap();
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();

        assert_eq!(keys, vec!["10", "9"]);
        assert_eq!(groups[0].size, 200);
        assert_eq!(groups[1].time.mean, 2.0);
    }

    #[test]
    fn test_size_keeps_first_value() {
        let log = "0 100 1.0 1.0\n0 300 3.0 1.0\n";
        let groups = average_groups(log.as_bytes()).unwrap();

        assert_eq!(groups[0].size, 100);
    }

    #[test]
    fn test_average_is_not_guarded() {
        let log = "0 100 1.0 1.0\n0 100 slow 1.0\n";
        let result = average_groups(log.as_bytes());

        assert!(matches!(result, Err(SufperfError::InvalidNumber { .. })));
    }

    #[test]
    fn test_missing_memory_column_fails() {
        let log = "0 100 1.0\n0 100 2.0\n";
        let result = average_groups(log.as_bytes());

        assert!(matches!(
            result,
            Err(SufperfError::MissingColumn {
                column: MEMORY_COLUMN
            })
        ));
    }

    #[test]
    fn test_letter_keys_are_filtered_from_streams() {
        let groups = average_groups("A 1 10 100\nA 1 20 200\n".as_bytes()).unwrap();

        assert!(groups.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let groups = average_groups("".as_bytes()).unwrap();

        assert!(groups.is_empty());
    }
}

//! Column-oriented views over accepted rows.

use std::collections::BTreeMap;

use crate::error::SufperfError;
use crate::source::Row;
use crate::Result;

use super::stats::parse_values;

/// Tokens collected positionally: column `i` holds token `i` of every row
/// pushed so far, in push order.
///
/// Rows may differ in width; the set grows to the widest row and shorter
/// rows simply don't contribute to the trailing columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<Vec<String>>,
}

impl ColumnSet {
    /// Create an empty column set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a column set from rows in order.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Self {
        let mut set = Self::new();
        for row in rows {
            set.push_row(row);
        }
        set
    }

    /// Append every token of `row` to its column.
    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) {
        for (i, token) in row.iter().enumerate() {
            if self.columns.len() <= i {
                self.columns.push(Vec::new());
            }
            self.columns[i].push(token.as_ref().to_string());
        }
    }

    /// Number of columns seen so far.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Tokens of column `index`.
    pub fn column(&self, index: usize) -> Result<&[String]> {
        self.columns
            .get(index)
            .map(Vec::as_slice)
            .ok_or(SufperfError::MissingColumn { column: index })
    }

    /// First token of column `index`.
    pub fn first(&self, index: usize) -> Result<&str> {
        self.column(index)?
            .first()
            .map(String::as_str)
            .ok_or(SufperfError::EmptyColumn { column: index })
    }

    /// Column `index` parsed as numbers.
    pub fn values(&self, index: usize) -> Result<Vec<f64>> {
        parse_values(self.column(index)?)
    }
}

/// Rows grouped by the string value of their first token, each group laid
/// out as its own [`ColumnSet`].
///
/// Groups iterate in ascending lexicographic key order; `"10"` sorts before
/// `"9"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTable {
    groups: BTreeMap<String, ColumnSet>,
}

impl GroupTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows in order.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Add a row to the group named by its first token. Empty rows are
    /// ignored.
    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let Some(key) = row.first() else {
            return;
        };
        self.groups
            .entry(key.as_ref().to_string())
            .or_default()
            .push_row(row);
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no rows have been added.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnSet)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: &str) -> Row {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_column_set_positional() {
        let rows = vec![row("0 1000 0.5"), row("1 1000 0.7 extra")];
        let set = ColumnSet::from_rows(&rows);

        assert_eq!(set.width(), 4);
        assert_eq!(set.column(2).unwrap(), &["0.5", "0.7"]);
        assert_eq!(set.column(3).unwrap(), &["extra"]);
        assert_eq!(set.first(1).unwrap(), "1000");
        assert_eq!(set.values(2).unwrap(), vec![0.5, 0.7]);
    }

    #[test]
    fn test_column_set_missing_column() {
        let set = ColumnSet::from_rows(&[row("0 1000")]);

        assert!(matches!(
            set.column(6),
            Err(SufperfError::MissingColumn { column: 6 })
        ));
        assert!(matches!(
            ColumnSet::new().first(0),
            Err(SufperfError::MissingColumn { column: 0 })
        ));
    }

    #[test]
    fn test_group_table_sorted_keys() {
        let rows = vec![
            row("9 1 10"),
            row("10 1 20"),
            row("9 1 30"),
            row("2 1 40"),
        ];
        let table = GroupTable::from_rows(&rows);
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();

        assert_eq!(table.len(), 3);
        assert_eq!(keys, vec!["10", "2", "9"]);

        let (_, nine) = table.iter().find(|(k, _)| *k == "9").unwrap();
        assert_eq!(nine.column(2).unwrap(), &["10", "30"]);
    }
}

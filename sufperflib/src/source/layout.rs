//! Result directory layout.
//!
//! A benchmark run over a corpus leaves one directory per corpus file, each
//! holding an `averages` file, next to a `<basedir>.sum.log` summary:
//!
//! ```text
//! runs/corpus/
//!     alice29_txt/averages
//!     kennedy_xls/averages
//! runs/corpus.sum.log
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::SufperfError;
use crate::Result;

/// Name of the per-entry results file.
pub const AVERAGES_FILE: &str = "averages";

/// Suffix appended to the base directory to locate the summary file.
pub const SUM_LOG_SUFFIX: &str = ".sum.log";

/// One entry of the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    /// Entry name (the corpus file it was produced for).
    pub name: String,
    /// Path of the entry's `averages` file.
    pub averages: PathBuf,
}

/// Check if a directory entry should be skipped.
fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List the entries of a base directory, sorted by name.
///
/// Only the first level is listed and names starting with a dot are
/// skipped. Every other entry is assumed to be a result directory; whether
/// its `averages` file actually exists is checked when it is read.
///
/// A base path that is not a directory, or one that cannot be read, is an
/// error.
pub fn list_entries(base: impl AsRef<Path>) -> Result<Vec<ResultEntry>> {
    let base = base.as_ref();

    if !base.exists() {
        return Err(SufperfError::PathNotFound(base.to_path_buf()));
    }

    if !base.is_dir() {
        return Err(SufperfError::NotADirectory(base.to_path_buf()));
    }

    let walker = WalkDir::new(base)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| SufperfError::FileRead {
            path: e.path().unwrap_or(base).to_path_buf(),
            source: e.into(),
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            continue;
        }

        entries.push(ResultEntry {
            averages: entry.path().join(AVERAGES_FILE),
            name,
        });
    }

    debug!("found {} entries in {}", entries.len(), base.display());
    Ok(entries)
}

/// Path of the summary file that sits next to the base directory.
///
/// `runs/corpus` (with or without a trailing slash) maps to
/// `runs/corpus.sum.log`.
pub fn sum_log_path(base: impl AsRef<Path>) -> PathBuf {
    let mut path: OsString = base.as_ref().components().as_path().as_os_str().to_owned();
    path.push(SUM_LOG_SUFFIX);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_entries_sorted_without_hidden() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("kennedy_xls")).unwrap();
        fs::create_dir(temp.path().join("alice29_txt")).unwrap();
        fs::create_dir(temp.path().join(".svn")).unwrap();

        let entries = list_entries(temp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["alice29_txt", "kennedy_xls"]);
        assert_eq!(
            entries[0].averages,
            temp.path().join("alice29_txt").join("averages")
        );
    }

    #[test]
    fn test_list_entries_nonexistent() {
        let result = list_entries("/nonexistent/path");

        assert!(matches!(result, Err(SufperfError::PathNotFound(_))));
    }

    #[test]
    fn test_list_entries_base_is_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("corpus");
        fs::write(&file, "1.0 0.1 BPR\n").unwrap();

        let result = list_entries(&file);

        assert!(matches!(result, Err(SufperfError::NotADirectory(_))));
    }

    #[test]
    fn test_sum_log_path() {
        assert_eq!(
            sum_log_path("runs/corpus"),
            PathBuf::from("runs/corpus.sum.log")
        );
        assert_eq!(
            sum_log_path("runs/corpus/"),
            PathBuf::from("runs/corpus.sum.log")
        );
    }
}

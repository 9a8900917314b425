//! Reading whitespace-delimited log rows.
//!
//! Benchmark logs interleave result rows with headers, comments and warmup
//! rounds. A result row is recognised purely by its first token: it must
//! contain a run of digits and its leading integer must not be negative.
//! Warmup rounds carry negative round numbers and are dropped this way.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::error::SufperfError;
use crate::Result;

/// A single accepted line, split into its whitespace-separated tokens.
pub type Row = Vec<String>;

/// Pattern the first token of a row must contain somewhere.
pub const KEY_PATTERN: &str = "[0-9]+";

static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(KEY_PATTERN).expect("KEY_PATTERN is a valid regex"));

/// Value of the integer prefix of `token`.
///
/// An optional sign followed by as many decimal digits as are present;
/// anything after the digits is ignored and a token without leading digits
/// reads as zero (`"12a"` is 12, `"a12"` is 0, `"-5"` is -5).
pub fn leading_integer(token: &str) -> i64 {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -value
    } else {
        value
    }
}

/// Check whether a tokenized line is a result row.
///
/// The first token has to contain a digit run and its integer prefix has to
/// be non-negative. Empty lines are never rows.
pub fn is_result_row<S: AsRef<str>>(tokens: &[S]) -> bool {
    match tokens.first() {
        Some(first) => {
            let first = first.as_ref();
            KEY_REGEX.is_match(first) && leading_integer(first) >= 0
        }
        None => false,
    }
}

/// Read every result row from a line stream, in input order.
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<Row>> {
    let mut rows = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if !is_result_row(&tokens) {
            trace!("skipping line {line:?}");
            continue;
        }

        rows.push(tokens.into_iter().map(String::from).collect());
    }

    Ok(rows)
}

/// Read all non-blank lines of a results file as token rows.
///
/// Unlike [`read_rows`], no leading-token filter is applied: summary files
/// such as `averages` hold nothing but result lines.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let path = path.as_ref();
    debug!("reading {}", path.display());

    let file = File::open(path).map_err(|source| SufperfError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| SufperfError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let tokens: Row = line.split_whitespace().map(String::from).collect();
        if !tokens.is_empty() {
            records.push(tokens);
        }
    }

    Ok(records)
}

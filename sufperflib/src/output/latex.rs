//! LaTeX `tabular` body for the corpus summary table.
//!
//! The output is meant to be `\input` into a document:
//!
//! ```text
//! \begin{tabular}{|l|r|r|r|r|} \hline
//!  & \emph{bpr} & \emph{divsufsort} & \emph{qsufsort} & \emph{skew}\\ \hline
//! \texttt{alice29\_txt} & 5 & oom & oom & \textbf{3}\\
//!  \hline
//! Total & 5.9 & 0.4 &  & \\
//!  \hline
//! \end{tabular}
//! ```
//!
//! Only underscores in entry names are escaped.

use crate::query::{Cell, SummaryTableReport, TableRow};

/// Render the complete table.
///
/// The `tabular` opening and header row are written only when there is at
/// least one entry row.
pub fn render_summary_table(report: &SummaryTableReport) -> String {
    let mut out = String::new();

    if !report.rows.is_empty() {
        out.push_str(&render_header(&report.algorithms));
    }

    for row in &report.rows {
        out.push_str(&format!("\\texttt{{{}}}", escape_underscores(&row.label)));
        out.push_str(&render_cells(row));
    }

    out.push_str(" \\hline\n");
    out.push_str(&report.total.label);
    out.push_str(&render_cells(&report.total));
    out.push_str(" \\hline\n");
    out.push_str("\\end{tabular}\n");

    out
}

/// `tabular` opening and the italic, lowercase algorithm header row.
pub fn render_header<S: AsRef<str>>(algorithms: &[S]) -> String {
    let mut out = String::from("\\begin{tabular}{|l|");
    for _ in algorithms {
        out.push_str("r|");
    }
    out.push_str("} \\hline\n");

    for algorithm in algorithms {
        out.push_str(&format!(
            " & \\emph{{{}}}",
            algorithm.as_ref().to_lowercase()
        ));
    }
    out.push_str("\\\\ \\hline\n");

    out
}

/// ` & c1 & c2 ...\\` for one row, best cell in bold.
fn render_cells(row: &TableRow) -> String {
    let mut out = String::new();
    for cell in &row.cells {
        out.push_str(" & ");
        out.push_str(&render_cell(cell));
    }
    out.push_str("\\\\\n");
    out
}

fn render_cell(cell: &Cell) -> String {
    if cell.best {
        format!("\\textbf{{{}}}", cell.value)
    } else {
        cell.value.clone()
    }
}

/// `alice29_txt` → `alice29\_txt`
pub fn escape_underscores(text: &str) -> String {
    text.replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(value: &str, best: bool) -> Cell {
        Cell {
            value: value.to_string(),
            best,
        }
    }

    fn algorithms() -> Vec<String> {
        ["BPR", "DIVSUFSORT", "QSUFSORT", "SKEW"]
            .iter()
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_render_header() {
        assert_eq!(
            render_header(&algorithms()),
            "\\begin{tabular}{|l|r|r|r|r|} \\hline\n \
             & \\emph{bpr} & \\emph{divsufsort} & \\emph{qsufsort} & \\emph{skew}\\\\ \\hline\n"
        );
    }

    #[test]
    fn test_escape_underscores() {
        assert_eq!(escape_underscores("alice29_txt"), "alice29\\_txt");
        assert_eq!(escape_underscores("E.coli"), "E.coli");
    }

    #[test]
    fn test_render_summary_table() {
        let report = SummaryTableReport {
            algorithms: algorithms(),
            rows: vec![TableRow {
                label: "alice29_txt".to_string(),
                cells: vec![
                    cell("5", false),
                    cell("oom", false),
                    cell("oom", false),
                    cell("3", true),
                ],
            }],
            total: TableRow {
                label: "Total".to_string(),
                cells: vec![
                    cell("5.9", false),
                    cell("0.4", true),
                    cell("", false),
                    cell("", false),
                ],
            },
        };

        let expected = "\
\\begin{tabular}{|l|r|r|r|r|} \\hline
 & \\emph{bpr} & \\emph{divsufsort} & \\emph{qsufsort} & \\emph{skew}\\\\ \\hline
\\texttt{alice29\\_txt} & 5 & oom & oom & \\textbf{3}\\\\
 \\hline
Total & 5.9 & \\textbf{0.4} &  & \\\\
 \\hline
\\end{tabular}
";
        assert_eq!(render_summary_table(&report), expected);
    }

    #[test]
    fn test_render_without_rows_skips_header() {
        let report = SummaryTableReport {
            algorithms: algorithms(),
            rows: Vec::new(),
            total: TableRow {
                label: "Total".to_string(),
                cells: vec![cell("1", true), cell("", false), cell("", false), cell("", false)],
            },
        };

        let output = render_summary_table(&report);

        assert!(!output.contains("\\begin{tabular}"));
        assert!(output.starts_with(" \\hline\nTotal & \\textbf{1} &  &  & \\\\\n"));
        assert!(output.ends_with("\\end{tabular}\n"));
    }
}

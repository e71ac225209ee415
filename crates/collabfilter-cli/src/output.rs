//! Output formatting utilities

use collabfilter::primitives::Matrix;
use colored::Colorize;

/// Column width used by matrix tables
const CELL_WIDTH: usize = 9;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Format a rating or similarity for tables and lists
pub(crate) fn num(value: f64) -> String {
    format!("{value:.3}")
}

/// Print a matrix with `U<i>` row labels and `col_prefix<j>` column labels.
///
/// Cells for which `highlight(row, col)` is true are printed in green.
pub(crate) fn matrix_table(
    matrix: &Matrix<f64>,
    col_prefix: &str,
    highlight: impl Fn(usize, usize) -> bool,
) {
    let mut header = format!("{:<6}", "");
    for col in 0..matrix.n_cols() {
        header.push_str(&format!("{:>width$}", format!("{col_prefix}{col}"), width = CELL_WIDTH));
    }
    println!("  {}", header.white().bold());

    for (row, values) in matrix.rows().enumerate() {
        let mut line = format!("{:<6}", format!("U{row}")).white().bold().to_string();
        for (col, &value) in values.iter().enumerate() {
            let cell = format!("{:>width$}", num(value), width = CELL_WIDTH);
            if highlight(row, col) {
                line.push_str(&cell.green().bold().to_string());
            } else {
                line.push_str(&cell);
            }
        }
        println!("  {line}");
    }
}

/// Print a "nothing to show" marker
pub(crate) fn empty(what: &str) {
    println!("  {}", format!("(no {what})").dimmed());
}

//! Parsing and rendering of utility matrix files.

use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CfError, Result};
use crate::primitives::{Matrix, UtilityMatrix};
use crate::recommend::RatingBounds;

/// Tokens read as an unrated cell.
const MISSING_MARKERS: [&str; 4] = ["-", "?", "NA", "na"];

/// How the two optional bound lines at the top of a file are detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Header if the first two lines hold one number each and a matrix row follows
    #[default]
    Auto,
    /// The first two lines must be the minimum and maximum rating
    Present,
    /// Every line is a matrix row
    Absent,
}

impl FromStr for HeaderMode {
    type Err = CfError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(CfError::invalid_hyperparameter(
                "header",
                other,
                "one of auto, present, absent",
            )),
        }
    }
}

/// A parsed rating file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityFile {
    /// Minimum rating from the header, if any
    pub min_rating: Option<f64>,
    /// Maximum rating from the header, if any
    pub max_rating: Option<f64>,
    /// The ratings; `None` is an unrated cell
    pub matrix: UtilityMatrix,
}

impl UtilityFile {
    /// Parses a rating file from text.
    ///
    /// # Errors
    ///
    /// - [`CfError::Parse`] for a cell that is neither a finite number nor a
    ///   missing marker, or a malformed header under [`HeaderMode::Present`]
    /// - [`CfError::DimensionMismatch`] when a row has a different number of
    ///   cells than the first row
    pub fn parse(input: &str, header: HeaderMode) -> Result<Self> {
        let lines: Vec<(usize, Vec<&str>)> = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .map(|(n, line)| (n, tokenize(line)))
            .collect();

        let has_header = match header {
            HeaderMode::Absent => false,
            HeaderMode::Present => true,
            HeaderMode::Auto => {
                lines.len() >= 3
                    && lines[..2]
                        .iter()
                        .all(|(_, t)| t.len() == 1 && parse_rating(t[0]).is_some_and(|r| r.is_finite()))
            }
        };

        let (min_rating, max_rating, body) = if has_header {
            let min = header_value(&lines, 0, "minimum")?;
            let max = header_value(&lines, 1, "maximum")?;
            (Some(min), Some(max), &lines[2..])
        } else {
            (None, None, &lines[..])
        };

        let mut rows = Vec::with_capacity(body.len());
        let expected = body.first().map_or(0, |(_, t)| t.len());
        for (line_no, tokens) in body {
            if tokens.len() != expected {
                return Err(CfError::dimension_mismatch(
                    &format!("cells on line {line_no}"),
                    expected,
                    tokens.len(),
                ));
            }
            let row = tokens
                .iter()
                .map(|token| parse_cell(token, *line_no))
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        let matrix = Matrix::from_rows(rows)?;
        debug!(
            users = matrix.n_rows(),
            items = matrix.n_cols(),
            header = has_header,
            "parsed utility matrix"
        );

        Ok(Self {
            min_rating,
            max_rating,
            matrix,
        })
    }

    /// Reads and parses a rating file.
    ///
    /// # Errors
    ///
    /// Returns [`CfError::Io`] if the file can't be read, otherwise the
    /// errors of [`UtilityFile::parse`].
    pub fn from_path(path: impl AsRef<Path>, header: HeaderMode) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, header)
    }

    /// Header bounds as clamping limits.
    #[must_use]
    pub fn bounds(&self) -> RatingBounds {
        RatingBounds {
            min: self.min_rating,
            max: self.max_rating,
        }
    }

    /// Renders the file back to text, `-` for unrated cells.
    ///
    /// The header is written only when both bounds are set.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        write_header(&mut out, self.bounds());
        for row in self.matrix.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or_else(|| "-".to_string(), |r| r.to_string()))
                .collect();
            let _ = writeln!(out, "{}", cells.join(" "));
        }
        out
    }
}

/// Renders a completed matrix in the rating file layout.
///
/// Every cell is written with `precision` decimals. The header is written
/// only when both bounds are set.
///
/// # Examples
///
/// ```
/// use collabfilter::format::render_completed;
/// use collabfilter::primitives::Matrix;
/// use collabfilter::recommend::RatingBounds;
///
/// let m = Matrix::from_rows(vec![vec![5.0, 3.25]]).expect("single row");
/// assert_eq!(render_completed(&m, RatingBounds::new(0.0, 5.0), 2), "0\n5\n5.00 3.25\n");
/// ```
#[must_use]
pub fn render_completed(matrix: &Matrix<f64>, bounds: RatingBounds, precision: usize) -> String {
    let mut out = String::new();
    write_header(&mut out, bounds);
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.precision$}")).collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

fn write_header(out: &mut String, bounds: RatingBounds) {
    if let (Some(min), Some(max)) = (bounds.min, bounds.max) {
        let _ = writeln!(out, "{min}\n{max}");
    }
}

fn tokenize(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// `Some(value)` for a number, `None` for anything else.
fn parse_rating(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

fn parse_cell(token: &str, line: usize) -> Result<Option<f64>> {
    if token.is_empty() || MISSING_MARKERS.contains(&token) {
        return Ok(None);
    }
    match parse_rating(token) {
        Some(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(CfError::parse(line, format!("invalid rating '{token}'"))),
    }
}

fn header_value(lines: &[(usize, Vec<&str>)], idx: usize, what: &str) -> Result<f64> {
    let Some((line_no, tokens)) = lines.get(idx) else {
        return Err(CfError::parse(
            lines.last().map_or(1, |(n, _)| n + 1),
            format!("missing {what} rating header line"),
        ));
    };
    match tokens.as_slice() {
        [single] => match parse_rating(single) {
            Some(value) if value.is_finite() => Ok(value),
            _ => Err(CfError::parse(*line_no, format!("invalid {what} rating '{single}'"))),
        },
        _ => Err(CfError::parse(
            *line_no,
            format!("expected a single {what} rating, found {} values", tokens.len()),
        )),
    }
}

#[cfg(test)]
#[path = "utility_tests.rs"]
mod tests;

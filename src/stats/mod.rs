//! Descriptive statistics over partially observed rating vectors.
//!
//! A rating vector is a slice of `Option<f64>`: `Some` for an observed
//! rating, `None` for a cell that has not been rated. Both helpers here are
//! pure and never fail.
//!
//! # Examples
//!
//! ```
//! use collabfilter::stats::{common_observed_indices, mean_of_observed};
//!
//! let a = [Some(5.0), Some(3.0), None];
//! let b = [Some(4.0), None, Some(2.0)];
//!
//! assert_eq!(mean_of_observed(&a), 4.0);
//! assert_eq!(common_observed_indices(&a, &b), vec![0]);
//! ```

/// Arithmetic mean of the observed cells of `ratings`.
///
/// Returns 0 when nothing is observed.
#[must_use]
pub fn mean_of_observed(ratings: &[Option<f64>]) -> f64 {
    let (sum, count) = ratings
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Positions, ascending, where both `a` and `b` hold an observed rating.
///
/// Only the overlapping prefix is scanned if the lengths differ.
#[must_use]
pub fn common_observed_indices(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<usize> {
    a.iter()
        .zip(b)
        .enumerate()
        .filter(|(_, (x, y))| x.is_some() && y.is_some())
        .map(|(i, _)| i)
        .collect()
}

/// Observed pairs `(a[i], b[i])` over [`common_observed_indices`].
pub(crate) fn common_observed_pairs<'a>(
    a: &'a [Option<f64>],
    b: &'a [Option<f64>],
) -> impl Iterator<Item = (f64, f64)> + 'a {
    a.iter().zip(b).filter_map(|(x, y)| Some(((*x)?, (*y)?)))
}

//! Rating prediction for a single unobserved cell.
//!
//! Two aggregation formulas are supported, both weighting each neighbor by
//! its similarity and normalizing by `Σ|sim|`:
//!
//! ```text
//! simple:    p(u, i) = Σ sim(u, v) * r(v, i) / Σ |sim(u, v)|
//! mean-diff: p(u, i) = r̄(u) + Σ sim(u, v) * (r(v, i) - r̄(v)) / Σ |sim(u, v)|
//! ```
//!
//! Only neighbors that rated item `i` contribute. When none does, or when
//! every contributing similarity is 0, the prediction falls back to the
//! user's own mean rating `r̄(u)` (0 for a user with no ratings). A weighted
//! sum that overflows falls back the same way, so predictions are always
//! finite.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::neighbors::Neighbor;
use crate::error::CfError;
use crate::primitives::UtilityMatrix;
use crate::stats::mean_of_observed;

/// Aggregation formula used to turn neighbor ratings into a prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionFormula {
    /// Similarity-weighted average of neighbor ratings
    #[default]
    #[serde(rename = "simple")]
    Simple,
    /// User mean plus the weighted average of neighbor deviations from their own means
    #[serde(rename = "mean-diff")]
    MeanDiff,
}

impl PredictionFormula {
    /// Both formulas, in declaration order.
    pub const ALL: [PredictionFormula; 2] = [Self::Simple, Self::MeanDiff];

    /// Name as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::MeanDiff => "mean-diff",
        }
    }
}

impl fmt::Display for PredictionFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionFormula {
    type Err = CfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "mean-diff" | "mean_diff" | "meandiff" => Ok(Self::MeanDiff),
            other => Err(CfError::invalid_hyperparameter(
                "formula",
                other,
                "one of simple, mean-diff",
            )),
        }
    }
}

/// Optional lower and upper limits applied to raw predictions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingBounds {
    /// Lowest allowed prediction
    pub min: Option<f64>,
    /// Highest allowed prediction
    pub max: Option<f64>,
}

impl RatingBounds {
    /// Bounds with no limits at all.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Bounds with both limits set.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Clamps `raw` to the bounds: minimum first, then maximum.
    ///
    /// No check is made that `min <= max`; with inverted bounds the maximum
    /// wins because it is applied last.
    ///
    /// # Examples
    ///
    /// ```
    /// use collabfilter::recommend::RatingBounds;
    ///
    /// assert_eq!(RatingBounds::new(1.0, 5.0).clamp(6.2), 5.0);
    /// assert_eq!(RatingBounds::new(5.0, 1.0).clamp(3.0), 1.0);
    /// ```
    #[must_use]
    pub fn clamp(&self, raw: f64) -> f64 {
        let mut value = raw;
        if let Some(min) = self.min {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        value
    }
}

/// One neighbor's part in a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborContribution {
    /// Row index of the neighbor
    pub index: usize,
    /// Similarity of the neighbor to the target user
    pub similarity: f64,
    /// The neighbor's rating of the target item
    pub rating: f64,
    /// The neighbor's mean rating; only set by the mean-diff formula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_mean: Option<f64>,
}

/// Full provenance of one filled cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDetail {
    /// Target user (row)
    pub user: usize,
    /// Target item (column)
    pub item: usize,
    /// Neighbors that rated the item, in neighbor-list order
    pub neighbors_used: Vec<NeighborContribution>,
    /// Prediction before clamping
    pub raw_prediction: f64,
    /// Prediction after clamping
    pub final_prediction: f64,
    /// Formula that produced the prediction
    pub formula: PredictionFormula,
}

/// Predicts the rating of `item` for `user` from the given neighbor list.
///
/// `neighbors` is normally the user's entry from
/// [`compute_similarities`](super::compute_similarities); any order is
/// accepted and preserved in the returned contributions.
///
/// # Panics
///
/// Panics if `user`, `item`, or a neighbor index is out of bounds for
/// `matrix`.
///
/// # Examples
///
/// ```
/// use collabfilter::primitives::Matrix;
/// use collabfilter::recommend::{predict_cell, Neighbor, PredictionFormula, RatingBounds};
///
/// let ratings = Matrix::from_rows(vec![
///     vec![Some(4.0), None],
///     vec![Some(4.0), Some(2.0)],
/// ]).expect("rectangular");
/// let neighbors = [Neighbor { index: 1, similarity: 0.5 }];
///
/// let detail = predict_cell(&ratings, 0, 1, &neighbors, PredictionFormula::Simple, RatingBounds::unbounded());
/// assert_eq!(detail.raw_prediction, 2.0);
/// ```
#[must_use]
pub fn predict_cell(
    matrix: &UtilityMatrix,
    user: usize,
    item: usize,
    neighbors: &[Neighbor],
    formula: PredictionFormula,
    bounds: RatingBounds,
) -> PredictionDetail {
    let mut neighbors_used: Vec<NeighborContribution> = neighbors
        .iter()
        .filter_map(|n| {
            matrix.get(n.index, item).map(|rating| NeighborContribution {
                index: n.index,
                similarity: n.similarity,
                rating,
                neighbor_mean: None,
            })
        })
        .collect();

    let user_mean = mean_of_observed(matrix.row(user));
    let user_mean = if user_mean.is_finite() { user_mean } else { 0.0 };

    let raw_prediction = if neighbors_used.is_empty() {
        user_mean
    } else {
        match formula {
            PredictionFormula::Simple => simple_prediction(&neighbors_used, user_mean),
            PredictionFormula::MeanDiff => {
                for contribution in &mut neighbors_used {
                    contribution.neighbor_mean =
                        Some(mean_of_observed(matrix.row(contribution.index)));
                }
                mean_diff_prediction(&neighbors_used, user_mean)
            }
        }
    };
    let raw_prediction = if raw_prediction.is_finite() {
        raw_prediction
    } else {
        user_mean
    };

    PredictionDetail {
        user,
        item,
        neighbors_used,
        raw_prediction,
        final_prediction: bounds.clamp(raw_prediction),
        formula,
    }
}

fn simple_prediction(used: &[NeighborContribution], fallback: f64) -> f64 {
    let (numerator, denominator) = used.iter().fold((0.0, 0.0), |(num, den), c| {
        (num + c.similarity * c.rating, den + c.similarity.abs())
    });
    if denominator == 0.0 {
        fallback
    } else {
        numerator / denominator
    }
}

fn mean_diff_prediction(used: &[NeighborContribution], user_mean: f64) -> f64 {
    let (numerator, denominator) = used.iter().fold((0.0, 0.0), |(num, den), c| {
        let mean = c.neighbor_mean.unwrap_or_default();
        (
            num + c.similarity * (c.rating - mean),
            den + c.similarity.abs(),
        )
    });
    if denominator == 0.0 {
        user_mean
    } else {
        user_mean + numerator / denominator
    }
}

#[cfg(test)]
#[path = "predict_tests.rs"]
mod tests;

//! Matrix completion driver and its configuration.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::neighbors::{compute_similarities, Neighbor};
use super::predict::{predict_cell, PredictionDetail, PredictionFormula, RatingBounds};
use super::similarity::SimilarityMetric;
use crate::error::{CfError, Result};
use crate::primitives::{Matrix, UtilityMatrix};

/// Parameters of one completion run.
///
/// # Examples
///
/// ```
/// use collabfilter::recommend::{PredictionFormula, RecommenderConfig, SimilarityMetric};
///
/// let config = RecommenderConfig::new()
///     .with_metric(SimilarityMetric::Cosine)
///     .with_k(3)
///     .with_formula(PredictionFormula::MeanDiff)
///     .with_min_rating(0.0)
///     .with_max_rating(5.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Similarity metric used to rank neighbors
    #[serde(default)]
    pub metric: SimilarityMetric,
    /// Neighbors kept per user; `None` keeps every other user
    #[serde(default)]
    pub k: Option<usize>,
    /// Aggregation formula
    #[serde(default)]
    pub formula: PredictionFormula,
    /// Clamping applied to every prediction
    #[serde(default)]
    pub bounds: RatingBounds,
}

impl RecommenderConfig {
    /// Pearson metric, full neighbor lists, simple formula, no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the similarity metric.
    #[must_use]
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Keeps only the `k` most similar neighbors per user.
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets the prediction formula.
    #[must_use]
    pub fn with_formula(mut self, formula: PredictionFormula) -> Self {
        self.formula = formula;
        self
    }

    /// Sets the lowest allowed prediction.
    #[must_use]
    pub fn with_min_rating(mut self, min: f64) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the highest allowed prediction.
    #[must_use]
    pub fn with_max_rating(mut self, max: f64) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Checks parameters collected from a user-facing surface.
    ///
    /// Rejects `k = 0` and non-finite bounds. Inverted bounds (`min > max`)
    /// are accepted and clamp as documented on [`RatingBounds::clamp`].
    /// [`predict_matrix`] never calls this.
    ///
    /// # Errors
    ///
    /// Returns [`CfError::InvalidHyperparameter`] for the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.k == Some(0) {
            return Err(CfError::invalid_hyperparameter("k", 0, ">= 1"));
        }
        for (param, bound) in [("min_rating", self.bounds.min), ("max_rating", self.bounds.max)] {
            if let Some(value) = bound {
                if !value.is_finite() {
                    return Err(CfError::invalid_hyperparameter(param, value, "a finite number"));
                }
            }
        }
        Ok(())
    }
}

/// A predicted rating for an item the user has not rated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Item (column) index
    pub item: usize,
    /// Final (clamped) predicted rating
    pub predicted: f64,
}

/// All recommendations for one user, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecommendations {
    /// User (row) index
    pub user: usize,
    /// Unrated items sorted by descending prediction
    pub recommendations: Vec<Recommendation>,
}

/// Everything produced by one completion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderResult {
    /// Input ratings with every unobserved cell replaced by its prediction
    pub completed: Matrix<f64>,
    /// User x user similarity matrix
    pub similarities: Matrix<f64>,
    /// Ranked (and possibly truncated) neighbor list per user
    pub neighbors: Vec<Vec<Neighbor>>,
    /// One entry per originally unobserved cell, in row-major order
    pub predictions: Vec<PredictionDetail>,
    /// One entry per user
    pub recommendations: Vec<UserRecommendations>,
}

impl RecommenderResult {
    /// Number of users (rows).
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.completed.n_rows()
    }

    /// Number of items (columns).
    #[must_use]
    pub fn n_items(&self) -> usize {
        self.completed.n_cols()
    }

    /// The `n` best recommendations for `user`, or `None` for an unknown user.
    #[must_use]
    pub fn top_n(&self, user: usize, n: usize) -> Option<&[Recommendation]> {
        self.recommendations.get(user).map(|recs| {
            let end = n.min(recs.recommendations.len());
            &recs.recommendations[..end]
        })
    }

    /// Prediction details for `user`, in item order.
    pub fn predictions_for(&self, user: usize) -> impl Iterator<Item = &PredictionDetail> + '_ {
        self.predictions.iter().filter(move |p| p.user == user)
    }

    /// Serializes the whole result as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CfError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Fills every unobserved cell of `matrix` and ranks recommendations.
///
/// Neighbor lists are computed once and reused for every missing cell of a
/// user. Cells are visited in row-major order, which is also the order of
/// [`RecommenderResult::predictions`]. The call is total for any rectangular
/// matrix, including one with no users or no items.
///
/// # Examples
///
/// ```
/// use collabfilter::primitives::Matrix;
/// use collabfilter::recommend::{predict_matrix, RecommenderConfig, SimilarityMetric};
///
/// let ratings = Matrix::from_rows(vec![
///     vec![Some(5.0), Some(3.0), None],
///     vec![Some(4.0), None, Some(2.0)],
///     vec![None, Some(3.0), Some(4.0)],
/// ]).expect("rectangular");
///
/// let config = RecommenderConfig::new().with_metric(SimilarityMetric::Cosine).with_k(2);
/// let result = predict_matrix(&ratings, &config);
///
/// assert_eq!(result.predictions.len(), 3);
/// assert!(result.completed.as_slice().iter().all(|v| v.is_finite()));
/// ```
#[must_use]
pub fn predict_matrix(matrix: &UtilityMatrix, config: &RecommenderConfig) -> RecommenderResult {
    let (n_users, n_items) = matrix.shape();
    debug!(
        users = n_users,
        items = n_items,
        metric = %config.metric,
        k = ?config.k,
        formula = %config.formula,
        "completing utility matrix"
    );

    let ranking = compute_similarities(matrix, config.metric, config.k);

    // NaN marks "not yet predicted"; every such cell is overwritten below.
    let mut completed = matrix.map(|cell| cell.unwrap_or(f64::NAN));
    let mut predictions = Vec::new();

    for user in 0..n_users {
        let neighbors = &ranking.neighbors[user];
        for item in 0..n_items {
            if matrix.get(user, item).is_some() {
                continue;
            }
            let detail = predict_cell(matrix, user, item, neighbors, config.formula, config.bounds);
            trace!(
                user,
                item,
                contributors = detail.neighbors_used.len(),
                raw = detail.raw_prediction,
                prediction = detail.final_prediction,
                "filled cell"
            );
            completed.set(user, item, detail.final_prediction);
            predictions.push(detail);
        }
    }

    let recommendations = (0..n_users)
        .map(|user| rank_unrated_items(matrix, &completed, user))
        .collect();

    debug!(predictions = predictions.len(), "utility matrix completed");

    RecommenderResult {
        completed,
        similarities: ranking.similarities,
        neighbors: ranking.neighbors,
        predictions,
        recommendations,
    }
}

/// Positional form of [`predict_matrix`].
///
/// # Examples
///
/// ```
/// use collabfilter::primitives::Matrix;
/// use collabfilter::recommend::{predict_matrix_with, PredictionFormula, SimilarityMetric};
///
/// let ratings = Matrix::from_rows(vec![vec![Some(2.0), None]]).expect("single row");
/// let result = predict_matrix_with(&ratings, SimilarityMetric::Pearson, None, PredictionFormula::Simple, Some(3.0), None);
/// assert_eq!(result.completed.get(0, 1), 3.0);
/// ```
#[must_use]
pub fn predict_matrix_with(
    matrix: &UtilityMatrix,
    metric: SimilarityMetric,
    k: Option<usize>,
    formula: PredictionFormula,
    min_rating: Option<f64>,
    max_rating: Option<f64>,
) -> RecommenderResult {
    let config = RecommenderConfig {
        metric,
        k,
        formula,
        bounds: RatingBounds {
            min: min_rating,
            max: max_rating,
        },
    };
    predict_matrix(matrix, &config)
}

fn rank_unrated_items(
    original: &UtilityMatrix,
    completed: &Matrix<f64>,
    user: usize,
) -> UserRecommendations {
    let mut recommendations: Vec<Recommendation> = original
        .row(user)
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(item, _)| Recommendation {
            item,
            predicted: completed.get(user, item),
        })
        .collect();

    // Stable: equal predictions keep ascending item order.
    recommendations.sort_by(|a, b| b.predicted.total_cmp(&a.predicted));

    UserRecommendations {
        user,
        recommendations,
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

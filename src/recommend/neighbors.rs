//! Pairwise user similarity and per-user neighbor ranking.

use serde::{Deserialize, Serialize};

use super::similarity::SimilarityMetric;
use crate::primitives::{Matrix, UtilityMatrix};

/// Another user ranked by similarity to a reference user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Row index of the peer user
    pub index: usize,
    /// Similarity between the reference user and the peer
    pub similarity: f64,
}

/// Output of [`compute_similarities`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborRanking {
    /// Square, symmetric similarity matrix with a zero diagonal
    pub similarities: Matrix<f64>,
    /// One similarity-descending list per user, never containing the user itself
    pub neighbors: Vec<Vec<Neighbor>>,
}

/// Builds the user x user similarity matrix and each user's ranked neighbors.
///
/// Each unordered pair `(i, j)`, `i < j`, is evaluated once and mirrored into
/// both cells; the diagonal stays 0. Neighbor lists are sorted by descending
/// similarity with a stable sort, so ties keep ascending user order. With
/// `k = Some(n)` each list is cut to its first `n` entries; with `None` every
/// other user is kept.
///
/// # Examples
///
/// ```
/// use collabfilter::primitives::Matrix;
/// use collabfilter::recommend::{compute_similarities, SimilarityMetric};
///
/// let ratings = Matrix::from_rows(vec![
///     vec![Some(5.0), Some(3.0), None],
///     vec![Some(4.0), None, Some(2.0)],
///     vec![None, Some(3.0), Some(4.0)],
/// ]).expect("rectangular");
///
/// let ranking = compute_similarities(&ratings, SimilarityMetric::Cosine, Some(1));
/// assert_eq!(ranking.similarities.get(0, 1), 1.0);
/// assert_eq!(ranking.neighbors[0].len(), 1);
/// ```
#[must_use]
pub fn compute_similarities(
    matrix: &UtilityMatrix,
    metric: SimilarityMetric,
    k: Option<usize>,
) -> NeighborRanking {
    let n = matrix.n_rows();
    let mut similarities = Matrix::zeros(n, n);

    for i in 0..n {
        for j in (i + 1)..n {
            let sim = metric.similarity(matrix.row(i), matrix.row(j));
            similarities.set(i, j, sim);
            similarities.set(j, i, sim);
        }
    }

    let neighbors = (0..n)
        .map(|i| rank_neighbors(&similarities, i, k))
        .collect();

    NeighborRanking {
        similarities,
        neighbors,
    }
}

fn rank_neighbors(similarities: &Matrix<f64>, user: usize, k: Option<usize>) -> Vec<Neighbor> {
    let mut ranked: Vec<Neighbor> = similarities
        .row(user)
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != user)
        .map(|(index, &similarity)| Neighbor { index, similarity })
        .collect();

    // `sort_by` is stable: equal similarities stay in index order.
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    if let Some(k) = k {
        ranked.truncate(k);
    }
    ranked
}

#[cfg(test)]
#[path = "neighbors_tests.rs"]
mod tests;

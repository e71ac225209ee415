//! User-user similarity metrics over commonly rated items.
//!
//! Every metric looks only at the positions both users rated
//! ([`common_observed_indices`](crate::stats::common_observed_indices)) and
//! returns exactly 0 when there is no such position.
//!
//! # Quick Start
//!
//! ```
//! use collabfilter::recommend::SimilarityMetric;
//!
//! let alice = [Some(5.0), Some(3.0), None];
//! let bob = [Some(4.0), None, Some(2.0)];
//!
//! // Only item 0 is shared.
//! assert_eq!(SimilarityMetric::Cosine.similarity(&alice, &bob), 1.0);
//! assert_eq!(SimilarityMetric::Pearson.similarity(&alice, &bob), 0.0);
//! assert_eq!(SimilarityMetric::Euclidean.similarity(&alice, &bob), 0.5);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CfError;
use crate::stats::common_observed_pairs;

/// Similarity metric used to rank neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    /// Pearson correlation over co-rated items, range [-1, 1]
    #[default]
    Pearson,
    /// Cosine of the angle between co-rated sub-vectors, range [-1, 1]
    Cosine,
    /// `1 / (1 + d)` with `d` the Euclidean distance, range (0, 1]
    Euclidean,
}

impl SimilarityMetric {
    /// All metrics, in declaration order.
    pub const ALL: [SimilarityMetric; 3] = [Self::Pearson, Self::Cosine, Self::Euclidean];

    /// Similarity between two rating vectors under this metric.
    #[must_use]
    pub fn similarity(self, a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
        match self {
            Self::Pearson => pearson_similarity(a, b),
            Self::Cosine => cosine_similarity(a, b),
            Self::Euclidean => euclidean_similarity(a, b),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::Cosine => "cosine",
            Self::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMetric {
    type Err = CfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pearson" => Ok(Self::Pearson),
            "cosine" => Ok(Self::Cosine),
            "euclidean" => Ok(Self::Euclidean),
            other => Err(CfError::invalid_hyperparameter(
                "metric",
                other,
                "one of pearson, cosine, euclidean",
            )),
        }
    }
}

/// Pearson correlation between two users over their co-rated items.
///
/// Means are taken over the co-rated items only, not over each user's full
/// history.
///
/// # Formula
/// ```text
/// pearson(A, B) = Σ(a - ā)(b - b̄) / (sqrt(Σ(a - ā)²) * sqrt(Σ(b - b̄)²))
/// ```
///
/// Returns 0 with no co-rated item, when either side is constant over the
/// co-rated items (a single shared item always is), or when ratings are large
/// enough for the sums to overflow.
///
/// # Examples
///
/// ```
/// use collabfilter::recommend::pearson_similarity;
///
/// let a = [Some(1.0), Some(2.0), Some(3.0)];
/// let b = [Some(2.0), Some(4.0), Some(6.0)];
/// assert!((pearson_similarity(&a, &b) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn pearson_similarity(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = common_observed_pairs(a, b).collect();
    if pairs.is_empty() {
        return 0.0;
    }

    let n = pairs.len() as f64;
    let (sum_a, sum_b) = pairs
        .iter()
        .fold((0.0, 0.0), |(sa, sb), (x, y)| (sa + x, sb + y));
    let mean_a = sum_a / n;
    let mean_b = sum_b / n;

    let mut numerator = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in &pairs {
        let da = x - mean_a;
        let db = y - mean_b;
        numerator += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    let denominator = var_a.sqrt() * var_b.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}

/// Cosine similarity between two users over their co-rated items.
///
/// # Formula
/// ```text
/// cosine(A, B) = Σ(ab) / (sqrt(Σa²) * sqrt(Σb²))
/// ```
///
/// Returns 0 with no co-rated item, when either co-rated sub-vector is all
/// zeros, or when the sums overflow.
#[must_use]
pub fn cosine_similarity(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let mut common = 0usize;
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in common_observed_pairs(a, b) {
        common += 1;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if common == 0 {
        return 0.0;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    finite_or_zero(dot / denominator)
}

/// Inverse Euclidean distance similarity over co-rated items.
///
/// # Formula
/// ```text
/// euclidean(A, B) = 1 / (1 + sqrt(Σ(a - b)²))
/// ```
///
/// The formula itself never yields 0, but no co-rated item still returns
/// exactly 0 so that "no overlap" ranks below every real neighbor.
#[must_use]
pub fn euclidean_similarity(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let mut common = 0usize;
    let mut sum_sq = 0.0;
    for (x, y) in common_observed_pairs(a, b) {
        common += 1;
        let d = x - y;
        sum_sq += d * d;
    }
    if common == 0 {
        return 0.0;
    }
    1.0 / (1.0 + sum_sq.sqrt())
}

// Overflowed sums give `inf / inf`; treat that like any other degenerate pair.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

//! User-based collaborative filtering.
//!
//! This module fills the unobserved cells of a [`UtilityMatrix`] from the
//! ratings of similar users and ranks each user's unrated items.
//!
//! # Algorithms
//!
//! - **Similarity**: Pearson, cosine, or inverse Euclidean distance over
//!   co-rated items ([`SimilarityMetric`])
//! - **Neighbors**: full similarity matrix, then a ranked (optionally top-k)
//!   neighbor list per user ([`compute_similarities`])
//! - **Prediction**: simple weighted average or mean-centered weighted
//!   average, with optional clamping ([`predict_cell`])
//! - **Completion**: every missing cell, plus per-user recommendations
//!   ([`predict_matrix`])
//!
//! # Quick Start
//!
//! ```
//! use collabfilter::primitives::Matrix;
//! use collabfilter::recommend::{predict_matrix, PredictionFormula, RecommenderConfig, SimilarityMetric};
//!
//! let ratings = Matrix::from_rows(vec![
//!     vec![Some(5.0), Some(3.0), Some(4.0), None],
//!     vec![Some(3.0), Some(1.0), Some(2.0), Some(3.0)],
//!     vec![Some(4.0), Some(3.0), Some(4.0), Some(3.0)],
//! ]).expect("rectangular");
//!
//! let config = RecommenderConfig::new()
//!     .with_metric(SimilarityMetric::Pearson)
//!     .with_k(2)
//!     .with_formula(PredictionFormula::MeanDiff)
//!     .with_min_rating(0.0)
//!     .with_max_rating(5.0);
//!
//! let result = predict_matrix(&ratings, &config);
//! let best = result.top_n(0, 1).expect("user 0 exists");
//! assert_eq!(best[0].item, 3);
//! ```
//!
//! [`UtilityMatrix`]: crate::primitives::UtilityMatrix

pub mod engine;
pub mod neighbors;
pub mod predict;
pub mod similarity;

pub use engine::{
    predict_matrix, predict_matrix_with, Recommendation, RecommenderConfig, RecommenderResult,
    UserRecommendations,
};
pub use neighbors::{compute_similarities, Neighbor, NeighborRanking};
pub use predict::{predict_cell, NeighborContribution, PredictionDetail, PredictionFormula, RatingBounds};
pub use similarity::{cosine_similarity, euclidean_similarity, pearson_similarity, SimilarityMetric};

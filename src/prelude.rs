//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use collabfilter::prelude::*;
//! ```

pub use crate::error::{CfError, Result};
pub use crate::format::{HeaderMode, UtilityFile};
pub use crate::primitives::{Matrix, UtilityMatrix};
pub use crate::recommend::{
    compute_similarities, predict_cell, predict_matrix, Neighbor, PredictionDetail,
    PredictionFormula, RatingBounds, RecommenderConfig, RecommenderResult, SimilarityMetric,
};
pub use crate::stats::{common_observed_indices, mean_of_observed};

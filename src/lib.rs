//! collabfilter: user-based collaborative filtering in pure Rust.
//!
//! collabfilter completes a sparse user x item rating matrix from the
//! ratings of similar users and derives per-user top-N recommendations.
//! Every call is synchronous, stateless, and side-effect free, so
//! independent matrices can be processed on separate threads without
//! coordination.
//!
//! # Quick Start
//!
//! ```
//! use collabfilter::prelude::*;
//!
//! let ratings = UtilityMatrix::from_rows(vec![
//!     vec![Some(5.0), Some(3.0), None],
//!     vec![Some(4.0), None, Some(2.0)],
//!     vec![None, Some(3.0), Some(4.0)],
//! ]).expect("rectangular");
//!
//! let config = RecommenderConfig::new()
//!     .with_metric(SimilarityMetric::Cosine)
//!     .with_k(2)
//!     .with_formula(PredictionFormula::Simple);
//! let result = predict_matrix(&ratings, &config);
//!
//! assert_eq!(result.completed.get(2, 0), 4.5);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: rectangular [`Matrix`] and the [`UtilityMatrix`] alias
//! - [`stats`]: means and overlaps of partially observed rating vectors
//! - [`recommend`]: similarity metrics, neighbor ranking, prediction, completion
//! - [`format`]: rating file parsing and rendering
//! - [`error`]: [`CfError`] and the crate [`Result`]

#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod stats;

pub use error::{CfError, Result};
pub use primitives::{Matrix, UtilityMatrix};
pub use recommend::{predict_matrix, RecommenderConfig, RecommenderResult};

//! Core containers for rating data.
//!
//! A [`UtilityMatrix`] holds the partially observed user x item ratings.
//! Unobserved cells are `None`, never a numeric sentinel, so every real
//! number stays available as a legitimate rating.

mod matrix;

pub use matrix::Matrix;

/// User x item rating matrix; `None` marks an unobserved cell.
pub type UtilityMatrix = Matrix<Option<f64>>;

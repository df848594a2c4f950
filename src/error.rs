//! Error taxonomy shared by the corrected t-tests
//!
//! Every check runs before any numeric work, and the first violated check
//! is the one reported.

use thiserror::Error;

/// Errors for the corrected t-test procedures
#[derive(Error, Debug)]
pub enum TestError {
    #[error("x and y are not the same length ({x_len} vs {y_len})")]
    ShapeMismatch { x_len: usize, y_len: usize },

    #[error("`{name}` has a non-finite value at index {index}")]
    NonFiniteScore { name: &'static str, index: usize },

    #[error("parameter `{name}` must be {constraint} (got {value})")]
    BadParameter {
        name: &'static str,
        constraint: &'static str,
        value: f64,
    },

    #[error("columns `model`, `values`, `k`, and `r` are not all the same length")]
    RaggedTable,

    #[error("column `model` should have exactly two unique labels, one per model (found {found})")]
    ModelLabels { found: usize },

    #[error("fold {fold}, repeat {rep} has no scores for model `{model}`")]
    IncompleteCell {
        fold: usize,
        rep: usize,
        model: String,
    },
}

pub type Result<T> = std::result::Result<T, TestError>;

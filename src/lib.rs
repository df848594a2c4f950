//! Corregir - Corrected t-tests for resampled machine learning evaluations
//!
//! This library provides significance tests for comparing two models'
//! performance scores under repeated random resampling, k-fold
//! cross-validation, and repeated k-fold cross-validation. The classic
//! paired t-test assumes independent samples, but reusing the same data
//! across train/test splits correlates the per-split score estimates and
//! inflates false-positive rates. Each test here widens the variance
//! estimate with the correction appropriate to its evaluation scheme.
//!
//! All three procedures are pure functions: they validate their inputs,
//! compute a corrected t-statistic over the per-split score differences,
//! and return the statistic together with a one-sided p-value whose tail
//! follows the observed sign.

pub mod error;
pub mod kfold;
pub mod repkfold;
pub mod resampled;
pub mod result;
pub mod table;

mod moments;
mod tails;
mod validate;

pub use error::{Result, TestError};
pub use kfold::kfold_ttest;
pub use repkfold::repkfold_ttest;
pub use resampled::resampled_ttest;
pub use result::TestResult;
pub use table::{LongFormatTable, Observation};

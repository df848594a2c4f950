//! Corrected t-test for k-fold cross-validated scores

use crate::error::Result;
use crate::moments::{mean, sample_std};
use crate::result::TestResult;
use crate::tails::one_sided_p;
use crate::validate;

/// Corrected paired t-test for scores from k-fold cross-validation.
///
/// `x` and `y` hold one score per fold for the two models, paired
/// positionally. `n` is the total sample size and `k` the training set
/// size; both must exceed one, since the correction divides by `1 - 1/k`
/// and the t-distribution needs `n - 1 > 0` degrees of freedom.
///
/// The paired-t denominator is widened by `(1/n + 1/k) / (1 - 1/k)`.
/// Identical score vectors produce NaN for both result fields.
pub fn kfold_ttest(x: &[f64], y: &[f64], n: f64, k: f64) -> Result<TestResult> {
    validate::check_score_vectors(x, y)?;
    validate::check_sample_count("n", n)?;
    validate::check_sample_count("k", k)?;

    let d: Vec<f64> = x.iter().zip(y).map(|(a, b)| a - b).collect();
    let statistic = mean(&d) / (sample_std(&d) * ((1.0 / n + 1.0 / k) / (1.0 - 1.0 / k)));
    let p_value = one_sided_p(statistic, n - 1.0)?;

    Ok(TestResult { statistic, p_value })
}

//! Corrected t-test for repeated random train/test resampling

use crate::error::Result;
use crate::moments::{mean, sample_std};
use crate::result::TestResult;
use crate::tails::one_sided_p;
use crate::validate;

/// Corrected paired t-test for scores from repeated random resampling.
///
/// `x` and `y` hold one score per resample for the two models, paired
/// positionally. `n1` and `n2` are the train and test set sizes of each
/// split; `n` is the number of resamples and defaults to `x.len()` when
/// omitted, in which case an informational `tracing` event records the
/// default (the call still succeeds).
///
/// The paired-t denominator is widened by the factor `1/n + n2/n1` to
/// account for the overlap between training sets across resamples, with
/// `n - 1` degrees of freedom. Identical score vectors have a zero-variance
/// difference and produce NaN for both result fields.
pub fn resampled_ttest(
    x: &[f64],
    y: &[f64],
    n: Option<f64>,
    n1: f64,
    n2: f64,
) -> Result<TestResult> {
    validate::check_score_vectors(x, y)?;

    let n = match n {
        Some(n) => n,
        None => {
            let default = x.len() as f64;
            tracing::info!(n = default, "n argument missing, using length of x as default");
            default
        }
    };

    validate::check_sample_count("n", n)?;
    validate::check_positive("n1", n1)?;
    validate::check_positive("n2", n2)?;

    let d: Vec<f64> = x.iter().zip(y).map(|(a, b)| a - b).collect();
    let statistic = mean(&d) / (sample_std(&d) * (1.0 / n + n2 / n1));
    let p_value = one_sided_p(statistic, n - 1.0)?;

    Ok(TestResult { statistic, p_value })
}

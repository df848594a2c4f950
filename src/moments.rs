//! Sample moments of difference vectors

pub(crate) fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Bessel-corrected sample variance (ddof = 1).
///
/// A single-element vector divides zero by zero and propagates NaN, the
/// same degenerate value the uncorrected formula would feed downstream.
pub(crate) fn sample_variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (data.len() as f64 - 1.0)
}

pub(crate) fn sample_std(data: &[f64]) -> f64 {
    sample_variance(data).sqrt()
}

//! Test outcome record

use serde::Serialize;

/// Outcome of a single corrected hypothesis test.
///
/// `p_value` is one-sided: the tail is chosen by the sign of `statistic`,
/// so it reflects the direction actually observed rather than a fixed
/// hypothesis direction. Callers wanting a specific directional test must
/// interpret the sign themselves.
///
/// A degenerate difference vector with zero variance (e.g. identical score
/// vectors) yields `NaN` for both fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    /// Corrected t-statistic
    pub statistic: f64,
    /// One-sided p-value in `[0, 1]`
    pub p_value: f64,
}

//! One-sided tail probabilities from Student's t-distribution

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{Result, TestError};

/// One-sided p-value for `statistic` at `df` degrees of freedom.
///
/// The tail follows the observed sign: lower tail for a negative statistic,
/// upper tail otherwise. A NaN statistic (zero-variance difference vector)
/// yields a NaN p-value rather than an error.
pub(crate) fn one_sided_p(statistic: f64, df: f64) -> Result<f64> {
    if statistic.is_nan() {
        return Ok(f64::NAN);
    }

    let dist = StudentsT::new(0.0, 1.0, df).map_err(|_| TestError::BadParameter {
        name: "df",
        constraint: "a finite positive number",
        value: df,
    })?;

    if statistic < 0.0 {
        Ok(dist.cdf(statistic))
    } else {
        Ok(dist.sf(statistic))
    }
}

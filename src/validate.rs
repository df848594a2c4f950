//! Boundary validation shared by the three tests

use crate::error::{Result, TestError};

/// Paired score vectors must match in length and contain only finite values.
pub(crate) fn check_score_vectors(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(TestError::ShapeMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    check_finite("x", x)?;
    check_finite("y", y)?;
    Ok(())
}

pub(crate) fn check_finite(name: &'static str, values: &[f64]) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(TestError::NonFiniteScore { name, index });
        }
    }
    Ok(())
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TestError::BadParameter {
            name,
            constraint: "a finite positive number",
            value,
        });
    }
    Ok(())
}

/// Sample counts feed `n - 1` degrees of freedom, so one is too few.
pub(crate) fn check_sample_count(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 1.0 {
        return Err(TestError::BadParameter {
            name,
            constraint: "a finite number greater than one",
            value,
        });
    }
    Ok(())
}

pub(crate) fn check_count(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(TestError::BadParameter {
            name,
            constraint: "a positive count",
            value: 0.0,
        });
    }
    Ok(())
}

//! Long-format score table for repeated k-fold results

use serde::Serialize;

use crate::error::{Result, TestError};

/// One score observation: a model label, the measured value, and the
/// 1-based fold and repeat indices it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub model: String,
    pub value: f64,
    pub fold: usize,
    pub rep: usize,
}

/// Scores for two models over repeated k-fold cross-validation, one row per
/// (model, fold, repeat) measurement.
///
/// Mirrors a long-format frame with columns `model`, `values`, `k`, and `r`.
#[derive(Debug, Clone, Default)]
pub struct LongFormatTable {
    rows: Vec<Observation>,
}

impl LongFormatTable {
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    /// Build from four parallel columns.
    ///
    /// Ragged columns are a schema error: every row needs all four fields.
    pub fn from_columns(
        models: Vec<String>,
        values: Vec<f64>,
        folds: Vec<usize>,
        reps: Vec<usize>,
    ) -> Result<Self> {
        let len = models.len();
        if values.len() != len || folds.len() != len || reps.len() != len {
            return Err(TestError::RaggedTable);
        }

        let rows = models
            .into_iter()
            .zip(values)
            .zip(folds.into_iter().zip(reps))
            .map(|((model, value), (fold, rep))| Observation {
                model,
                value,
                fold,
                rep,
            })
            .collect();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct model labels in lexicographic order.
    pub(crate) fn sorted_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.rows.iter().map(|row| row.model.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

//! Corrected t-test for repeated k-fold cross-validated scores

use crate::error::{Result, TestError};
use crate::moments::{mean, sample_variance};
use crate::result::TestResult;
use crate::table::LongFormatTable;
use crate::tails::one_sided_p;
use crate::validate;

/// Corrected paired t-test over repeated k-fold results.
///
/// `data` holds one row per (model, fold, repeat) score. `n1` and `n2` are
/// the train and test set sizes, `k` the fold count, and `r` the repeat
/// count. For every (fold, repeat) cell the scores are averaged per model
/// and the cell difference is `mean(first) - mean(second)`, where the two
/// labels are taken in lexicographic order; keep labels stable across calls
/// to get comparable signs. The resolved order is emitted as a debug event.
///
/// Every one of the `k * r` cells must contain at least one score for both
/// models; an incomplete cell is an error rather than a silent NaN. With a
/// single cell (`k = r = 1`) the difference vector has no variance estimate
/// and the result is NaN, as is any zero-variance difference vector.
///
/// Degrees of freedom are `k * r - 1`.
pub fn repkfold_ttest(
    data: &LongFormatTable,
    n1: f64,
    n2: f64,
    k: usize,
    r: usize,
) -> Result<TestResult> {
    let values: Vec<f64> = data.rows().iter().map(|row| row.value).collect();
    validate::check_finite("values", &values)?;
    validate::check_positive("n1", n1)?;
    validate::check_positive("n2", n2)?;
    validate::check_count("k", k)?;
    validate::check_count("r", r)?;

    let labels = data.sorted_labels();
    if labels.len() != 2 {
        return Err(TestError::ModelLabels {
            found: labels.len(),
        });
    }
    tracing::debug!(
        first = labels[0],
        second = labels[1],
        "cell differences are first minus second"
    );

    let cells = k * r;
    let mut d = Vec::with_capacity(cells);
    for i in 1..=k {
        for j in 1..=r {
            let mut sums = [0.0_f64; 2];
            let mut counts = [0_usize; 2];
            for row in data.rows().iter().filter(|row| row.fold == i && row.rep == j) {
                let slot = usize::from(row.model != labels[0]);
                sums[slot] += row.value;
                counts[slot] += 1;
            }
            if counts[0] == 0 || counts[1] == 0 {
                let missing = if counts[0] == 0 { labels[0] } else { labels[1] };
                return Err(TestError::IncompleteCell {
                    fold: i,
                    rep: j,
                    model: missing.to_string(),
                });
            }
            d.push(sums[0] / counts[0] as f64 - sums[1] / counts[1] as f64);
        }
    }

    // The nested square root over the variance follows the reference
    // formula for this correction and is deliberately not simplified.
    let statistic =
        mean(&d) / (sample_variance(&d).sqrt() * (1.0 / cells as f64 + n2 / n1)).sqrt();
    let p_value = one_sided_p(statistic, cells as f64 - 1.0)?;

    Ok(TestResult { statistic, p_value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Observation;

    fn obs(model: &str, value: f64, fold: usize, rep: usize) -> Observation {
        Observation {
            model: model.to_string(),
            value,
            fold,
            rep,
        }
    }

    /// Two folds, two repeats, with one cell holding several scores per
    /// model to exercise the within-cell averaging.
    fn two_by_two() -> LongFormatTable {
        LongFormatTable::from_rows(vec![
            obs("gbm", 0.80, 1, 1),
            obs("gbm", 0.84, 1, 1),
            obs("rf", 0.78, 1, 1),
            obs("gbm", 0.90, 1, 2),
            obs("rf", 0.85, 1, 2),
            obs("rf", 0.87, 1, 2),
            obs("gbm", 0.70, 2, 1),
            obs("rf", 0.75, 2, 1),
            obs("gbm", 0.88, 2, 2),
            obs("rf", 0.80, 2, 2),
        ])
    }

    #[test]
    fn test_known_fixture_with_cell_averaging() {
        // Cell differences d = [0.04, 0.04, -0.05, 0.08], mean 0.0275,
        // sd exactly 0.055; with 1/(k*r) + n2/n1 = 0.5 the denominator is
        // sqrt(0.0275), so the statistic equals sqrt(0.0275) as well.
        let result = repkfold_ttest(&two_by_two(), 80.0, 20.0, 2, 2).unwrap();
        assert!((result.statistic - 0.0275_f64.sqrt()).abs() < 1e-12);
        // Upper tail of t(3), closed form for df = 3.
        assert!((result.p_value - 0.439_42).abs() < 5e-4);
    }

    #[test]
    fn test_opposed_cells_give_half_p_value() {
        // d = [1, -1]: the statistic is zero no matter the sizes, and the
        // one-sided p-value is exactly one half.
        let table = LongFormatTable::from_rows(vec![
            obs("a", 2.0, 1, 1),
            obs("b", 1.0, 1, 1),
            obs("a", 1.0, 2, 1),
            obs("b", 2.0, 2, 1),
        ]);
        let result = repkfold_ttest(&table, 100.0, 25.0, 2, 1).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!((result.p_value - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_relabeling_flips_the_sign() {
        // Renaming "gbm" to "zz" reverses the lexicographic order, so the
        // statistic negates while the directional p-value is unchanged.
        let renamed = LongFormatTable::from_rows(
            two_by_two()
                .rows()
                .iter()
                .cloned()
                .map(|mut row| {
                    if row.model == "gbm" {
                        row.model = "zz".to_string();
                    }
                    row
                })
                .collect(),
        );
        let ab = repkfold_ttest(&two_by_two(), 80.0, 20.0, 2, 2).unwrap();
        let ba = repkfold_ttest(&renamed, 80.0, 20.0, 2, 2).unwrap();
        assert!((ab.statistic + ba.statistic).abs() < 1e-12);
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
    }

    #[test]
    fn test_missing_model_in_cell_is_an_error() {
        let table = LongFormatTable::from_rows(vec![
            obs("a", 2.0, 1, 1),
            obs("b", 1.0, 1, 1),
            obs("a", 1.0, 2, 1),
        ]);
        let err = repkfold_ttest(&table, 100.0, 25.0, 2, 1).unwrap_err();
        match err {
            TestError::IncompleteCell { fold, rep, model } => {
                assert_eq!((fold, rep), (2, 1));
                assert_eq!(model, "b");
            }
            other => panic!("expected IncompleteCell, got {other:?}"),
        }
    }

    #[test]
    fn test_three_model_labels_are_rejected() {
        let table = LongFormatTable::from_rows(vec![
            obs("a", 2.0, 1, 1),
            obs("b", 1.0, 1, 1),
            obs("c", 1.5, 1, 1),
        ]);
        let err = repkfold_ttest(&table, 100.0, 25.0, 1, 1).unwrap_err();
        assert!(matches!(err, TestError::ModelLabels { found: 3 }));
    }

    #[test]
    fn test_non_finite_value_is_rejected_before_grouping() {
        let table = LongFormatTable::from_rows(vec![
            obs("a", f64::NAN, 1, 1),
            obs("b", 1.0, 1, 1),
        ]);
        let err = repkfold_ttest(&table, 100.0, 25.0, 1, 1).unwrap_err();
        assert!(matches!(
            err,
            TestError::NonFiniteScore {
                name: "values",
                index: 0
            }
        ));
    }

    #[test]
    fn test_zero_fold_count_is_rejected() {
        let table = two_by_two();
        let err = repkfold_ttest(&table, 80.0, 20.0, 0, 2).unwrap_err();
        assert!(matches!(err, TestError::BadParameter { name: "k", .. }));
    }

    #[test]
    fn test_single_cell_has_no_variance_estimate() {
        let table = LongFormatTable::from_rows(vec![
            obs("a", 2.0, 1, 1),
            obs("b", 1.0, 1, 1),
        ]);
        let result = repkfold_ttest(&table, 100.0, 25.0, 1, 1).unwrap();
        assert!(result.statistic.is_nan());
        assert!(result.p_value.is_nan());
    }
}

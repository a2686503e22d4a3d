//! Linear scoring and arg-max class prediction.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{Result, RidgeError};
use crate::utils::Parallelism;

/// Compute the score matrix `features · weights`.
///
/// # Arguments
///
/// * `features` - Observations, shape `[n_samples, n_features]`
/// * `weights` - Weights, shape `[n_features, n_classes]`
///
/// # Returns
///
/// Scores with shape `[n_samples, n_classes]`.
pub fn predict_scores(
    features: ArrayView2<'_, f64>,
    weights: ArrayView2<'_, f64>,
) -> Result<Array2<f64>> {
    check_shapes(features, weights)?;
    Ok(features.dot(&weights))
}

/// Predict the class of every row (sequential).
///
/// See [`predict_with`].
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use ridgers::inference::predict;
///
/// let x = array![[1.0, 0.0], [0.0, 1.0]];
/// let w = array![[0.0, 1.0], [1.0, 0.0]];
/// assert_eq!(predict(x.view(), w.view()).unwrap(), array![1, 0]);
/// ```
pub fn predict(features: ArrayView2<'_, f64>, weights: ArrayView2<'_, f64>) -> Result<Array1<usize>> {
    predict_with(features, weights, Parallelism::Sequential)
}

/// Predict the class of every row with explicit parallelism control.
///
/// Each row's class is the column index of its maximum score, ties going to
/// the lowest index. Output order matches row order in `features`.
///
/// # Errors
///
/// [`RidgeError::DimensionMismatch`] if `features.ncols() != weights.nrows()`
/// or `weights` has no columns.
pub fn predict_with(
    features: ArrayView2<'_, f64>,
    weights: ArrayView2<'_, f64>,
    parallelism: Parallelism,
) -> Result<Array1<usize>> {
    let scores = predict_scores(features, weights)?;
    Ok(argmax_rows(scores.view(), parallelism))
}

/// Arg-max of every row of a score matrix.
///
/// Rows are independent, so the parallel path only changes scheduling.
/// A matrix with zero columns maps every row to 0.
pub fn argmax_rows(scores: ArrayView2<'_, f64>, parallelism: Parallelism) -> Array1<usize> {
    let classes = parallelism.maybe_par_map(scores.axis_iter(Axis(0)), argmax);
    Array1::from(classes)
}

/// Index of the largest value, lowest index on ties.
///
/// NaN compares as the maximum: the first NaN in the row wins.
#[inline]
pub fn argmax(row: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &value) in row.iter().enumerate() {
        if value.is_nan() {
            return i;
        }
        if value > best_value {
            best = i;
            best_value = value;
        }
    }
    best
}

fn check_shapes(features: ArrayView2<'_, f64>, weights: ArrayView2<'_, f64>) -> Result<()> {
    if features.ncols() != weights.nrows() {
        return Err(RidgeError::dimension(
            "predict: weight rows per feature",
            features.ncols(),
            weights.nrows(),
        ));
    }
    if weights.ncols() == 0 {
        return Err(RidgeError::dimension("predict: weight columns", 1, 0));
    }
    Ok(())
}

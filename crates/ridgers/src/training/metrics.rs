//! Classification metrics over predicted class indices.

use ndarray::ArrayView1;

use crate::error::{Result, RidgeError};

/// A metric comparing predicted classes to true labels.
pub trait MetricFn: Send + Sync {
    /// Compute the metric. `predictions` and `labels` must have equal length.
    fn compute(&self, predictions: ArrayView1<'_, usize>, labels: ArrayView1<'_, i64>)
    -> Result<f64>;

    /// Whether larger values indicate a better model.
    fn higher_is_better(&self) -> bool;

    fn name(&self) -> &'static str;
}

/// Fraction of samples whose prediction differs from the label.
///
/// Lower is better. Empty input yields `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorRate;

impl MetricFn for ErrorRate {
    fn compute(
        &self,
        predictions: ArrayView1<'_, usize>,
        labels: ArrayView1<'_, i64>,
    ) -> Result<f64> {
        let n = check_lengths(predictions, labels)?;
        if n == 0 {
            return Ok(0.0);
        }
        Ok((n - correct(predictions, labels)) as f64 / n as f64)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "error_rate"
    }
}

/// Fraction of samples whose prediction equals the label.
///
/// Higher is better. Empty input yields `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy;

impl MetricFn for Accuracy {
    fn compute(
        &self,
        predictions: ArrayView1<'_, usize>,
        labels: ArrayView1<'_, i64>,
    ) -> Result<f64> {
        let n = check_lengths(predictions, labels)?;
        if n == 0 {
            return Ok(0.0);
        }
        Ok(correct(predictions, labels) as f64 / n as f64)
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }
}

fn check_lengths(predictions: ArrayView1<'_, usize>, labels: ArrayView1<'_, i64>) -> Result<usize> {
    if predictions.len() != labels.len() {
        return Err(RidgeError::dimension(
            "metric: predictions per label",
            labels.len(),
            predictions.len(),
        ));
    }
    Ok(labels.len())
}

fn correct(predictions: ArrayView1<'_, usize>, labels: ArrayView1<'_, i64>) -> usize {
    predictions
        .iter()
        .zip(labels.iter())
        .filter(|&(&p, &l)| i64::try_from(p).is_ok_and(|p| p == l))
        .count()
}

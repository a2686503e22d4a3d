//! Closed-form ridge regression trainer.
//!
//! Fits `W = (XᵀX + λI)⁻¹ XᵀY` by solving the regularized normal equations
//! with [`linalg::solve`](crate::linalg::solve). No inverse is formed.

use std::time::Instant;

use ndarray::{Array2, ArrayView2};

use crate::error::{Result, RidgeError};
use crate::linalg;

use super::{TrainingLogger, Verbosity};

/// Parameters for ridge training.
#[derive(Clone, Debug)]
pub struct RidgeParams {
    /// L2 regularization strength. Must be finite and `>= 0`.
    pub lambda: f64,
    /// Whether the first feature (usually a bias column) is penalized.
    ///
    /// When `false` the `(0, 0)` entry of `λI` is zero.
    pub penalize_first_feature: bool,
    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for RidgeParams {
    fn default() -> Self {
        Self {
            lambda: 1e-4,
            penalize_first_feature: true,
            verbosity: Verbosity::default(),
        }
    }
}

/// Ridge regression trainer.
#[derive(Clone, Debug, Default)]
pub struct RidgeTrainer {
    params: RidgeParams,
}

impl RidgeTrainer {
    pub fn new(params: RidgeParams) -> Self {
        Self { params }
    }

    /// Fit the weight matrix.
    ///
    /// # Arguments
    ///
    /// * `features` - Observations, shape `[n_samples, n_features]`
    /// * `targets` - Targets, shape `[n_samples, n_outputs]` (typically one-hot)
    ///
    /// # Returns
    ///
    /// Weights with shape `[n_features, n_outputs]`.
    ///
    /// # Errors
    ///
    /// - [`RidgeError::InvalidLambda`] for a negative or non-finite `lambda`
    /// - [`RidgeError::DimensionMismatch`] if row counts differ
    /// - [`RidgeError::SingularMatrix`] if the regularized system is singular,
    ///   which can only happen when `lambda` is zero or negligible
    pub fn train(
        &self,
        features: ArrayView2<'_, f64>,
        targets: ArrayView2<'_, f64>,
    ) -> Result<Array2<f64>> {
        let lambda = self.params.lambda;
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(RidgeError::InvalidLambda(lambda));
        }

        let (n_samples, n_features) = features.dim();
        if targets.nrows() != n_samples {
            return Err(RidgeError::dimension(
                "train: target rows",
                n_samples,
                targets.nrows(),
            ));
        }

        let logger = TrainingLogger::new(self.params.verbosity);
        let started = Instant::now();
        logger.start_training(n_samples, n_features, targets.ncols(), lambda);
        if n_samples < n_features {
            logger.log_underdetermined(n_samples, n_features);
        }

        let mut gram = features.t().dot(&features);
        let rhs = features.t().dot(&targets);

        let skip = usize::from(!self.params.penalize_first_feature);
        for i in skip..n_features {
            gram[[i, i]] += lambda;
        }
        logger.log_system(n_features, n_features.saturating_sub(skip));

        let weights = linalg::solve(gram.view(), rhs.view())?;

        logger.finish_training(started.elapsed());
        Ok(weights)
    }
}

/// Fit ridge weights with the default policy (`λI` over every feature).
///
/// Equivalent to `RidgeTrainer` with only `lambda` changed from the defaults.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use ridgers::training::train;
///
/// let x = array![[1.0, 0.0], [0.0, 1.0]];
/// let y = array![[1.0, 0.0], [0.0, 1.0]];
/// let w = train(x.view(), y.view(), 1.0).unwrap();
/// assert_eq!(w, array![[0.5, 0.0], [0.0, 0.5]]);
/// ```
pub fn train(
    features: ArrayView2<'_, f64>,
    targets: ArrayView2<'_, f64>,
    lambda: f64,
) -> Result<Array2<f64>> {
    RidgeTrainer::new(RidgeParams {
        lambda,
        ..Default::default()
    })
    .train(features, targets)
}

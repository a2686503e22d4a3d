//! Ridge classifier configuration.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::training::{RidgeParams, Verbosity};

/// Configuration for [`RidgeClassifier`](super::RidgeClassifier).
///
/// # Example
///
/// ```
/// use ridgers::RidgeConfig;
///
/// let config = RidgeConfig::builder().lambda(0.5).n_classes(3).build();
/// assert_eq!(config.n_classes, 3);
/// assert!(config.penalize_first_feature);
/// ```
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct RidgeConfig {
    /// L2 regularization strength (default: 1e-4).
    #[builder(default = 1e-4)]
    pub lambda: f64,
    /// Number of classes labels are encoded over (default: 10).
    #[builder(default = 10)]
    pub n_classes: usize,
    /// Penalize the first feature like every other (default: true).
    /// Set to false when column 0 is a bias column that should stay unregularized.
    #[builder(default = true)]
    pub penalize_first_feature: bool,
    /// Thread count: 0 = auto, 1 = sequential, >1 = exact count (default: 0).
    #[builder(default = 0)]
    pub n_threads: usize,
    /// Verbosity level for training output (default: silent).
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl Default for RidgeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RidgeConfig {
    /// Convert to trainer parameters.
    pub fn to_trainer_params(&self) -> RidgeParams {
        RidgeParams {
            lambda: self.lambda,
            penalize_first_feature: self.penalize_first_feature,
            verbosity: self.verbosity,
        }
    }
}

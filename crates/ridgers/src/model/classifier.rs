//! Ridge classifier: one-hot encoding, closed-form training and arg-max
//! prediction behind one type.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::data::one_hot;
use crate::error::Result;
use crate::inference;
use crate::training::{MetricFn, RidgeTrainer};
use crate::utils::run_with_threads;

use super::{ModelMeta, RidgeConfig};

/// High-level ridge classifier with training, prediction and evaluation.
///
/// Access components via [`weights()`](Self::weights), [`meta()`](Self::meta)
/// and [`config()`](Self::config).
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use ridgers::{RidgeClassifier, RidgeConfig};
///
/// let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
/// let y = array![0, 1, 1];
/// let config = RidgeConfig::builder().n_classes(2).n_threads(1).build();
///
/// let model = RidgeClassifier::train(x.view(), y.view(), config).unwrap();
/// assert_eq!(model.predict(x.view()).unwrap(), array![0, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct RidgeClassifier {
    /// Weights with shape `[n_features, n_classes]`.
    weights: Array2<f64>,
    meta: ModelMeta,
    config: RidgeConfig,
}

impl RidgeClassifier {
    /// Train a classifier on labelled samples.
    ///
    /// Labels are one-hot encoded over `config.n_classes` before the solve.
    ///
    /// # Arguments
    ///
    /// * `features` - Observations, shape `[n_samples, n_features]`
    /// * `labels` - Class labels in `[0, config.n_classes)`
    /// * `config` - Training configuration
    pub fn train(
        features: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, i64>,
        config: RidgeConfig,
    ) -> Result<Self> {
        run_with_threads(config.n_threads, |_parallelism| {
            Self::train_inner(features, labels, config)
        })?
    }

    /// Training without thread pool management.
    fn train_inner(
        features: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, i64>,
        config: RidgeConfig,
    ) -> Result<Self> {
        let targets = one_hot(labels, config.n_classes)?;
        let trainer = RidgeTrainer::new(config.to_trainer_params());
        let weights = trainer.train(features, targets.view())?;

        let meta = ModelMeta {
            n_features: weights.nrows(),
            n_classes: weights.ncols(),
            n_train_samples: features.nrows(),
        };

        Ok(Self {
            weights,
            meta,
            config,
        })
    }

    /// Wrap an existing weight matrix of shape `[n_features, n_classes]`.
    pub fn from_weights(weights: Array2<f64>, config: RidgeConfig) -> Self {
        let meta = ModelMeta {
            n_features: weights.nrows(),
            n_classes: weights.ncols(),
            ..Default::default()
        };
        Self {
            weights,
            meta,
            config,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn weights(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    pub fn config(&self) -> &RidgeConfig {
        &self.config
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Raw class scores, shape `[n_samples, n_classes]`.
    pub fn predict_scores(&self, features: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        inference::predict_scores(features, self.weights.view())
    }

    /// Predicted class per row.
    ///
    /// Rows are scored in parallel according to `config.n_threads`.
    pub fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<usize>> {
        run_with_threads(self.config.n_threads, |parallelism| {
            inference::predict_with(features, self.weights.view(), parallelism)
        })?
    }

    /// Predict `features` and score the predictions against `labels`.
    pub fn evaluate<M: MetricFn>(
        &self,
        features: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, i64>,
        metric: &M,
    ) -> Result<f64> {
        let predictions = self.predict(features)?;
        metric.compute(predictions.view(), labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RidgeError;
    use crate::testing::data::{synthetic_multiclass, with_bias_column};
    use crate::training::{Accuracy, ErrorRate};
    use ndarray::array;

    fn sequential(n_classes: usize) -> RidgeConfig {
        RidgeConfig::builder()
            .n_classes(n_classes)
            .n_threads(1)
            .build()
    }

    #[test]
    fn train_records_metadata() {
        let x = array![[1.0, 0.0, 0.5], [0.0, 1.0, 0.5], [1.0, 1.0, 0.0], [0.2, 0.1, 0.9]];
        let y = array![0, 1, 2, 0];
        let model = RidgeClassifier::train(x.view(), y.view(), sequential(3)).unwrap();

        assert_eq!(model.meta().n_features, 3);
        assert_eq!(model.meta().n_classes, 3);
        assert_eq!(model.meta().n_train_samples, 4);
        assert_eq!(model.weights().dim(), (3, 3));
    }

    #[test]
    fn out_of_range_label_fails_training() {
        let x = array![[1.0], [2.0]];
        let y = array![0, 5];
        let err = RidgeClassifier::train(x.view(), y.view(), sequential(3)).unwrap_err();
        assert!(matches!(err, RidgeError::LabelOutOfRange { row: 1, label: 5, .. }));
    }

    #[test]
    fn separable_data_is_fit_well() {
        let split = synthetic_multiclass(600, 5, 3, 42, 0.0);
        let features = with_bias_column(&split.features().to_owned());
        let model =
            RidgeClassifier::train(features.view(), split.labels(), sequential(3)).unwrap();

        let accuracy = model.evaluate(features.view(), split.labels(), &Accuracy).unwrap();
        assert!(accuracy > 0.7, "accuracy {accuracy}");
    }

    #[test]
    fn parallel_and_sequential_predictions_agree() {
        let split = synthetic_multiclass(300, 4, 4, 3, 0.2);
        let seq = RidgeClassifier::train(split.features(), split.labels(), sequential(4)).unwrap();
        let par = RidgeClassifier::from_weights(
            seq.weights().to_owned(),
            RidgeConfig::builder().n_classes(4).n_threads(2).build(),
        );

        assert_eq!(
            seq.predict(split.features()).unwrap(),
            par.predict(split.features()).unwrap()
        );
    }

    #[test]
    fn scores_use_stored_weights_and_config_is_kept() {
        let config = RidgeConfig::builder().lambda(0.5).n_classes(2).n_threads(1).build();
        let model = RidgeClassifier::from_weights(array![[1.0, -1.0], [2.0, 0.5]], config.clone());

        let scores = model.predict_scores(array![[1.0, 1.0], [0.0, 2.0]].view()).unwrap();
        assert_eq!(scores, array![[3.0, -0.5], [4.0, 1.0]]);
        assert_eq!(model.config(), &config);
        assert_eq!(model.meta().n_train_samples, 0);
    }

    #[test]
    fn evaluate_reports_error_rate() {
        let weights = array![[1.0, 0.0], [0.0, 1.0]];
        let model = RidgeClassifier::from_weights(weights, sequential(2));
        let x = array![[1.0, 0.0], [0.0, 1.0], [2.0, 1.0], [0.0, 3.0]];
        let y = array![0, 1, 1, 1];
        let err = model.evaluate(x.view(), y.view(), &ErrorRate).unwrap();
        assert_eq!(err, 0.25);
    }
}

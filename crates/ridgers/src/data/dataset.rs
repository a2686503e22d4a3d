//! Labelled dataset splits.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{Result, RidgeError};

/// One labelled split: a sample-major feature matrix and its class labels.
///
/// Features have shape `[n_samples, n_features]`; labels have length
/// `n_samples`.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    features: Array2<f64>,
    labels: Array1<i64>,
}

impl Split {
    /// Create a split, checking that features and labels have the same row count.
    pub fn new(features: Array2<f64>, labels: Array1<i64>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(RidgeError::dimension(
                "split: labels per sample",
                features.nrows(),
                labels.len(),
            ));
        }
        Ok(Self { features, labels })
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    #[inline]
    pub fn labels(&self) -> ArrayView1<'_, i64> {
        self.labels.view()
    }

    /// Number of classes implied by the largest label (`max + 1`).
    ///
    /// Returns 0 for an empty split or one whose labels are all negative.
    pub fn inferred_n_classes(&self) -> usize {
        self.labels
            .iter()
            .copied()
            .max()
            .and_then(|max| usize::try_from(max).ok())
            .map_or(0, |max| max + 1)
    }
}

/// Train and test splits sharing the same feature dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub train: Split,
    pub test: Split,
}

impl Dataset {
    /// Pair two splits, checking that their feature counts agree.
    pub fn new(train: Split, test: Split) -> Result<Self> {
        if train.n_features() != test.n_features() {
            return Err(RidgeError::dimension(
                "dataset: test features",
                train.n_features(),
                test.n_features(),
            ));
        }
        Ok(Self { train, test })
    }

    #[inline]
    pub fn n_features(&self) -> usize {
        self.train.n_features()
    }

    /// Class count covering the labels of both splits.
    pub fn inferred_n_classes(&self) -> usize {
        self.train
            .inferred_n_classes()
            .max(self.test.inferred_n_classes())
    }
}

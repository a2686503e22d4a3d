//! ridgers: closed-form ridge regression classifiers for Rust.
//!
//! Fits a linear classifier by solving the regularized normal equations
//! `(XᵀX + λI) W = XᵀY` over one-hot targets, and predicts the arg-max of the
//! linear scores `XW`.
//!
//! # Key Types
//!
//! - [`RidgeClassifier`] - High-level model with train/predict/evaluate
//! - [`RidgeConfig`] - Configuration builder
//! - [`RidgeTrainer`] - Low-level closed-form solve
//! - [`Dataset`] / [`Split`] - Labelled data
//!
//! # Building Blocks
//!
//! The three steps are also available as free functions:
//! [`data::one_hot`], [`training::train`] and [`inference::predict`].
//!
//! ```
//! use ndarray::array;
//! use ridgers::{data::one_hot, inference::predict, training::train};
//!
//! let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
//! let labels = array![0, 1, 1];
//!
//! let y = one_hot(labels.view(), 2).unwrap();
//! let w = train(x.view(), y.view(), 1e-4).unwrap();
//! assert_eq!(predict(x.view(), w.view()).unwrap(), array![0, 1, 1]);
//! ```

// Re-export approx traits for users who want to compare weights
pub use approx;

pub mod data;
pub mod error;
pub mod inference;
pub mod linalg;
pub mod model;
pub mod report;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use error::{Result, RidgeError};

pub use model::{ModelMeta, RidgeClassifier, RidgeConfig};

pub use training::{Accuracy, ErrorRate, MetricFn, RidgeParams, RidgeTrainer, Verbosity};

pub use data::{Dataset, Split, load_dataset};

pub use report::EvaluationReport;

pub use utils::{Parallelism, run_with_threads};

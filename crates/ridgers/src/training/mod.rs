//! Training infrastructure for ridge classifiers.
//!
//! - [`RidgeTrainer`], [`RidgeParams`], [`train`]: closed-form regularized
//!   least-squares fit
//! - [`TrainingLogger`], [`Verbosity`]: structured logging
//! - [`MetricFn`], [`ErrorRate`], [`Accuracy`]: evaluation of predicted labels

mod logger;
mod metrics;
mod trainer;

pub use logger::{TrainingLogger, Verbosity};
pub use metrics::{Accuracy, ErrorRate, MetricFn};
pub use trainer::{RidgeParams, RidgeTrainer, train};

//! High-level model API.
//!
//! [`RidgeClassifier`] wraps the weight matrix together with its
//! [`RidgeConfig`] and [`ModelMeta`].
//!
//! ```
//! use ridgers::{RidgeClassifier, RidgeConfig};
//! use ridgers::testing::data::synthetic_multiclass;
//! use ridgers::training::ErrorRate;
//!
//! let split = synthetic_multiclass(200, 4, 3, 0, 0.0);
//! let config = RidgeConfig::builder().n_classes(3).n_threads(1).build();
//! let model = RidgeClassifier::train(split.features(), split.labels(), config).unwrap();
//! let error = model.evaluate(split.features(), split.labels(), &ErrorRate).unwrap();
//! assert!(error < 0.5);
//! ```

mod classifier;
mod config;
mod meta;

pub use classifier::RidgeClassifier;
pub use config::RidgeConfig;
pub use meta::ModelMeta;

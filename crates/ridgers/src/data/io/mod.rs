//! Dataset providers.
//!
//! [`load_dataset`] resolves a dataset by name and reads its files from a
//! directory. Only MNIST is currently known.

pub mod mnist;

use std::path::Path;

use tracing::info;

use crate::data::Dataset;
use crate::error::{Result, RidgeError};

/// Load a named dataset from `dir`, returning its train and test splits.
pub fn load_dataset(name: &str, dir: &Path) -> Result<Dataset> {
    let dataset = match name.to_ascii_lowercase().as_str() {
        "mnist" => mnist::load_mnist(dir)?,
        _ => return Err(RidgeError::UnknownDataset(name.to_string())),
    };

    info!(
        dataset = name,
        n_train = dataset.train.n_samples(),
        n_test = dataset.test.n_samples(),
        n_features = dataset.n_features(),
        "loaded dataset"
    );
    Ok(dataset)
}

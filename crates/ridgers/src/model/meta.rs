//! Model metadata.

use serde::{Deserialize, Serialize};

/// Introspection data about a trained classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    /// Number of input features (rows of the weight matrix).
    pub n_features: usize,
    /// Number of classes (columns of the weight matrix).
    pub n_classes: usize,
    /// Number of samples the model was fitted on.
    pub n_train_samples: usize,
}

//! Error types shared across the crate.

use std::path::PathBuf;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, RidgeError>;

/// Errors raised by encoding, training, prediction and dataset loading.
///
/// None of these are transient: callers propagate them unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RidgeError {
    /// Matrix or vector shapes that must agree do not.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The system matrix has no usable pivot in the given column.
    #[error("singular system matrix: no usable pivot in column {pivot}")]
    SingularMatrix { pivot: usize },

    /// A class label lies outside `[0, n_classes)`.
    #[error("label {label} at row {row} is out of range for {n_classes} classes")]
    LabelOutOfRange {
        row: usize,
        label: i64,
        n_classes: usize,
    },

    #[error("regularization strength must be finite and >= 0, got {0}")]
    InvalidLambda(f64),

    /// A `rows x cols` matrix of `f64` would exceed `isize::MAX` bytes.
    #[error("{context}: a {rows} x {cols} matrix is too large to allocate")]
    AllocationTooLarge {
        context: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid data in {path}: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    #[error("unknown dataset '{0}'")]
    UnknownDataset(String),
}

impl RidgeError {
    pub(crate) fn dimension(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            actual,
        }
    }
}

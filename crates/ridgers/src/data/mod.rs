//! Data handling: labelled splits, label encoding, feature expansion and
//! dataset loading.
//!
//! # Key Types
//!
//! - [`Split`] / [`Dataset`] - Sample-major features with integer labels
//! - [`one_hot`] - Labels to indicator rows
//! - [`poly_features`] - Polynomial expansion of a single column
//! - [`io::load_dataset`] - Named dataset providers

mod dataset;
mod encoding;
mod features;
pub mod io;

pub use dataset::{Dataset, Split};
pub use encoding::one_hot;
pub use features::poly_features;
pub use io::load_dataset;

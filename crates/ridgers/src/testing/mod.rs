//! Test and benchmark helpers.
//!
//! Synthetic data generators live in [`data`]. Float comparisons use the
//! re-exported [`approx`](crate::approx) macros.

pub mod data;

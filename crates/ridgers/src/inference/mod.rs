//! Prediction for trained ridge weights.
//!
//! Scores are `features · weights`; the predicted class of a row is the
//! column of its largest score.

mod predict;

pub use predict::{argmax, argmax_rows, predict, predict_scores, predict_with};

use ndarray::{Array1, Array2};
use rand::prelude::*;

use crate::data::Split;

/// Generate random dense features in sample-major order.
///
/// Values are uniform in `[-1, 1]`.
pub fn random_features(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
	let mut rng = StdRng::seed_from_u64(seed);
	Array2::from_shape_simple_fn((rows, cols), || rng.r#gen::<f64>() * 2.0 - 1.0)
}

/// Generate a synthetic multiclass split whose labels come from a linear
/// model per class.
///
/// Each label is the arg-max of `features · weights + bias` (plus uniform
/// noise of the given amplitude), so with `noise_amplitude == 0` the classes
/// are linearly separable.
pub fn synthetic_multiclass(
	rows: usize,
	cols: usize,
	n_classes: usize,
	seed: u64,
	noise_amplitude: f64,
) -> Split {
	assert!(n_classes >= 2);
	let features = random_features(rows, cols, seed);
	let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));

	let weights = Array2::from_shape_simple_fn((cols, n_classes), || rng.r#gen::<f64>() * 2.0 - 1.0);
	let bias: Array1<f64> = (0..n_classes).map(|_| rng.r#gen::<f64>() * 0.5 - 0.25).collect();

	let mut scores = features.dot(&weights) + &bias;
	if noise_amplitude > 0.0 {
		scores.mapv_inplace(|s| s + (rng.r#gen::<f64>() * 2.0 - 1.0) * noise_amplitude);
	}

	let labels: Array1<i64> = scores
		.rows()
		.into_iter()
		.map(|row| crate::inference::argmax(row) as i64)
		.collect();

	// Shapes agree by construction
	Split::new(features, labels).unwrap_or_else(|e| panic!("synthetic split: {e}"))
}

/// Prepend a constant column of ones (a bias feature).
pub fn with_bias_column(features: &Array2<f64>) -> Array2<f64> {
	let (rows, cols) = features.dim();
	let mut out = Array2::ones((rows, cols + 1));
	out.slice_mut(ndarray::s![.., 1..]).assign(features);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn random_features_are_seeded() {
		let a = random_features(10, 3, 42);
		let b = random_features(10, 3, 42);
		assert_eq!(a, b);
		assert!(a.iter().all(|v| (-1.0..=1.0).contains(v)));
	}

	#[test]
	fn synthetic_labels_are_in_range() {
		let split = synthetic_multiclass(200, 4, 3, 1, 0.1);
		assert_eq!(split.n_samples(), 200);
		assert!(split.labels().iter().all(|&l| (0..3).contains(&l)));
	}

	#[test]
	fn bias_column_is_prepended() {
		let x = Array2::from_elem((2, 2), 5.0);
		let with_bias = with_bias_column(&x);
		assert_eq!(with_bias.dim(), (2, 3));
		assert_eq!(with_bias.column(0).to_vec(), vec![1.0, 1.0]);
		assert_eq!(with_bias[[1, 2]], 5.0);
	}
}

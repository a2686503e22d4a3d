//! Integration tests for the MNIST IDX provider and the full pipeline on
//! files written to a temporary directory.

mod common;

use std::fs;

use approx::assert_abs_diff_eq;
use common::{idx_images, idx_labels, tiny_digits, write_mnist_dir};
use ridgers::data::io::mnist::{TEST_LABELS, TRAIN_IMAGES, load_split};
use ridgers::{
	ErrorRate, EvaluationReport, RidgeClassifier, RidgeConfig, RidgeError, load_dataset,
};
use tempfile::TempDir;

#[test]
fn load_dataset_reads_all_four_files() {
	let dir = TempDir::new().unwrap();
	let (train_x, train_y) = tiny_digits(3);
	let (test_x, test_y) = tiny_digits(1);
	write_mnist_dir(dir.path(), (&train_x, &train_y), (&test_x, &test_y), 2, 2);

	let dataset = load_dataset("mnist", dir.path()).unwrap();
	assert_eq!(dataset.train.n_samples(), 12);
	assert_eq!(dataset.test.n_samples(), 4);
	assert_eq!(dataset.n_features(), 4);
	assert_eq!(dataset.train.labels().to_vec(), vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);

	// Pixels are scaled into [0, 1].
	assert_abs_diff_eq!(dataset.train.features()[[0, 0]], 1.0);
	assert_abs_diff_eq!(dataset.train.features()[[4, 1]], 3.0 / 255.0, epsilon = 1e-12);
	assert!(dataset.train.features().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn dataset_name_is_case_insensitive() {
	let dir = TempDir::new().unwrap();
	let (x, y) = tiny_digits(1);
	write_mnist_dir(dir.path(), (&x, &y), (&x, &y), 2, 2);

	assert!(load_dataset("MNIST", dir.path()).is_ok());
}

#[test]
fn missing_test_labels_is_io_error() {
	let dir = TempDir::new().unwrap();
	let (x, y) = tiny_digits(1);
	write_mnist_dir(dir.path(), (&x, &y), (&x, &y), 2, 2);
	fs::remove_file(dir.path().join(TEST_LABELS)).unwrap();

	let err = load_dataset("mnist", dir.path()).unwrap_err();
	match err {
		RidgeError::Io { path, .. } => assert!(path.ends_with(TEST_LABELS)),
		other => panic!("expected Io error, got {other:?}"),
	}
}

#[test]
fn corrupted_magic_is_invalid_format() {
	let dir = TempDir::new().unwrap();
	let (x, y) = tiny_digits(1);
	write_mnist_dir(dir.path(), (&x, &y), (&x, &y), 2, 2);
	// Swap in a label file where an image file is expected.
	fs::write(dir.path().join(TRAIN_IMAGES), idx_labels(&y)).unwrap();

	let err = load_dataset("mnist", dir.path()).unwrap_err();
	assert!(matches!(err, RidgeError::InvalidFormat { .. }), "{err:?}");
}

#[test]
fn image_label_count_mismatch_is_rejected() {
	let dir = TempDir::new().unwrap();
	let images = dir.path().join("images");
	let labels = dir.path().join("labels");
	let (x, y) = tiny_digits(2);
	fs::write(&images, idx_images(&x, 2, 2)).unwrap();
	fs::write(&labels, idx_labels(&y[..5])).unwrap();

	let err = load_split(&images, &labels).unwrap_err();
	assert!(matches!(err, RidgeError::InvalidFormat { .. }), "{err:?}");
}

#[test]
fn end_to_end_run_on_idx_files() {
	let dir = TempDir::new().unwrap();
	let (train_x, train_y) = tiny_digits(5);
	let (test_x, test_y) = tiny_digits(2);
	write_mnist_dir(dir.path(), (&train_x, &train_y), (&test_x, &test_y), 2, 2);

	let dataset = load_dataset("mnist", dir.path()).unwrap();
	let config = RidgeConfig::builder().lambda(1e-4).n_classes(10).n_threads(1).build();
	let model =
		RidgeClassifier::train(dataset.train.features(), dataset.train.labels(), config).unwrap();
	assert_eq!(model.weights().dim(), (4, 10));

	let train_error = model
		.evaluate(dataset.train.features(), dataset.train.labels(), &ErrorRate)
		.unwrap();
	let test_error = model
		.evaluate(dataset.test.features(), dataset.test.labels(), &ErrorRate)
		.unwrap();
	assert_eq!(train_error, 0.0);
	assert_eq!(test_error, 0.0);

	let report = EvaluationReport::from_rates("mnist", 1e-4, 20, 8, train_error, test_error);
	assert_eq!(
		report.to_string(),
		"Ridge Regression Problem\n\tTrain Error: 0%\n\tTest Error:  0%"
	);
}

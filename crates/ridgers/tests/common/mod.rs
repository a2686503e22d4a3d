//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use ridgers::data::io::mnist::{
	IMAGES_MAGIC, LABELS_MAGIC, TEST_IMAGES, TEST_LABELS, TRAIN_IMAGES, TRAIN_LABELS,
};

/// Encode images as an IDX image file. Every image must have `rows * cols` pixels.
pub fn idx_images(images: &[Vec<u8>], rows: u32, cols: u32) -> Vec<u8> {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&IMAGES_MAGIC.to_be_bytes());
	bytes.extend_from_slice(&(images.len() as u32).to_be_bytes());
	bytes.extend_from_slice(&rows.to_be_bytes());
	bytes.extend_from_slice(&cols.to_be_bytes());
	for image in images {
		assert_eq!(image.len(), (rows * cols) as usize);
		bytes.extend_from_slice(image);
	}
	bytes
}

/// Encode labels as an IDX label file.
pub fn idx_labels(labels: &[u8]) -> Vec<u8> {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&LABELS_MAGIC.to_be_bytes());
	bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
	bytes.extend_from_slice(labels);
	bytes
}

/// A tiny 2x2 "digit" set: class `c` lights up pixel `c` brightly.
pub fn tiny_digits(n_per_class: usize) -> (Vec<Vec<u8>>, Vec<u8>) {
	let mut images = Vec::new();
	let mut labels = Vec::new();
	for i in 0..n_per_class {
		for class in 0..4u8 {
			let mut image = vec![(i % 7) as u8 * 3; 4];
			image[class as usize] = 255;
			images.push(image);
			labels.push(class);
		}
	}
	(images, labels)
}

/// Write a complete MNIST-layout directory.
pub fn write_mnist_dir(
	dir: &Path,
	train: (&[Vec<u8>], &[u8]),
	test: (&[Vec<u8>], &[u8]),
	rows: u32,
	cols: u32,
) {
	fs::write(dir.join(TRAIN_IMAGES), idx_images(train.0, rows, cols)).unwrap();
	fs::write(dir.join(TRAIN_LABELS), idx_labels(train.1)).unwrap();
	fs::write(dir.join(TEST_IMAGES), idx_images(test.0, rows, cols)).unwrap();
	fs::write(dir.join(TEST_LABELS), idx_labels(test.1)).unwrap();
}

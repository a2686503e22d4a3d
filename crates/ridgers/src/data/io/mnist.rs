//! MNIST loader for the IDX binary format.
//!
//! IDX files are big-endian. Image files start with magic `0x00000803`
//! followed by the image count, row count and column count, then one byte per
//! pixel. Label files start with magic `0x00000801` and the label count, then
//! one byte per label.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};

use crate::data::{Dataset, Split};
use crate::error::{Result, RidgeError};

pub const IMAGES_MAGIC: u32 = 0x0000_0803;
pub const LABELS_MAGIC: u32 = 0x0000_0801;

pub const TRAIN_IMAGES: &str = "train-images-idx3-ubyte";
pub const TRAIN_LABELS: &str = "train-labels-idx1-ubyte";
pub const TEST_IMAGES: &str = "t10k-images-idx3-ubyte";
pub const TEST_LABELS: &str = "t10k-labels-idx1-ubyte";

/// Pixel values are scaled from `0..=255` into `[0, 1]`.
const PIXEL_SCALE: f64 = 1.0 / 255.0;

/// Load the MNIST train and test splits from `dir`.
///
/// Images become rows of `rows * cols` features scaled into `[0, 1]`.
pub fn load_mnist(dir: &Path) -> Result<Dataset> {
    let train = load_split(&dir.join(TRAIN_IMAGES), &dir.join(TRAIN_LABELS))?;
    let test = load_split(&dir.join(TEST_IMAGES), &dir.join(TEST_LABELS))?;
    Dataset::new(train, test)
}

/// Load one split from an image file and a label file.
pub fn load_split(images_path: &Path, labels_path: &Path) -> Result<Split> {
    let features = parse_images(&read_file(images_path)?, images_path)?;
    let labels = parse_labels(&read_file(labels_path)?, labels_path)?;
    if features.nrows() != labels.len() {
        return Err(invalid(
            labels_path,
            format!(
                "{} labels for {} images in {}",
                labels.len(),
                features.nrows(),
                images_path.display()
            ),
        ));
    }
    Split::new(features, labels)
}

/// Parse an IDX image file into a `[n_images, rows * cols]` matrix.
///
/// `path` is only used in error messages.
pub fn parse_images(bytes: &[u8], path: &Path) -> Result<Array2<f64>> {
    let mut cursor = Cursor::new(bytes, path);
    cursor.expect_magic(IMAGES_MAGIC)?;
    let n_images = cursor.read_u32()? as usize;
    let n_rows = cursor.read_u32()? as usize;
    let n_cols = cursor.read_u32()? as usize;

    let n_pixels = n_rows
        .checked_mul(n_cols)
        .ok_or_else(|| invalid(path, "image dimensions overflow"))?;
    let len = n_images
        .checked_mul(n_pixels)
        .ok_or_else(|| invalid(path, "image payload size overflows"))?;
    let payload = cursor.take(len)?;
    cursor.expect_end()?;

    let pixels: Vec<f64> = payload.iter().map(|&p| f64::from(p) * PIXEL_SCALE).collect();
    Array2::from_shape_vec((n_images, n_pixels), pixels)
        .map_err(|e| invalid(path, format!("bad image shape: {e}")))
}

/// Parse an IDX label file.
///
/// `path` is only used in error messages.
pub fn parse_labels(bytes: &[u8], path: &Path) -> Result<Array1<i64>> {
    let mut cursor = Cursor::new(bytes, path);
    cursor.expect_magic(LABELS_MAGIC)?;
    let n_labels = cursor.read_u32()? as usize;
    let payload = cursor.take(n_labels)?;
    cursor.expect_end()?;

    Ok(payload.iter().map(|&l| i64::from(l)).collect())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| RidgeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(path: &Path, message: impl Into<String>) -> RidgeError {
    RidgeError::InvalidFormat {
        path: PathBuf::from(path),
        message: message.into(),
    }
}

/// Bounds-checked reader over an IDX byte buffer.
struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
    path: &'a Path,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8], path: &'a Path) -> Self {
        Self {
            bytes,
            offset: 0,
            path,
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(len).filter(|&end| end <= self.bytes.len());
        let Some(end) = end else {
            return Err(invalid(
                self.path,
                format!(
                    "truncated: need {} bytes at offset {}, file has {}",
                    len,
                    self.offset,
                    self.bytes.len()
                ),
            ));
        };
        let chunk = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(chunk)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let chunk = self.take(4)?;
        Ok(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    fn expect_magic(&mut self, expected: u32) -> Result<()> {
        let magic = self.read_u32()?;
        if magic != expected {
            return Err(invalid(
                self.path,
                format!("bad magic number {magic:#010x}, expected {expected:#010x}"),
            ));
        }
        Ok(())
    }

    fn expect_end(&self) -> Result<()> {
        let trailing = self.bytes.len() - self.offset;
        if trailing != 0 {
            return Err(invalid(self.path, format!("{trailing} trailing bytes")));
        }
        Ok(())
    }
}

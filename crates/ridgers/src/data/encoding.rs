//! Label encoding.

use ndarray::{Array2, ArrayView1};

use crate::error::{Result, RidgeError};

/// One-hot encode integer class labels.
///
/// Row `i` of the result is the indicator vector of `labels[i]`: the entry in
/// column `labels[i]` is `1.0`, every other entry is `0.0`.
///
/// # Errors
///
/// - [`RidgeError::LabelOutOfRange`] for the first label outside
///   `[0, n_classes)`.
/// - [`RidgeError::AllocationTooLarge`] if the encoded matrix cannot be
///   allocated.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use ridgers::data::one_hot;
///
/// let encoded = one_hot(array![2, 0].view(), 3).unwrap();
/// assert_eq!(encoded, array![[0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
/// ```
pub fn one_hot(labels: ArrayView1<'_, i64>, n_classes: usize) -> Result<Array2<f64>> {
    // ndarray requires the product of non-zero axis lengths to fit in isize
    let fits = labels
        .len()
        .max(1)
        .checked_mul(n_classes.max(1))
        .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !fits {
        return Err(RidgeError::AllocationTooLarge {
            context: "one_hot",
            rows: labels.len(),
            cols: n_classes,
        });
    }

    let mut encoded = Array2::zeros((labels.len(), n_classes));

    for (row, (&label, mut out)) in labels.iter().zip(encoded.rows_mut()).enumerate() {
        let class = class_index(label, n_classes).ok_or(RidgeError::LabelOutOfRange {
            row,
            label,
            n_classes,
        })?;
        out[class] = 1.0;
    }

    Ok(encoded)
}

/// Convert a signed label into a column index, if it is in range.
#[inline]
pub(crate) fn class_index(label: i64, n_classes: usize) -> Option<usize> {
    usize::try_from(label).ok().filter(|&class| class < n_classes)
}

//! Feature expansion helpers.

use ndarray::{Array2, ArrayView1, Axis};

/// Expand a single feature column into polynomial features.
///
/// Column `j` of the result holds `x^j` for `j` in `0..degree`, so column 0 is
/// a constant bias column of ones.
///
/// ```
/// use ndarray::array;
/// use ridgers::data::poly_features;
///
/// let expanded = poly_features(array![2.0, 3.0].view(), 3);
/// assert_eq!(expanded, array![[1.0, 2.0, 4.0], [1.0, 3.0, 9.0]]);
/// ```
pub fn poly_features(x: ArrayView1<'_, f64>, degree: usize) -> Array2<f64> {
    let mut expanded = Array2::zeros((x.len(), degree));
    for (mut row, &value) in expanded.axis_iter_mut(Axis(0)).zip(x.iter()) {
        let mut power = 1.0;
        for out in row.iter_mut() {
            *out = power;
            power *= value;
        }
    }
    expanded
}

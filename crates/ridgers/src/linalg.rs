//! Dense linear-system solver.
//!
//! Solves `A X = B` for a square `A` and a multi-column right-hand side using
//! Gaussian elimination with partial pivoting. The factorization is applied to
//! every column of `B` at once, so the cost is `O(d^3 + d^2 k)`.

use ndarray::{Array2, ArrayView2, Zip, s};

use crate::error::{Result, RidgeError};

/// Solve `a · x = b` for `x`.
///
/// # Arguments
///
/// * `a` - Square system matrix, shape `[d, d]`
/// * `b` - Right-hand side, shape `[d, k]`
///
/// # Returns
///
/// The solution with shape `[d, k]`.
///
/// # Errors
///
/// - [`RidgeError::DimensionMismatch`] if `a` is not square or `b` has a
///   different row count.
/// - [`RidgeError::SingularMatrix`] if elimination meets a pivot column whose
///   candidates are all exactly zero, or a non-finite pivot.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use ridgers::linalg::solve;
///
/// let a = array![[2.0, 0.0], [0.0, 4.0]];
/// let b = array![[2.0], [2.0]];
/// let x = solve(a.view(), b.view()).unwrap();
/// assert_eq!(x, array![[1.0], [0.5]]);
/// ```
pub fn solve(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
    let (n, n_cols) = a.dim();
    if n != n_cols {
        return Err(RidgeError::dimension("solve: square system matrix", n, n_cols));
    }
    if b.nrows() != n {
        return Err(RidgeError::dimension("solve: right-hand side rows", n, b.nrows()));
    }

    let mut lu = a.to_owned();
    let mut x = b.to_owned();
    if n == 0 {
        return Ok(x);
    }

    // Forward elimination
    for col in 0..n {
        let (pivot_row, pivot_abs) = (col..n)
            .map(|row| (row, lu[[row, col]].abs()))
            .fold((col, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });

        // Only an exact zero or non-finite pivot is singular
        if pivot_abs <= 0.0 || !pivot_abs.is_finite() {
            return Err(RidgeError::SingularMatrix { pivot: col });
        }

        if pivot_row != col {
            swap_rows(&mut lu, pivot_row, col);
            swap_rows(&mut x, pivot_row, col);
        }

        let pivot = lu[[col, col]];
        for row in (col + 1)..n {
            let factor = lu[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            lu[[row, col]] = 0.0;

            let (upper, mut lower) = lu.view_mut().split_at(ndarray::Axis(0), row);
            Zip::from(lower.slice_mut(s![0, col + 1..]))
                .and(upper.slice(s![col, col + 1..]))
                .for_each(|target, &source| *target -= factor * source);

            let (upper, mut lower) = x.view_mut().split_at(ndarray::Axis(0), row);
            Zip::from(lower.row_mut(0))
                .and(upper.row(col))
                .for_each(|target, &source| *target -= factor * source);
        }
    }

    // Back substitution
    for row in (0..n).rev() {
        let pivot = lu[[row, row]];
        for col in (row + 1)..n {
            let coef = lu[[row, col]];
            if coef == 0.0 {
                continue;
            }
            let (mut upper, lower) = x.view_mut().split_at(ndarray::Axis(0), row + 1);
            let solved = lower.row(col - row - 1);
            Zip::from(upper.row_mut(row))
                .and(solved)
                .for_each(|target, &source| *target -= coef * source);
        }
        x.row_mut(row).mapv_inplace(|v| v / pivot);
    }

    Ok(x)
}

fn swap_rows(m: &mut Array2<f64>, a: usize, b: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (mut top, mut bottom) = m.view_mut().split_at(ndarray::Axis(0), hi);
    Zip::from(top.row_mut(lo))
        .and(bottom.row_mut(0))
        .for_each(std::mem::swap);
}

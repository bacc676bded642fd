//! Small helpers over faer matrices.
//!
//! Tensor products and matrix multiplication come straight from faer
//! (`kron`, `*`); this module only adds the element-wise comparisons the
//! catalog scans need.

use faer::Mat;
use num_complex::Complex;

/// Exact equality of shape and every element.
pub fn mat_eq(a: &Mat<Complex<f64>>, b: &Mat<Complex<f64>>) -> bool {
    if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
        return false;
    }
    (0..a.nrows()).all(|i| (0..a.ncols()).all(|j| a[(i, j)] == b[(i, j)]))
}

/// Approximate equality: shapes match and `|a - b| <= atol` element-wise.
pub fn mat_close(a: &Mat<Complex<f64>>, b: &Mat<Complex<f64>>, atol: f64) -> bool {
    if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
        return false;
    }
    (0..a.nrows()).all(|i| (0..a.ncols()).all(|j| (a[(i, j)] - b[(i, j)]).norm() <= atol))
}

/// Element-wise scalar multiple of `m`.
pub fn scaled(m: &Mat<Complex<f64>>, s: Complex<f64>) -> Mat<Complex<f64>> {
    Mat::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)] * s)
}

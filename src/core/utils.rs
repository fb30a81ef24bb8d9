//! Utility functions for single-qubit linear algebra.
//!
//! This module contains helper functions for:
//! - Matrix operations (trace, conjugate transpose, outer product, conjugation).
//! - Completeness checks for measurements.
//! - Cleaning floating-point noise out of outcome probabilities.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// Probabilities below this are treated as exactly zero.
pub const PROBABILITY_EPSILON: f64 = 1e-12;

/// Computes the trace of a matrix (sum of diagonal elements).
pub fn trace(matrix: &Array2<Complex64>) -> Complex64 {
    matrix.diag().sum()
}

/// Conjugate transpose $M^\dagger$.
pub fn dagger(matrix: &Array2<Complex64>) -> Array2<Complex64> {
    matrix.t().mapv(|c| c.conj())
}

/// Computes $U \rho U^\dagger$.
pub fn conjugate_by(u: &Array2<Complex64>, rho: &Array2<Complex64>) -> Array2<Complex64> {
    u.dot(rho).dot(&dagger(u))
}

/// Computes the outer product of two vectors $|a\rangle\langle b|$.
pub fn outer_product(a: &Array1<Complex64>, b: &Array1<Complex64>) -> Array2<Complex64> {
    let n = a.len();
    let m = b.len();
    let mut res = Array2::zeros((n, m));

    for i in 0..n {
        for j in 0..m {
            res[[i, j]] = a[i] * b[j].conj();
        }
    }
    res
}

/// Checks completeness relation for measurement operators.
///
/// Verifies if $\sum M_k^\dagger M_k = I$.
pub fn check_completeness(ops: &[Array2<Complex64>], dim: usize) -> bool {
    let eye = Array2::<Complex64>::eye(dim);
    let sum = ops
        .iter()
        .fold(Array2::<Complex64>::zeros((dim, dim)), |acc, op| {
            acc + dagger(op).dot(op)
        });
    sum.iter()
        .zip(eye.iter())
        .all(|(a, b)| (a - b).norm() < 1e-9)
}

/// Checks if a matrix is Hermitian
pub fn is_hermitian(mat: &Array2<Complex64>, tol: f64) -> bool {
    mat.iter()
        .zip(mat.t().iter())
        .all(|(a, b)| (a - b.conj()).norm() < tol)
}

/// Zeroes probabilities lost in rounding noise and renormalises the rest.
///
/// A basis-matched measurement must come out with probability exactly 1,
/// so near-zero leftovers from `sqrt(2)` arithmetic are dropped before
/// sampling.
pub fn clean_probabilities(probs: &mut [f64]) {
    for p in probs.iter_mut() {
        if *p < PROBABILITY_EPSILON {
            *p = 0.0;
        }
    }
    let total: f64 = probs.iter().sum();
    if total > 0.0 {
        for p in probs.iter_mut() {
            *p /= total;
        }
    }
}

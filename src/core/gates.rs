use crate::core::errors::GateError;
use crate::core::utils;
use ndarray::{Array2, arr2};
use num_complex::Complex64;

/// Represents a single-qubit quantum gate.
///
/// BB84 state preparation only ever needs the Pauli-X flip and the
/// Hadamard basis change, so gates are fixed at 2x2.
#[derive(Clone, Debug)]
pub struct Gate {
    /// The unitary matrix of the gate.
    pub matrix: Array2<Complex64>,
}

impl Gate {
    /// Creates a new `Gate` from a unitary matrix.
    ///
    /// # Errors
    ///
    /// Returns a `GateError` if:
    /// - The matrix is not 2x2.
    /// - The matrix is not unitary.
    pub fn new(matrix: Array2<Complex64>) -> Result<Self, GateError> {
        let (rows, cols) = matrix.dim();

        if rows != 2 || cols != 2 {
            return Err(GateError::InvalidDimensions { rows, cols });
        }

        if !Self::check_unitary(&matrix) {
            return Err(GateError::NonUnitary);
        }

        Ok(Self { matrix })
    }

    /// Checks if a given matrix is unitary
    fn check_unitary(matrix: &Array2<Complex64>) -> bool {
        let (rows, _) = matrix.dim();
        let eye = Array2::<Complex64>::eye(rows);

        let product = matrix.dot(&utils::dagger(matrix));

        product
            .iter()
            .zip(eye.iter())
            .all(|(a, b)| (*a - *b).norm() < 1e-6)
    }

    /// Evolves a density matrix: $\rho \to U \rho U^\dagger$.
    pub fn apply_to(&self, rho: &Array2<Complex64>) -> Array2<Complex64> {
        utils::conjugate_by(&self.matrix, rho)
    }

    /// Creates a Pauli-X gate (NOT gate).
    pub fn x() -> Result<Gate, GateError> {
        Gate::new(arr2(&[
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        ]))
    }

    /// Creates a Hadamard gate.
    pub fn h() -> Result<Gate, GateError> {
        let factor = 1.0 / 2.0_f64.sqrt();
        Gate::new(arr2(&[
            [Complex64::new(factor, 0.0), Complex64::new(factor, 0.0)],
            [Complex64::new(factor, 0.0), Complex64::new(-factor, 0.0)],
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_gates_are_unitary() {
        assert!(Gate::x().is_ok());
        assert!(Gate::h().is_ok());
    }

    #[test]
    fn rejects_non_unitary_matrix() {
        let m = arr2(&[
            [Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
        ]);
        assert!(matches!(Gate::new(m), Err(GateError::NonUnitary)));
    }

    #[test]
    fn rejects_wrong_dimensions() {
        let m = Array2::<Complex64>::eye(4);
        assert!(matches!(
            Gate::new(m),
            Err(GateError::InvalidDimensions { rows: 4, cols: 4 })
        ));
    }

    #[test]
    fn x_flips_ground_state() {
        let mut rho = Array2::<Complex64>::zeros((2, 2));
        rho[[0, 0]] = Complex64::new(1.0, 0.0);
        let flipped = Gate::x().unwrap().apply_to(&rho);
        assert_eq!(flipped[[1, 1]], Complex64::new(1.0, 0.0));
        assert_eq!(flipped[[0, 0]], Complex64::new(0.0, 0.0));
    }
}

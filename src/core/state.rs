use crate::core::basis::Basis;
use crate::core::errors::StateError;
use crate::core::gates::Gate;
use crate::core::measurements::{Measurement, MeasurementResult};
use crate::core::utils::{self, clean_probabilities, trace};
use ndarray::Array2;
use num_complex::Complex64;
use rand::Rng;

/// A single qubit held as a 2x2 density matrix.
///
/// Deliberately not `Clone`: measuring consumes the state, so a qubit can
/// only ever be read out once.
#[derive(Debug)]
pub struct QuantumState {
    density_matrix: Array2<Complex64>,
}

impl QuantumState {
    /// Creates a new quantum state initialized to |0>.
    pub fn new() -> Self {
        let mut density_matrix = Array2::<Complex64>::zeros((2, 2));
        density_matrix[[0, 0]] = Complex64::new(1.0, 0.0);

        Self { density_matrix }
    }

    /// Encodes `bit` in `basis`: X flips |0> to |1>, then H rotates into the
    /// diagonal basis when asked.
    pub fn prepare(bit: bool, basis: Basis) -> Result<Self, StateError> {
        let mut state = Self::new();

        if bit {
            state.apply(&Gate::x()?);
        }
        if basis == Basis::Diagonal {
            state.apply(&Gate::h()?);
        }

        state.is_valid()?;
        Ok(state)
    }

    /// Checks the validity of a density matrix
    pub fn is_valid(&self) -> Result<(), StateError> {
        if !utils::is_hermitian(&self.density_matrix, 1e-12) {
            return Err(StateError::NotHermitian);
        }

        let tr = trace(&self.density_matrix);
        if (tr - Complex64::new(1.0, 0.0)).norm() > 1e-12 {
            return Err(StateError::InvalidTrace(tr));
        }
        Ok(())
    }

    /// Applies a single-qubit gate
    pub fn apply(&mut self, gate: &Gate) {
        self.density_matrix = gate.apply_to(&self.density_matrix);
    }

    /// Born-rule probability of each outcome, $p_k = Tr(M_k \rho M_k^\dagger)$.
    pub fn outcome_probabilities(&self, measurement: &Measurement) -> Vec<f64> {
        let mut probs: Vec<f64> = measurement
            .operators
            .iter()
            .map(|op| {
                let unnormalized_rho_prime = utils::conjugate_by(op, &self.density_matrix);
                trace(&unnormalized_rho_prime).re.max(0.0)
            })
            .collect();

        clean_probabilities(&mut probs);
        probs
    }

    /// Randomly selects operator index ponderating using `probs`
    fn pick_outcome<R: Rng + ?Sized>(probs: &[f64], rng: &mut R) -> usize {
        let roll: f64 = rng.random();

        let mut cumulative = 0.0;
        for (i, &p) in probs.iter().enumerate() {
            cumulative += p;
            if roll < cumulative {
                return i;
            }
        }
        probs.len().saturating_sub(1)
    }

    /// Phisical measurment which consumes the qubit irretrievably.
    ///
    /// Draws exactly one `f64` from `rng`.
    pub fn measure<R: Rng + ?Sized>(
        self,
        measurement: &Measurement,
        rng: &mut R,
    ) -> Result<MeasurementResult, StateError> {
        let probs = self.outcome_probabilities(measurement);

        let index = Self::pick_outcome(&probs, rng);
        let probability = probs[index];

        if probability <= utils::PROBABILITY_EPSILON {
            return Err(StateError::ImpossibleOutcome { index, probability });
        }

        Ok(MeasurementResult { index, probability })
    }
}

impl Default for QuantumState {
    fn default() -> Self {
        Self::new()
    }
}

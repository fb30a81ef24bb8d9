use num_complex::Complex64;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GateError {
    #[error("Matrix is not Unitary (U†U != I)")]
    NonUnitary,

    #[error("Gate must act on a single qubit (2x2 matrix), got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

#[derive(Error, Debug, Clone)]
pub enum MeasurementError {
    #[error("Measurement operators do not sum to Identity (Completeness relation failed)")]
    NotComplete,

    #[error("Invalid operator dimensions")]
    InvalidDimensions,
}

#[derive(Error, Debug, Clone)]
pub enum StateError {
    #[error("Trace is not unity: {0}")]
    InvalidTrace(Complex64),

    #[error("Density matrix is not Hermitian")]
    NotHermitian,

    #[error("Sampled outcome {index} has vanishing probability {probability}")]
    ImpossibleOutcome { index: usize, probability: f64 },

    #[error("Measurement error: {0}")]
    MeasurementError(#[from] MeasurementError),

    #[error("Gate error: {0}")]
    GateError(#[from] GateError),
}

#[derive(Error, Debug, Clone)]
pub enum ProtocolError {
    #[error("Length mismatch in {what}: expected {expected}, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Cannot sample an empty sifted key")]
    EmptySiftedKey,

    #[error("Sample index {index} is out of range for a key of length {len}")]
    SampleIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Quantum state error: {0}")]
    State(#[from] StateError),
}

impl ProtocolError {
    /// Fails with `LengthMismatch` unless `got == expected`.
    pub(crate) fn check_len(what: &'static str, expected: usize, got: usize) -> Result<(), Self> {
        if expected != got {
            return Err(ProtocolError::LengthMismatch {
                what,
                expected,
                got,
            });
        }
        Ok(())
    }
}

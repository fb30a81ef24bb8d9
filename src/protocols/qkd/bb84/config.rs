//! BB84 run configuration.

use super::eavesdropper::Eavesdropper;
use crate::errors::ProtocolError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Parameters of a single BB84 run.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bb84Config {
    /// Number of qubits Alice sends (protocol rounds)
    pub num_qubits: usize,
    /// Number of sifted positions disclosed for the error test
    pub sample_size: usize,
    /// The key is rejected when the sampled error rate exceeds this fraction
    pub error_threshold: f64,
    /// Intercept-resend attacker on the quantum channel, if any
    pub eavesdropper: Option<Eavesdropper>,
    /// Random seed for reproducibility; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for Bb84Config {
    fn default() -> Self {
        Self {
            num_qubits: 50,
            sample_size: 10,
            error_threshold: 0.2,
            eavesdropper: None,
            seed: None,
        }
    }
}

impl Bb84Config {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ..Self::default()
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_error_threshold(mut self, error_threshold: f64) -> Self {
        self.error_threshold = error_threshold;
        self
    }

    pub fn with_eavesdropper(mut self, eavesdropper: Eavesdropper) -> Self {
        self.eavesdropper = Some(eavesdropper);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every parameter is in range.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if self.sample_size == 0 {
            return Err(ProtocolError::InvalidConfig(
                "sample size must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.error_threshold) {
            return Err(ProtocolError::InvalidConfig(format!(
                "error threshold {} must be between 0.0 and 1.0",
                self.error_threshold
            )));
        }
        if let Some(eve) = &self.eavesdropper {
            eve.validate()?;
        }
        Ok(())
    }

    /// Random source for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

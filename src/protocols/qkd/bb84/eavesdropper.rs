//! Intercept-resend attacker.

use crate::errors::ProtocolError;
use crate::{Basis, QubitBackend};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Eve sits on the quantum channel, measures qubits in a basis of her own
/// choosing and forwards a fresh qubit prepared from what she saw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eavesdropper {
    /// Probability of intercepting each qubit
    pub intercept_ratio: f64,
}

impl Default for Eavesdropper {
    fn default() -> Self {
        Self {
            intercept_ratio: 1.0,
        }
    }
}

/// What Eve forwards and what she learned.
#[derive(Debug)]
pub struct Interception<Q> {
    /// Qubits sent on to Bob, one per input, in order
    pub qubits: Vec<Q>,
    /// Eve's `(measured bit, basis)` per round, `None` where she let the qubit pass
    pub observations: Vec<Option<(bool, Basis)>>,
}

impl<Q> Interception<Q> {
    pub fn intercepted_count(&self) -> usize {
        self.observations.iter().filter(|o| o.is_some()).count()
    }
}

impl Eavesdropper {
    /// An attacker intercepting every qubit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intercept_ratio(intercept_ratio: f64) -> Self {
        Self { intercept_ratio }
    }

    pub fn validate(&self) -> Result<(), ProtocolError> {
        if !(0.0..=1.0).contains(&self.intercept_ratio) {
            return Err(ProtocolError::InvalidConfig(format!(
                "intercept ratio {} must be between 0.0 and 1.0",
                self.intercept_ratio
            )));
        }
        Ok(())
    }

    /// Whether the next qubit gets intercepted. Only draws from `rng` for a
    /// partial attack.
    fn targets<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        if self.intercept_ratio >= 1.0 {
            true
        } else if self.intercept_ratio > 1e-12 {
            rng.random_bool(self.intercept_ratio)
        } else {
            false
        }
    }

    /// Runs the attack over a whole transmission.
    ///
    /// For each intercepted qubit Eve draws a basis, measures (destroying the
    /// original) and re-prepares `(measured bit, her basis)`. Order and length
    /// are preserved.
    pub fn intercept<B, R>(
        &self,
        backend: &B,
        qubits: Vec<B::Qubit>,
        rng: &mut R,
    ) -> Result<Interception<B::Qubit>, ProtocolError>
    where
        B: QubitBackend,
        R: Rng + ?Sized,
    {
        self.validate()?;

        let mut forwarded = Vec::with_capacity(qubits.len());
        let mut observations = Vec::with_capacity(qubits.len());

        for qubit in qubits {
            if !self.targets(rng) {
                forwarded.push(qubit);
                observations.push(None);
                continue;
            }

            let e_basis: Basis = rng.random();
            let e_bit = backend.measure(qubit, e_basis, rng)?;

            forwarded.push(backend.prepare(e_bit, e_basis)?);
            observations.push(Some((e_bit, e_basis)));
        }

        Ok(Interception {
            qubits: forwarded,
            observations,
        })
    }
}

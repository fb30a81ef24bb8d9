//! What Alice and Bob do on their own: pick bits and bases, encode, measure.

use crate::errors::ProtocolError;
use crate::{Basis, QubitBackend};
use rand::Rng;

/// Draws `n` uniform bits followed by `n` uniform bases.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (Vec<bool>, Vec<Basis>) {
    let bits = (0..n).map(|_| rng.random_bool(0.5)).collect();
    let bases = random_bases(n, rng);
    (bits, bases)
}

/// Draws `n` uniform bases.
pub fn random_bases<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Basis> {
    (0..n).map(|_| rng.random()).collect()
}

/// Alice prepares one qubit per `(bit, basis)` pair.
pub fn encode<B: QubitBackend>(
    backend: &B,
    bits: &[bool],
    bases: &[Basis],
) -> Result<Vec<B::Qubit>, ProtocolError> {
    ProtocolError::check_len("alice bases", bits.len(), bases.len())?;

    bits.iter()
        .zip(bases)
        .map(|(&bit, &basis)| backend.prepare(bit, basis).map_err(ProtocolError::from))
        .collect()
}

/// Bob measures every received qubit in the basis at the same position.
pub fn measure_all<B, R>(
    backend: &B,
    qubits: Vec<B::Qubit>,
    bases: &[Basis],
    rng: &mut R,
) -> Result<Vec<bool>, ProtocolError>
where
    B: QubitBackend,
    R: Rng + ?Sized,
{
    ProtocolError::check_len("bob bases", qubits.len(), bases.len())?;

    qubits
        .into_iter()
        .zip(bases)
        .map(|(qubit, &basis)| {
            backend
                .measure(qubit, basis, rng)
                .map_err(ProtocolError::from)
        })
        .collect()
}

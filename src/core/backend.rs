//! Qubit backends.
//!
//! The protocol layer only ever asks two things of the physics: prepare a
//! qubit from a `(bit, basis)` pair, and measure a qubit in a basis. Both
//! backends here honour the same law: a basis-matched measurement returns
//! the prepared bit, a mismatched one returns a fair coin flip.

use crate::core::basis::Basis;
use crate::core::errors::StateError;
use crate::core::measurements::Measurement;
use crate::core::state::QuantumState;
use rand::Rng;

/// The `{prepare, measure}` capability the protocol is generic over.
pub trait QubitBackend {
    /// A prepared, not yet measured, qubit. Moved into [`measure`](Self::measure).
    type Qubit;

    /// Creates a qubit whose true state is exactly `(bit, basis)`.
    fn prepare(&self, bit: bool, basis: Basis) -> Result<Self::Qubit, StateError>;

    /// Consumes `qubit` and samples one classical bit in `basis`.
    fn measure<R: Rng + ?Sized>(
        &self,
        qubit: Self::Qubit,
        basis: Basis,
        rng: &mut R,
    ) -> Result<bool, StateError>;
}

/// A qubit reduced to its preparation parameters.
#[derive(Debug, PartialEq, Eq)]
pub struct Qubit {
    bit: bool,
    basis: Basis,
}

impl Qubit {
    pub fn bit(&self) -> bool {
        self.bit
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }
}

/// Closed-form measurement rule.
///
/// Draws one `random_bool(0.5)` on a basis mismatch and nothing otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealBackend;

impl IdealBackend {
    /// The measurement law as a pure function of the preparation, the
    /// measurement basis and a single coin draw.
    pub fn outcome(bit: bool, prepared: Basis, measured: Basis, coin: bool) -> bool {
        if prepared == measured { bit } else { coin }
    }
}

impl QubitBackend for IdealBackend {
    type Qubit = Qubit;

    fn prepare(&self, bit: bool, basis: Basis) -> Result<Qubit, StateError> {
        Ok(Qubit { bit, basis })
    }

    fn measure<R: Rng + ?Sized>(
        &self,
        qubit: Qubit,
        basis: Basis,
        rng: &mut R,
    ) -> Result<bool, StateError> {
        let coin = if qubit.basis == basis {
            false
        } else {
            rng.random_bool(0.5)
        };
        Ok(Self::outcome(qubit.bit, qubit.basis, basis, coin))
    }
}

/// Amplitude-level simulation on a 2x2 density matrix.
///
/// Draws one `f64` per measurement, whatever the bases.
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityMatrixBackend;

impl QubitBackend for DensityMatrixBackend {
    type Qubit = QuantumState;

    fn prepare(&self, bit: bool, basis: Basis) -> Result<QuantumState, StateError> {
        QuantumState::prepare(bit, basis)
    }

    fn measure<R: Rng + ?Sized>(
        &self,
        qubit: QuantumState,
        basis: Basis,
        rng: &mut R,
    ) -> Result<bool, StateError> {
        let measurement = Measurement::in_basis(basis)?;
        Ok(qubit.measure(&measurement, rng)?.bit())
    }
}

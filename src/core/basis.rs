use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preparation/measurement frame of a BB84 qubit.
///
/// The two bases are mutually unbiased: measuring a state prepared in one
/// basis with the other yields a uniformly random bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Computational (Z) basis -> {|0>, |1>}.
    Rectilinear,
    /// Hadamard (X) basis -> {|+>, |->}.
    Diagonal,
}

impl Basis {
    /// Returns the other basis.
    #[cfg(test)]
    pub(crate) fn conjugate(self) -> Basis {
        match self {
            Basis::Rectilinear => Basis::Diagonal,
            Basis::Diagonal => Basis::Rectilinear,
        }
    }
}

impl Distribution<Basis> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Basis {
        if rng.random_bool(0.5) {
            Basis::Diagonal
        } else {
            Basis::Rectilinear
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::Rectilinear => f.write_str("Z"),
            Basis::Diagonal => f.write_str("X"),
        }
    }
}

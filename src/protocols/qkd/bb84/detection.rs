//! Eavesdropping detection by public comparison of a random sample.

use crate::errors::ProtocolError;
use rand::Rng;
use rand::seq::index;
use serde::Serialize;

/// The disclosed sample and the error rate measured on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionReport {
    /// Sifted positions that were compared, in draw order
    pub sample_indices: Vec<usize>,
    /// Alice's values at `sample_indices`
    pub alice_sample: Vec<bool>,
    /// Bob's values at `sample_indices`
    pub bob_sample: Vec<bool>,
    /// Number of compared positions that disagreed
    pub mismatches: usize,
    /// `mismatches / sample_indices.len()`
    pub error_rate: f64,
}

impl DetectionReport {
    /// Error rate in percent, as usually quoted for the QBER.
    pub fn qber_percent(&self) -> f64 {
        self.error_rate * 100.0
    }

    /// Whether the sample disqualifies the key.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.error_rate > threshold
    }
}

/// Compares `min(sample_size, len)` uniformly chosen distinct positions of
/// the two sifted keys.
///
/// # Errors
///
/// - `LengthMismatch` if the keys differ in length.
/// - `EmptySiftedKey` if there is nothing to sample.
/// - `InvalidConfig` if `sample_size` is zero.
pub fn detect<R: Rng + ?Sized>(
    sifted_alice: &[bool],
    sifted_bob: &[bool],
    sample_size: usize,
    rng: &mut R,
) -> Result<DetectionReport, ProtocolError> {
    let len = sifted_alice.len();
    ProtocolError::check_len("sifted bob key", len, sifted_bob.len())?;

    if len == 0 {
        return Err(ProtocolError::EmptySiftedKey);
    }
    if sample_size == 0 {
        return Err(ProtocolError::InvalidConfig(
            "sample size must be positive".into(),
        ));
    }

    let k = sample_size.min(len);
    let sample_indices = index::sample(rng, len, k).into_vec();

    let alice_sample: Vec<bool> = sample_indices.iter().map(|&i| sifted_alice[i]).collect();
    let bob_sample: Vec<bool> = sample_indices.iter().map(|&i| sifted_bob[i]).collect();

    let mismatches = alice_sample
        .iter()
        .zip(&bob_sample)
        .filter(|(a, b)| a != b)
        .count();

    Ok(DetectionReport {
        sample_indices,
        alice_sample,
        bob_sample,
        mismatches,
        error_rate: mismatches as f64 / k as f64,
    })
}

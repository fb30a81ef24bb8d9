//! BB84 Quantum Key Distribution Protocol.
//!
//! Alice encodes random bits in randomly chosen bases, an optional
//! intercept-resend eavesdropper sits on the channel, and Bob measures in
//! his own random bases. The parties keep the rounds where their bases agree,
//! publicly compare a random sample of the sifted key, and either discard the
//! key or keep the undisclosed remainder as the shared secret.
//!
//! A run moves through
//! `Generated → Encoded → (Intercepted) → Measured → Sifted → {Aborted | Detected → (Aborted | Finalized)}`
//! and never loops back; rerun the protocol to try again.

pub mod config;
pub mod detection;
pub mod eavesdropper;
pub mod finalize;
pub mod party;
pub mod sifting;

pub use config::Bb84Config;
pub use detection::{DetectionReport, detect};
pub use eavesdropper::{Eavesdropper, Interception};
pub use finalize::finalize;
pub use party::{encode, generate, measure_all, random_bases};
pub use sifting::sift;

use crate::errors::ProtocolError;
use crate::{Basis, IdealBackend, QubitBackend};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Protocol stage, in the order a run passes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Generated,
    Encoded,
    Intercepted,
    Measured,
    Sifted,
    Detected,
    Aborted,
    Finalized,
}

/// Audit trail of a single qubit transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    pub alice_bit: bool,
    pub alice_basis: Basis,
    /// Eve's `(measured bit, basis)` if she intercepted this qubit
    pub eve: Option<(bool, Basis)>,
    pub bob_basis: Basis,
    pub bob_bit: bool,
}

impl Round {
    /// Whether this round survives sifting.
    pub fn bases_match(&self) -> bool {
        self.alice_basis == self.bob_basis
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Outcome {
    /// The sample passed; `final_key` is the sifted key minus the sample.
    Accepted { final_key: Vec<bool> },
    /// No round had matching bases, so there was nothing to test or keep.
    NoSiftedKey,
    /// The sampled error rate exceeded the threshold; the key was discarded.
    EavesdroppingDetected { error_rate: f64 },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    /// The shared secret, empty unless accepted.
    pub fn final_key(&self) -> &[bool] {
        match self {
            Outcome::Accepted { final_key } => final_key,
            _ => &[],
        }
    }
}

/// BB84 results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bb84Result {
    /// Number of qubits sent
    pub raw_length: usize,
    /// Number of rounds where the bases matched
    pub sifted_length: usize,
    pub sifted_alice: Vec<bool>,
    pub sifted_bob: Vec<bool>,
    /// The public comparison, absent when nothing survived sifting
    pub detection: Option<DetectionReport>,
    pub outcome: Outcome,
    pub eve_intercepted_count: usize,
    pub rounds: Vec<Round>,
    /// Stages visited, in order
    pub stages: Vec<Stage>,
}

impl Bb84Result {
    /// Mismatch rate over the whole sifted key, not just the disclosed sample.
    pub fn sifted_error_rate(&self) -> Option<f64> {
        if self.sifted_length == 0 {
            return None;
        }
        let errors = self
            .sifted_alice
            .iter()
            .zip(&self.sifted_bob)
            .filter(|(a, b)| a != b)
            .count();
        Some(errors as f64 / self.sifted_length as f64)
    }
}

/// Runs BB84 with the closed-form qubit model and the configured seed.
pub fn run(config: &Bb84Config) -> Result<Bb84Result, ProtocolError> {
    let mut rng = config.rng();
    run_with(config, &IdealBackend, &mut rng)
}

/// Runs BB84 on `backend`, drawing every random choice from `rng`.
///
/// `config.seed` is ignored here; the caller owns the random source.
pub fn run_with<B, R>(
    config: &Bb84Config,
    backend: &B,
    rng: &mut R,
) -> Result<Bb84Result, ProtocolError>
where
    B: QubitBackend,
    R: Rng + ?Sized,
{
    config.validate()?;
    let n = config.num_qubits;
    let mut stages = Vec::with_capacity(7);

    // Alice picks bits and bases
    let (alice_bits, alice_bases) = party::generate(n, rng);
    stages.push(Stage::Generated);

    let qubits = party::encode(backend, &alice_bits, &alice_bases)?;
    stages.push(Stage::Encoded);
    debug!(num_qubits = n, "alice encoded qubits");

    // Eavesdropper intercepts
    let (qubits, eve_observations) = match &config.eavesdropper {
        Some(eve) => {
            let interception = eve.intercept(backend, qubits, rng)?;
            stages.push(Stage::Intercepted);
            debug!(
                intercepted = interception.intercepted_count(),
                "eavesdropper intercepted qubits"
            );
            (interception.qubits, interception.observations)
        }
        None => (qubits, vec![None; n]),
    };

    // Bob measures in his own bases
    let bob_bases = party::random_bases(n, rng);
    let bob_bits = party::measure_all(backend, qubits, &bob_bases, rng)?;
    stages.push(Stage::Measured);

    let rounds: Vec<Round> = (0..n)
        .map(|i| Round {
            alice_bit: alice_bits[i],
            alice_basis: alice_bases[i],
            eve: eve_observations[i],
            bob_basis: bob_bases[i],
            bob_bit: bob_bits[i],
        })
        .collect();
    let eve_intercepted_count = eve_observations.iter().filter(|o| o.is_some()).count();

    let (sifted_alice, sifted_bob) =
        sifting::sift(&alice_bits, &alice_bases, &bob_bits, &bob_bases)?;
    let sifted_length = sifted_alice.len();
    stages.push(Stage::Sifted);
    debug!(sifted_length, raw_length = n, "sifted key");

    let mut result = Bb84Result {
        raw_length: n,
        sifted_length,
        sifted_alice,
        sifted_bob,
        detection: None,
        outcome: Outcome::NoSiftedKey,
        eve_intercepted_count,
        rounds,
        stages,
    };

    if sifted_length == 0 {
        result.stages.push(Stage::Aborted);
        info!(raw_length = n, "no matching bases, no key established");
        return Ok(result);
    }

    let report = detection::detect(
        &result.sifted_alice,
        &result.sifted_bob,
        config.sample_size,
        rng,
    )?;
    result.stages.push(Stage::Detected);
    debug!(
        sample = report.sample_indices.len(),
        mismatches = report.mismatches,
        qber_percent = report.qber_percent(),
        "compared sample"
    );

    if report.exceeds(config.error_threshold) {
        warn!(
            error_rate = report.error_rate,
            threshold = config.error_threshold,
            "eavesdropping detected, discarding key"
        );
        result.outcome = Outcome::EavesdroppingDetected {
            error_rate: report.error_rate,
        };
        result.stages.push(Stage::Aborted);
    } else {
        let final_key = finalize::finalize(&result.sifted_alice, &report.sample_indices)?;
        info!(
            final_length = final_key.len(),
            error_rate = report.error_rate,
            "key accepted"
        );
        result.outcome = Outcome::Accepted { final_key };
        result.stages.push(Stage::Finalized);
    }

    result.detection = Some(report);
    Ok(result)
}

mod common;

use bb84_qkd::bb84::{self, Bb84Config, Eavesdropper, Outcome};
use bb84_qkd::{DensityMatrixBackend, IdealBackend, QubitBackend};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rejection_rate(config: &Bb84Config, trials: usize, rng: &mut StdRng) -> f64 {
    let rejected = (0..trials)
        .filter(|_| {
            let result = bb84::run_with(config, &IdealBackend, rng).unwrap();
            matches!(result.outcome, Outcome::EavesdroppingDetected { .. })
        })
        .count();
    rejected as f64 / trials as f64
}

fn eve_mismatch_rate<B: QubitBackend>(backend: &B, runs: usize, n: usize, seed: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let config = Bb84Config::new(n).with_eavesdropper(Eavesdropper::new());
    let (mut errors, mut total) = (0usize, 0usize);
    for _ in 0..runs {
        let result = bb84::run_with(&config, backend, &mut rng).unwrap();
        errors += result
            .sifted_alice
            .iter()
            .zip(&result.sifted_bob)
            .filter(|(a, b)| a != b)
            .count();
        total += result.sifted_length;
    }
    errors as f64 / total as f64
}

#[test]
fn sifted_keys_stay_aligned() {
    common::init_tracing();
    let mut rng = StdRng::seed_from_u64(100);

    for n in [1, 5, 50, 333] {
        for eve in [None, Some(Eavesdropper::new())] {
            let mut config = Bb84Config::new(n);
            config.eavesdropper = eve;
            let result = bb84::run_with(&config, &IdealBackend, &mut rng).unwrap();

            assert_eq!(result.sifted_alice.len(), result.sifted_bob.len());
            assert!(result.sifted_length <= n);

            let kept: Vec<_> = result.rounds.iter().filter(|r| r.bases_match()).collect();
            assert_eq!(kept.len(), result.sifted_length);
            for (round, (&a, &b)) in kept
                .iter()
                .zip(result.sifted_alice.iter().zip(&result.sifted_bob))
            {
                assert_eq!(round.alice_bit, a);
                assert_eq!(round.bob_bit, b);
            }
        }
    }
}

#[test]
fn honest_channel_is_never_rejected() {
    let mut rng = StdRng::seed_from_u64(101);
    let config = Bb84Config::default();
    assert_eq!(rejection_rate(&config, 200, &mut rng), 0.0);
}

#[test]
fn intercept_resend_mismatch_converges_to_a_quarter() {
    let rate = eve_mismatch_rate(&IdealBackend, 20, 2000, 102);
    assert!((rate - 0.25).abs() < 0.02, "mismatch rate {rate}");
}

#[test]
fn density_matrix_backend_shows_the_same_disturbance() {
    let rate = eve_mismatch_rate(&DensityMatrixBackend, 4, 2000, 103);
    assert!((rate - 0.25).abs() < 0.03, "mismatch rate {rate}");
}

#[test]
fn partial_interception_scales_the_disturbance() {
    let mut rng = StdRng::seed_from_u64(104);
    let config = Bb84Config::new(20_000)
        .with_eavesdropper(Eavesdropper::with_intercept_ratio(0.4));
    let result = bb84::run_with(&config, &IdealBackend, &mut rng).unwrap();

    let rate = result.sifted_error_rate().unwrap();
    assert!((rate - 0.1).abs() < 0.015, "mismatch rate {rate}");
    let intercepted = result.eve_intercepted_count as f64 / 20_000.0;
    assert!((intercepted - 0.4).abs() < 0.02);
}

#[test]
fn eavesdropper_is_caught_with_a_large_sample() {
    let mut rng = StdRng::seed_from_u64(105);

    // A 200-bit sample of a 25%-error key falls under 20% about 6% of the time.
    let moderate = Bb84Config::new(2000)
        .with_sample_size(200)
        .with_eavesdropper(Eavesdropper::new());
    let rate = rejection_rate(&moderate, 200, &mut rng);
    assert!(rate > 0.85, "rejection rate {rate}");

    let large = moderate.with_sample_size(800);
    let rate = rejection_rate(&large, 400, &mut rng);
    assert!(rate > 0.99, "rejection rate {rate}");
}

#[test]
fn accepted_keys_drop_exactly_the_sample() {
    let mut rng = StdRng::seed_from_u64(106);
    let config = Bb84Config::new(120).with_sample_size(15);

    for _ in 0..50 {
        let result = bb84::run_with(&config, &IdealBackend, &mut rng).unwrap();
        let report = result.detection.as_ref().unwrap();
        let final_key = result.outcome.final_key();
        assert_eq!(
            final_key.len(),
            result.sifted_length - report.sample_indices.len()
        );

        let expected: Vec<bool> = result
            .sifted_alice
            .iter()
            .enumerate()
            .filter(|(i, _)| !report.sample_indices.contains(i))
            .map(|(_, &bit)| bit)
            .collect();
        assert_eq!(final_key, expected.as_slice());
    }
}

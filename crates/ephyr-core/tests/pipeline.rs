//! End-to-end pipeline tests: synthetic signals through the full
//! transform → analytic → connectivity chain.

use ephyr_core::prelude::*;
use std::f64::consts::FRAC_PI_2;

const SAMPLE_RATE: f64 = 250.0;
const N: usize = 250;

fn coupled_pair(lag: f64) -> (Vec<f64>, Vec<f64>) {
    let s1 = SineWave::new(10.0).generate(N, SAMPLE_RATE);
    let s2 = SineWave::new(10.0).with_phase(lag).generate(N, SAMPLE_RATE);
    (s1, s2)
}

#[test]
fn lagged_tones_show_full_phase_locking_and_coherence() {
    let lag = 0.8;
    let (s1, s2) = coupled_pair(lag);

    let a1 = analytic_signal(&s1).unwrap();
    let a2 = analytic_signal(&s2).unwrap();

    let locking = plv(
        &instantaneous_phase(&a1),
        &instantaneous_phase(&a2),
    )
    .unwrap();
    // s2 leads s1 by `lag`, so the mean phase difference φ1 − φ2 is −lag
    assert!(locking.magnitude > 0.999, "plv {}", locking.magnitude);
    assert!((locking.phase + lag).abs() < 0.05, "plv phase {}", locking.phase);

    let coh = coherence(&a1, &a2).unwrap();
    assert!(coh.magnitude > 0.999, "coherence {}", coh.magnitude);
    assert!((coh.phase + lag).abs() < 0.05, "coherence phase {}", coh.phase);

    // A non-zero lag leaves a non-zero imaginary component collapsed to ±π/2,
    // on the negative side here since sin(−lag) < 0
    let im = im_coherence(&coh);
    assert!(im.magnitude > 0.5);
    assert_eq!(im.phase, -FRAC_PI_2);
}

#[test]
fn noisy_coupling_weakens_but_survives() {
    let (mut s1, mut s2) = coupled_pair(1.0);
    GaussianNoise::with_seed(0.4, 11).add_to(&mut s1);
    GaussianNoise::with_seed(0.4, 12).add_to(&mut s2);

    let a1 = analytic_signal(&s1).unwrap();
    let a2 = analytic_signal(&s2).unwrap();
    let locking = plv(
        &instantaneous_phase(&a1),
        &instantaneous_phase(&a2),
    )
    .unwrap();

    assert!(locking.magnitude > 0.5, "plv {}", locking.magnitude);
    assert!(locking.magnitude < 1.0);
}

#[test]
fn orthogonalization_suppresses_instantaneous_mixing() {
    // s2 is a scaled copy of s1 plus independent envelope-modulated activity.
    // Plain envelope correlation sees the mixed-in copy; the orthogonalized
    // measure removes it and reports less coupling.
    let s1 = SineWave::new(10.0).with_envelope(1.0, 0.0).generate(N, SAMPLE_RATE);
    let own = SineWave::new(21.0).with_envelope(1.7, 0.9).generate(N, SAMPLE_RATE);
    let s2: Vec<f64> = s1.iter().zip(own.iter()).map(|(&a, &b)| 0.9 * a + 0.3 * b).collect();

    let a1 = analytic_signal(&s1).unwrap();
    let a2 = analytic_signal(&s2).unwrap();
    let plain = envelope_correlation(&a1, &a2).unwrap();

    let ortho = orthogonalized_envelope_correlation(&s1, &s2).unwrap();

    assert!(
        ortho.regression.correlation.abs() < plain.correlation.abs(),
        "ortho {} vs plain {}",
        ortho.regression.correlation,
        plain.correlation
    );
}

#[test]
fn spectrum_peak_and_band_power_agree() {
    let signal = SineWave::new(10.0).generate(N, SAMPLE_RATE);
    let spectrum = dft(&signal, SAMPLE_RATE).unwrap();

    let (peak_freq, _) = spectrum.peak();
    assert!((peak_freq - 10.0).abs() <= spectrum.freq_resolution());

    let powers = all_band_powers(&spectrum);
    assert!(powers.relative().alpha > 0.5);
}

#[test]
fn analytic_round_trip_preserves_signal() {
    // Even length so the analytic transform preserves the full band,
    // noise included
    let mut signal = SineWave::new(7.0).with_envelope(0.5, 0.3).generate(128, SAMPLE_RATE);
    GaussianNoise::with_seed(0.2, 3).add_to(&mut signal);

    let analytic = analytic_signal(&signal).unwrap();
    for (orig, z) in signal.iter().zip(analytic.iter()) {
        assert!((orig - z.re).abs() < 1e-7, "{} vs {}", orig, z.re);
    }
}

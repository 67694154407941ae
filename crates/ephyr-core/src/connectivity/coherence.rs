//! Coherence Measures
//!
//! Cross-spectral coherence between two analytic signals, its imaginary and
//! corrected-imaginary variants (shared with the PLV family through
//! [`Coupling`]), and the per-sample coherence decomposition.

use crate::connectivity::coupling::Coupling;
use crate::error::{check_lengths, Result};
use crate::types::AnalyticSample;
use serde::Serialize;

/// Per-sample coherence decomposition
#[derive(Debug, Clone, Serialize)]
pub struct SampleCoherence {
    /// Per-sample magnitude, `N·|a1[t]|² / sqrt(power1·power2)`
    pub magnitude: Vec<f64>,
    /// Per-sample phase of `a1[t]·conj(a2[t])` in radians
    pub phase: Vec<f64>,
}

/// Ensemble coherence of two analytic signals
///
/// Accumulates the cross-spectrum `Σ a1[t]·conj(a2[t])` and the total powers
/// over all samples:
///
/// ```text
/// magnitude = |Σ a1·conj(a2)| / sqrt(Σ|a1|² · Σ|a2|²)
/// phase     = arg(Σ a1·conj(a2))
/// ```
///
/// A zero-power input makes the normalizer vanish; the magnitude is then
/// defined as 0 rather than propagating NaN. Sequences of unequal length are
/// rejected.
pub fn coherence(a1: &[AnalyticSample], a2: &[AnalyticSample]) -> Result<Coupling> {
    check_lengths(a1.len(), a2.len())?;

    let mut cross_re = 0.0;
    let mut cross_im = 0.0;
    let mut power1 = 0.0;
    let mut power2 = 0.0;

    for (z1, z2) in a1.iter().zip(a2.iter()) {
        cross_re += z1.re * z2.re + z1.im * z2.im;
        cross_im += z1.im * z2.re - z1.re * z2.im;
        power1 += z1.norm_sqr();
        power2 += z2.norm_sqr();
    }

    let normalizer = (power1 * power2).sqrt();
    let cross_magnitude = (cross_re * cross_re + cross_im * cross_im).sqrt();
    let magnitude = if normalizer == 0.0 {
        0.0
    } else {
        cross_magnitude / normalizer
    };

    Ok(Coupling {
        magnitude,
        phase: cross_im.atan2(cross_re),
    })
}

/// Imaginary coherence: only the lagged component of a coherence estimate
pub fn im_coherence(coherence: &Coupling) -> Coupling {
    coherence.imaginary()
}

/// Corrected imaginary coherence: the lagged component renormalized by the
/// power left after removing the zero-lag part
pub fn cim_coherence(coherence: &Coupling) -> Coupling {
    coherence.corrected_imaginary()
}

/// Per-sample coherence-like quantities, normalized by the total powers
///
/// The per-sample magnitude scales each sample's power share by the signal
/// length N so a self-coherent signal averages to 1; the per-sample phase is
/// the angle of `a1[t]·conj(a2[t])`. Zero total power in either input yields
/// all-zero magnitudes.
pub fn sample_coherence(a1: &[AnalyticSample], a2: &[AnalyticSample]) -> Result<SampleCoherence> {
    check_lengths(a1.len(), a2.len())?;
    let n = a1.len() as f64;

    let power1: f64 = a1.iter().map(|z| z.norm_sqr()).sum();
    let power2: f64 = a2.iter().map(|z| z.norm_sqr()).sum();
    let normalizer = (power1 * power2).sqrt();

    let magnitude: Vec<f64> = a1
        .iter()
        .map(|z1| {
            if normalizer == 0.0 {
                0.0
            } else {
                n * z1.norm_sqr() / normalizer
            }
        })
        .collect();

    let phase: Vec<f64> = a1
        .iter()
        .zip(a2.iter())
        .map(|(z1, z2)| {
            let re = z1.re * z2.re + z1.im * z2.im;
            let im = z1.im * z2.re - z1.re * z2.im;
            im.atan2(re)
        })
        .collect();

    Ok(SampleCoherence { magnitude, phase })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::spectral::analytic_signal;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn analytic_tone(n: usize, cycles: f64, phase: f64) -> Vec<AnalyticSample> {
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * cycles * i as f64 / n as f64 + phase).cos())
            .collect();
        analytic_signal(&signal).unwrap()
    }

    #[test]
    fn test_self_coherence_is_unity() {
        let a = analytic_tone(64, 5.0, 0.0);
        let c = coherence(&a, &a).unwrap();

        assert!((c.magnitude - 1.0).abs() < 1e-12);
        assert!(c.phase.abs() < 1e-12);
    }

    #[test]
    fn test_coherence_recovers_phase_offset() {
        let lag = 0.6;
        let a1 = analytic_tone(64, 5.0, lag);
        let a2 = analytic_tone(64, 5.0, 0.0);
        let c = coherence(&a1, &a2).unwrap();

        assert!((c.magnitude - 1.0).abs() < 1e-6);
        assert!((c.phase - lag).abs() < 1e-6, "phase {}", c.phase);
    }

    #[test]
    fn test_coherence_zero_power_input() {
        let a1 = vec![AnalyticSample::new(0.0, 0.0); 8];
        let a2 = analytic_tone(8, 1.0, 0.0);
        let c = coherence(&a1, &a2).unwrap();

        assert_eq!(c.magnitude, 0.0);
    }

    #[test]
    fn test_coherence_length_mismatch() {
        let a1 = analytic_tone(8, 1.0, 0.0);
        let a2 = analytic_tone(16, 1.0, 0.0);
        let err = coherence(&a1, &a2).unwrap_err();

        assert_eq!(
            err,
            AnalysisError::LengthMismatch {
                expected: 8,
                actual: 16
            }
        );
    }

    #[test]
    fn test_imaginary_variants_collapse_phase() {
        let a1 = analytic_tone(64, 5.0, 0.9);
        let a2 = analytic_tone(64, 5.0, 0.0);
        let c = coherence(&a1, &a2).unwrap();

        let im = im_coherence(&c);
        let cim = cim_coherence(&c);

        for variant in [im, cim] {
            assert!(
                variant.phase == 0.0
                    || variant.phase == FRAC_PI_2
                    || variant.phase == -FRAC_PI_2
            );
        }
        assert!((im.magnitude - (c.magnitude * c.phase.sin()).abs()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_coherence_self_mean_is_unity() {
        let a = analytic_tone(64, 5.0, 0.0);
        let sc = sample_coherence(&a, &a).unwrap();

        let mean: f64 = sc.magnitude.iter().sum::<f64>() / sc.magnitude.len() as f64;
        assert!((mean - 1.0).abs() < 1e-9, "mean {}", mean);

        // a·conj(a) is real and non-negative, so every phase is 0
        for p in &sc.phase {
            assert!(p.abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_coherence_zero_power() {
        let a1 = vec![AnalyticSample::new(0.0, 0.0); 4];
        let sc = sample_coherence(&a1, &a1).unwrap();

        assert!(sc.magnitude.iter().all(|&m| m == 0.0));
    }
}

//! Amplitude Association Measures
//!
//! Pearson correlation with linear regression, envelope correlation over
//! analytic signals, and the orthogonalized envelope correlation that removes
//! zero-lag linear mixing before estimating envelope coupling.

use crate::error::{check_lengths, AnalysisError, Result};
use crate::spectral::analytic::{analytic_signal, envelope};
use crate::types::AnalyticSample;
use serde::Serialize;

/// Near-zero guard for the Pearson denominator
const DEGENERATE_TOLERANCE: f64 = 1e-10;

/// Pearson correlation together with the least-squares line
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Regression {
    /// Pearson correlation coefficient in [−1, 1]; 0 when either input has
    /// (near-)zero variance
    pub correlation: f64,
    /// Least-squares slope of y on x
    pub slope: f64,
    /// Least-squares intercept of y on x
    pub intercept: f64,
}

/// Orthogonalized envelope correlation and its intermediate sequences
#[derive(Debug, Clone)]
pub struct OrthogonalizedCorrelation {
    /// Envelope correlation of signal1 against the orthogonalized signal2
    pub regression: Regression,
    /// signal2 with its projection onto signal1 removed
    pub orthogonalized: Vec<f64>,
    /// Analytic signal of the orthogonalized residual
    pub analytic_orthogonalized: Vec<AnalyticSample>,
}

/// Pearson correlation and linear regression of y on x
///
/// When the correlation denominator falls below 1e-10 (a constant or
/// near-constant input) the correlation is clamped to 0; the slope and
/// intercept still come from the raw sums and must be treated as unreliable
/// in that case.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Regression> {
    check_lengths(x.len(), y.len())?;
    let n = x.len() as f64;

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(&a, &b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|&a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|&b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let var_x = n * sum_x2 - sum_x * sum_x;
    let var_y = n * sum_y2 - sum_y * sum_y;
    let denominator = (var_x * var_y).sqrt();

    let correlation = if denominator < DEGENERATE_TOLERANCE {
        0.0
    } else {
        numerator / denominator
    };

    let slope = numerator / var_x;
    let intercept = (sum_y - slope * sum_x) / n;

    Ok(Regression {
        correlation,
        slope,
        intercept,
    })
}

/// Envelope correlation of two analytic signals
///
/// Pearson correlation of the instantaneous envelopes |a1| and |a2|.
pub fn envelope_correlation(a1: &[AnalyticSample], a2: &[AnalyticSample]) -> Result<Regression> {
    check_lengths(a1.len(), a2.len())?;
    pearson(&envelope(a1), &envelope(a2))
}

/// Orthogonalized envelope correlation of two real signals
///
/// Removes the zero-lag projection of `signal2` onto `signal1`
/// (`s2_ortho[i] = s2[i] − (⟨s1,s2⟩/⟨s1,s1⟩)·s1[i]`) before computing the
/// envelope correlation of the analytic signals, which suppresses envelope
/// coupling caused purely by instantaneous linear mixing. A reference signal
/// with zero power cannot be projected against and is rejected.
pub fn orthogonalized_envelope_correlation(
    signal1: &[f64],
    signal2: &[f64],
) -> Result<OrthogonalizedCorrelation> {
    check_lengths(signal1.len(), signal2.len())?;

    let dot_xy: f64 = signal1.iter().zip(signal2.iter()).map(|(&a, &b)| a * b).sum();
    let dot_xx: f64 = signal1.iter().map(|&a| a * a).sum();
    if dot_xx == 0.0 {
        return Err(AnalysisError::DegenerateSignal(
            "cannot orthogonalize against a zero-power reference signal",
        ));
    }

    let gain = dot_xy / dot_xx;
    let orthogonalized: Vec<f64> = signal2
        .iter()
        .zip(signal1.iter())
        .map(|(&y, &x)| y - gain * x)
        .collect();

    let a1 = analytic_signal(signal1)?;
    let analytic_orthogonalized = analytic_signal(&orthogonalized)?;
    let regression = envelope_correlation(&a1, &analytic_orthogonalized)?;

    Ok(OrthogonalizedCorrelation {
        regression,
        orthogonalized,
        analytic_orthogonalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_pearson_self_correlation() {
        let x = vec![1.0, 2.5, -0.3, 4.1, 0.0, 2.2];
        let r = pearson(&x, &x).unwrap();

        assert!((r.correlation - 1.0).abs() < 1e-12);
        assert!((r.slope - 1.0).abs() < 1e-12);
        assert!(r.intercept.abs() < 1e-9);
    }

    #[test]
    fn test_pearson_anticorrelated() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|&v| 10.0 - 2.0 * v).collect();
        let r = pearson(&x, &y).unwrap();

        assert!((r.correlation + 1.0).abs() < 1e-12);
        assert!((r.slope + 2.0).abs() < 1e-12);
        assert!((r.intercept - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_constant_input_clamps_to_zero() {
        let x = vec![3.0; 8];
        let y = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let r = pearson(&x, &y).unwrap();

        assert_eq!(r.correlation, 0.0);
    }

    #[test]
    fn test_pearson_length_mismatch() {
        let err = pearson(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_envelope_correlation_of_identical_signals() {
        let signal: Vec<f64> = (0..64)
            .map(|i| {
                let t = i as f64 / 64.0;
                0.5 * (0.8 * (2.0 * PI * 2.0 * t).cos() + 1.0) * (2.0 * PI * 8.0 * t).cos()
            })
            .collect();
        let a = analytic_signal(&signal).unwrap();
        let r = envelope_correlation(&a, &a).unwrap();

        assert!((r.correlation - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonalized_self_residual_is_zero() {
        let signal: Vec<f64> = (0..32).map(|i| (i as f64 * 0.4).sin()).collect();
        let result = orthogonalized_envelope_correlation(&signal, &signal).unwrap();

        for r in &result.orthogonalized {
            assert!(r.abs() < 1e-10, "residual {}", r);
        }
        // A zero residual has a constant (zero) envelope: correlation clamps
        assert_eq!(result.regression.correlation, 0.0);
    }

    #[test]
    fn test_orthogonalization_removes_linear_mixing() {
        // s2 is s1 plus an independent tone; the projection removes the
        // shared component, so the residual no longer correlates with s1
        let n = 64;
        let s1: Vec<f64> = (0..n).map(|i| (2.0 * PI * 4.0 * i as f64 / n as f64).cos()).collect();
        let other: Vec<f64> = (0..n).map(|i| (2.0 * PI * 11.0 * i as f64 / n as f64).sin()).collect();
        let s2: Vec<f64> = s1.iter().zip(other.iter()).map(|(&a, &b)| 0.8 * a + b).collect();

        let result = orthogonalized_envelope_correlation(&s1, &s2).unwrap();
        let r = pearson(&s1, &result.orthogonalized).unwrap();

        assert!(r.correlation.abs() < 1e-9, "leakage {}", r.correlation);
    }

    #[test]
    fn test_orthogonalization_rejects_zero_reference() {
        let err = orthogonalized_envelope_correlation(&[0.0; 8], &[1.0; 8]).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateSignal(_)));
    }
}

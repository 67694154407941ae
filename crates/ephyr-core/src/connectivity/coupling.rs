//! Shared Coupling Record
//!
//! Both the phase-locking family and the coherence family report a
//! (magnitude, phase) pair and share the same imaginary / corrected-imaginary
//! transformations. Implementing the transformation once here keeps the
//! edge-case handling of the two families from diverging.

use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

/// A coupling estimate: magnitude in [0, 1] and a phase angle in radians
///
/// For the PLV family the angle is the preferred phase-locking angle; for the
/// coherence family it is the preferred phase offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coupling {
    /// Coupling strength
    pub magnitude: f64,
    /// Preferred phase angle in radians
    pub phase: f64,
}

impl Coupling {
    /// Create a coupling estimate from a magnitude and phase angle
    pub fn new(magnitude: f64, phase: f64) -> Self {
        Self { magnitude, phase }
    }

    /// Imaginary variant: keep only the component not attributable to
    /// zero-lag (in-phase) coupling
    ///
    /// The magnitude becomes |m·sin φ| and the phase collapses to ±π/2
    /// (or 0 when the imaginary component vanishes), encoding only the sign
    /// of the lag.
    pub fn imaginary(&self) -> Coupling {
        let s = self.phase.sin();
        Coupling {
            magnitude: (self.magnitude * s).abs(),
            phase: collapsed_phase(s),
        }
    }

    /// Corrected imaginary variant: the imaginary component renormalized by
    /// the residual power left after removing the real (zero-lag) part
    ///
    /// magnitude = |m·sin φ| / sqrt(1 − (m·cos φ)²), defined as 0 when the
    /// denominator is exactly 0 (a fully real, unit-strength coupling).
    pub fn corrected_imaginary(&self) -> Coupling {
        let s = self.phase.sin();
        let numerator = (self.magnitude * s).abs();
        let real_part = self.magnitude * self.phase.cos();
        let denominator = (1.0 - real_part * real_part).sqrt();

        let magnitude = if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        };

        Coupling {
            magnitude,
            phase: collapsed_phase(s),
        }
    }
}

/// sign(s)·π/2, with sign(0) = 0
///
/// `f64::signum` maps 0.0 to 1.0, which would misreport a purely real
/// coupling as positively lagged, so the three-way split is spelled out.
fn collapsed_phase(s: f64) -> f64 {
    if s > 0.0 {
        FRAC_PI_2
    } else if s < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_imaginary_of_lagged_coupling() {
        let c = Coupling::new(0.8, FRAC_PI_4);
        let im = c.imaginary();

        assert!((im.magnitude - 0.8 * FRAC_PI_4.sin()).abs() < 1e-12);
        assert!((im.phase - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_imaginary_of_in_phase_coupling_is_zero() {
        let c = Coupling::new(1.0, 0.0);
        let im = c.imaginary();

        assert_eq!(im.magnitude, 0.0);
        assert_eq!(im.phase, 0.0);
    }

    #[test]
    fn test_imaginary_negative_lag() {
        let c = Coupling::new(0.5, -1.0);
        let im = c.imaginary();

        assert!(im.phase == -FRAC_PI_2);
        assert!(im.magnitude > 0.0);
    }

    #[test]
    fn test_corrected_imaginary_zero_denominator() {
        // m = 1, φ = 0: denominator sqrt(1 − 1) = 0, magnitude defined as 0
        let c = Coupling::new(1.0, 0.0);
        let cim = c.corrected_imaginary();

        assert_eq!(cim.magnitude, 0.0);
        assert_eq!(cim.phase, 0.0);
    }

    #[test]
    fn test_corrected_imaginary_boosts_lagged_component() {
        let c = Coupling::new(0.9, 0.3);
        let im = c.imaginary();
        let cim = c.corrected_imaginary();

        // The correction divides by a value < 1, so it never shrinks
        assert!(cim.magnitude >= im.magnitude);
        assert!(cim.magnitude.is_finite());
        assert_eq!(cim.phase, FRAC_PI_2);
    }

    #[test]
    fn test_collapsed_phase_range() {
        for &(m, p) in &[(0.3, 1.2), (0.9, -2.8), (0.0, 0.7), (1.0, 0.0)] {
            let c = Coupling::new(m, p);
            for variant in [c.imaginary(), c.corrected_imaginary()] {
                assert!(
                    variant.phase == 0.0
                        || variant.phase == FRAC_PI_2
                        || variant.phase == -FRAC_PI_2
                );
            }
        }
    }
}

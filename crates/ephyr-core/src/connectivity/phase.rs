//! Phase-Locking Measures
//!
//! Phase-locking value (PLV) over two instantaneous-phase sequences, plus the
//! imaginary and corrected-imaginary variants that suppress zero-lag
//! coupling. The variants share their transformation with the coherence
//! family through [`Coupling`].

use crate::connectivity::coupling::Coupling;
use crate::error::{check_lengths, Result};

/// Phase-locking value of two phase sequences (radians)
///
/// The circular mean of the per-sample phase differences:
/// magnitude = |Σ e^{iΔφ}| / N in [0, 1], phase = arg of the same sum.
/// Sequences of unequal length are rejected.
pub fn plv(phase1: &[f64], phase2: &[f64]) -> Result<Coupling> {
    check_lengths(phase1.len(), phase2.len())?;
    let n = phase1.len() as f64;

    let mut sum_re = 0.0;
    let mut sum_im = 0.0;
    for (&p1, &p2) in phase1.iter().zip(phase2.iter()) {
        let delta = p1 - p2;
        sum_re += delta.cos();
        sum_im += delta.sin();
    }

    Ok(Coupling {
        magnitude: (sum_re * sum_re + sum_im * sum_im).sqrt() / n,
        phase: sum_im.atan2(sum_re),
    })
}

/// Imaginary PLV: only the lagged component of a PLV estimate
pub fn iplv(plv: &Coupling) -> Coupling {
    plv.imaginary()
}

/// Corrected imaginary PLV: the lagged component renormalized by the power
/// left after removing the zero-lag part
pub fn ciplv(plv: &Coupling) -> Coupling {
    plv.corrected_imaginary()
}

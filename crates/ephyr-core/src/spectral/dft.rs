//! Discrete Fourier Transform
//!
//! Forward and inverse transforms computed by the direct O(N²) summation
//! definition. The direct summation is the reference contract of this crate:
//! it works for any N (not just powers of two) and keeps the bin-by-bin
//! arithmetic exactly inspectable. For large N an FFT is a behavior-preserving
//! substitution, but it is not performed here; the test suite instead
//! cross-validates these routines against an independent FFT.

use crate::error::{check_lengths, AnalysisError, Result};
use crate::types::Complex64;
use serde::Serialize;
use std::f64::consts::PI;

/// Result of a forward transform
///
/// `frequencies` covers the one-sided range 0..=N/2 (length ⌊N/2⌋+1) while
/// `power`, `phase`, `real` and `imag` keep all N bins so the raw
/// coefficients can be fed back through [`inverse_dft`] unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct Spectrum {
    /// One-sided frequency axis in Hz, `frequencies[i] = i * sample_rate / N`
    pub frequencies: Vec<f64>,
    /// Magnitude-like power per bin, `(2/N) * sqrt(re² + im²)`
    pub power: Vec<f64>,
    /// Phase per bin in radians, `atan2(im, re)`, range (−π, π]
    pub phase: Vec<f64>,
    /// Raw real coefficients, all N bins
    pub real: Vec<f64>,
    /// Raw imaginary coefficients, all N bins
    pub imag: Vec<f64>,
    /// Sample rate the frequency axis was derived from
    pub sample_rate: f64,
}

impl Spectrum {
    /// Number of time-domain samples the spectrum was computed from
    pub fn len(&self) -> usize {
        self.real.len()
    }

    /// True when the spectrum holds no bins
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Frequency spacing between adjacent bins in Hz
    pub fn freq_resolution(&self) -> f64 {
        self.sample_rate / self.len() as f64
    }

    /// Peak one-sided bin as (frequency, power)
    pub fn peak(&self) -> (f64, f64) {
        let mut max_idx = 0;
        let mut max_power = f64::NEG_INFINITY;

        for (i, &p) in self.power.iter().take(self.frequencies.len()).enumerate() {
            if p > max_power {
                max_power = p;
                max_idx = i;
            }
        }

        (self.frequencies[max_idx], max_power)
    }

    /// Format the one-sided spectrum as a text table
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Spectrum ({} samples, {:.1} Hz sample rate, {:.4} Hz resolution)\n",
            self.len(),
            self.sample_rate,
            self.freq_resolution()
        ));
        output.push_str(&"─".repeat(44));
        output.push('\n');
        output.push_str(&format!(
            "{:>14}  {:>12}  {:>12}\n",
            "Freq (Hz)", "Power", "Phase (rad)"
        ));
        output.push_str(&"─".repeat(44));
        output.push('\n');

        for (i, freq) in self.frequencies.iter().enumerate() {
            output.push_str(&format!(
                "{:>14.4}  {:>12.6}  {:>12.6}\n",
                freq, self.power[i], self.phase[i]
            ));
        }

        output
    }

    /// Format the one-sided spectrum as CSV
    pub fn to_csv(&self) -> String {
        let mut output = String::from("frequency_hz,power,phase_rad\n");
        for (i, freq) in self.frequencies.iter().enumerate() {
            output.push_str(&format!("{},{},{}\n", freq, self.power[i], self.phase[i]));
        }
        output
    }
}

/// Compute the forward DFT of a real signal by direct summation
///
/// For k = 0..N−1:
///
/// ```text
/// real[k] = Σₙ x[n]·cos(−2πkn/N)
/// imag[k] = Σₙ x[n]·sin(−2πkn/N)
/// ```
///
/// Cost is O(N²). An empty signal is rejected with
/// [`AnalysisError::EmptySignal`].
pub fn dft(signal: &[f64], sample_rate: f64) -> Result<Spectrum> {
    let n = signal.len();
    if n == 0 {
        return Err(AnalysisError::EmptySignal);
    }

    let mut real = vec![0.0; n];
    let mut imag = vec![0.0; n];

    for k in 0..n {
        for (t, &x) in signal.iter().enumerate() {
            let angle = -2.0 * PI * (k * t) as f64 / n as f64;
            real[k] += x * angle.cos();
            imag[k] += x * angle.sin();
        }
    }

    let half = n / 2;
    let frequencies: Vec<f64> = (0..=half).map(|i| i as f64 * sample_rate / n as f64).collect();

    let scale = 2.0 / n as f64;
    let power: Vec<f64> = real
        .iter()
        .zip(imag.iter())
        .map(|(&re, &im)| scale * (re * re + im * im).sqrt())
        .collect();
    let phase: Vec<f64> = real
        .iter()
        .zip(imag.iter())
        .map(|(&re, &im)| im.atan2(re))
        .collect();

    Ok(Spectrum {
        frequencies,
        power,
        phase,
        real,
        imag,
        sample_rate,
    })
}

/// Reconstruct a complex time-domain sequence from raw DFT coefficients
///
/// For n = 0..N−1, both components normalized by N:
///
/// ```text
/// out[n].re = (1/N) Σₖ (real[k]·cos(2πkn/N) − imag[k]·sin(2πkn/N))
/// out[n].im = (1/N) Σₖ (real[k]·sin(2πkn/N) + imag[k]·cos(2πkn/N))
/// ```
///
/// The output is always a per-sample complex pair; a purely real
/// reconstruction is not special-cased, so callers wanting magnitude or phase
/// extract it themselves. Cost is O(N²). Coefficient slices of unequal length
/// fail with [`AnalysisError::LengthMismatch`].
pub fn inverse_dft(real: &[f64], imag: &[f64]) -> Result<Vec<Complex64>> {
    check_lengths(real.len(), imag.len())?;
    let n = real.len();

    let mut out = Vec::with_capacity(n);
    for t in 0..n {
        let mut sum = Complex64::new(0.0, 0.0);
        for k in 0..n {
            let angle = 2.0 * PI * (k * t) as f64 / n as f64;
            let (sin, cos) = angle.sin_cos();
            sum.re += real[k] * cos - imag[k] * sin;
            sum.im += real[k] * sin + imag[k] * cos;
        }
        out.push(sum / n as f64);
    }

    Ok(out)
}

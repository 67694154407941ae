//! # ephyr-core: Spectral & Connectivity Analysis
//!
//! This crate estimates the spectral content of uniformly sampled time-series
//! signals (e.g. multichannel electrophysiology recordings) and the pairwise
//! statistical/functional coupling between them.
//!
//! ## Features
//!
//! - **Spectral transforms**: forward/inverse DFT by direct summation, with
//!   power and phase per bin
//! - **Analytic signal**: frequency-domain Hilbert transform yielding
//!   instantaneous envelope and phase
//! - **Association measures**: Pearson correlation/regression, envelope
//!   correlation, orthogonalized envelope correlation
//! - **Phase coupling**: phase-locking value with imaginary and
//!   corrected-imaginary variants
//! - **Coherence**: ensemble and per-sample cross-spectral coherence with the
//!   same variants
//! - **EEG bands**: standard band ranges and band-power extraction
//! - **Synthetic signals**: deterministic sinusoid and Gaussian-noise
//!   generators for tests and fixtures
//!
//! ## Design
//!
//! Every operation is a pure, synchronous function over read-only value
//! sequences: no caching, no shared mutable state, results returned by value.
//! The transforms follow the literal O(N²) summation definition, which works
//! for any N and keeps the arithmetic verifiable bin by bin; callers with
//! large N should account for that cost.
//!
//! ## Example
//!
//! ```rust
//! use ephyr_core::prelude::*;
//!
//! let sample_rate = 250.0;
//! let s1 = SineWave::new(10.0).generate(250, sample_rate);
//! let s2 = SineWave::new(10.0).with_phase(0.5).generate(250, sample_rate);
//!
//! // Spectral peak of the first signal
//! let spectrum = dft(&s1, sample_rate)?;
//! let (peak_freq, _) = spectrum.peak();
//! assert!((peak_freq - 10.0).abs() <= spectrum.freq_resolution());
//!
//! // Phase locking between the two
//! let p1 = instantaneous_phase(&analytic_signal(&s1)?);
//! let p2 = instantaneous_phase(&analytic_signal(&s2)?);
//! let locking = plv(&p1, &p2)?;
//! assert!(locking.magnitude > 0.99);
//! # Ok::<(), ephyr_core::AnalysisError>(())
//! ```

pub mod band;
pub mod connectivity;
pub mod error;
pub mod spectral;
pub mod synth;
pub mod types;

pub use band::{all_band_powers, band_power, BandPowers, EegBand};
pub use connectivity::{
    cim_coherence, ciplv, coherence, envelope_correlation, im_coherence, iplv,
    orthogonalized_envelope_correlation, pearson, plv, sample_coherence, Coupling,
    OrthogonalizedCorrelation, Regression, SampleCoherence,
};
pub use error::{AnalysisError, Result};
pub use spectral::{analytic_signal, dft, envelope, instantaneous_phase, inverse_dft, Spectrum};
pub use synth::{GaussianNoise, SineWave};
pub use types::{AnalyticSample, Complex64};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::band::{all_band_powers, band_power, BandPowers, EegBand};
    pub use crate::connectivity::{
        cim_coherence, ciplv, coherence, envelope_correlation, im_coherence, iplv,
        orthogonalized_envelope_correlation, pearson, plv, sample_coherence, Coupling, Regression,
    };
    pub use crate::error::{AnalysisError, Result};
    pub use crate::spectral::{
        analytic_signal, dft, envelope, instantaneous_phase, inverse_dft, Spectrum,
    };
    pub use crate::synth::{GaussianNoise, SineWave};
    pub use crate::types::{AnalyticSample, Complex64};
}

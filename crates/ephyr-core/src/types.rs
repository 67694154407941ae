//! Common type aliases
//!
//! All signals are uniformly sampled sequences of `f64`. The analytic signal
//! produced by the Hilbert construction is a per-sample complex sequence; its
//! magnitude is the instantaneous envelope and its angle the instantaneous
//! phase.

pub use num_complex::Complex64;

/// One complex sample of an analytic signal
pub type AnalyticSample = Complex64;

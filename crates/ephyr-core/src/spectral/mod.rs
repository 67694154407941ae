//! Spectral Transforms
//!
//! Forward/inverse discrete Fourier transform by direct summation, and the
//! analytic-signal construction built on top of it.

pub mod analytic;
pub mod dft;

pub use analytic::{analytic_signal, envelope, instantaneous_phase};
pub use dft::{dft, inverse_dft, Spectrum};

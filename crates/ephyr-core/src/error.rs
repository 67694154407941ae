//! Error types for the analysis engine
//!
//! Only shape/contract violations surface as errors. Arithmetic degeneracies
//! (near-zero denominators, zero-variance inputs) are recovered locally by the
//! individual measures with a defined sentinel value, so callers never see
//! NaN or infinity from those paths.

use thiserror::Error;

/// Errors produced by the spectral and connectivity routines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The forward transform was handed an empty signal
    #[error("empty signal: the transform requires at least one sample")]
    EmptySignal,

    /// Two paired sequences do not have the same length
    #[error("length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch {
        /// Length of the first (reference) sequence
        expected: usize,
        /// Length of the offending sequence
        actual: usize,
    },

    /// A signal has no power where the operation requires a non-zero divisor
    #[error("degenerate signal: {0}")]
    DegenerateSignal(&'static str),
}

/// Convenience result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Check that two paired sequences share a length
pub(crate) fn check_lengths(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(AnalysisError::LengthMismatch { expected, actual });
    }
    Ok(())
}

//! Pairwise Connectivity Measures
//!
//! Every measure here is a pure function over read-only value sequences: it
//! allocates only local data, never mutates its inputs, and returns a small
//! fixed-field record. Calls are therefore safe from any number of concurrent
//! call sites.
//!
//! Three families:
//!
//! - **Association**: Pearson correlation/regression, envelope correlation,
//!   orthogonalized envelope correlation
//! - **Phase locking**: PLV and its imaginary / corrected-imaginary variants
//! - **Coherence**: ensemble and per-sample coherence with the same variants
//!
//! The imaginary / corrected-imaginary transformation is implemented once on
//! [`Coupling`] and shared by the phase-locking and coherence families.

pub mod association;
pub mod coherence;
pub mod coupling;
pub mod phase;

pub use association::{
    envelope_correlation, orthogonalized_envelope_correlation, pearson,
    OrthogonalizedCorrelation, Regression,
};
pub use coherence::{cim_coherence, coherence, im_coherence, sample_coherence, SampleCoherence};
pub use coupling::Coupling;
pub use phase::{ciplv, iplv, plv};

//! SuperLeaf-level visibility propagation.
//!
//! The propagation is behind [`PropagationOps`], with a serial implementation
//! that is always available and a rayon-based one behind the `parallel`
//! feature.

pub mod flood;
pub mod frustum;
pub mod matrix;
pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use matrix::BitMatrix;
pub use serial::SerialPropagator;
pub use traits::PropagationOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelPropagator;

/// The propagator selected by the crate features.
#[cfg(not(feature = "parallel"))]
pub fn default_propagator() -> SerialPropagator {
    SerialPropagator::new()
}

#[cfg(feature = "parallel")]
pub fn default_propagator() -> ParallelPropagator {
    ParallelPropagator::new()
}

//! Generator implementations
//!
//! Two independent generators share the [`RandomSource`] contract:
//! [`FastRng`] (linear-congruential, small state, weak statistics) and
//! [`SecureRng`] (ISAAC-style block generator with secure-output helpers).
//!
//! [`RandomSource`]: crate::RandomSource

mod isaac;
mod lcg;

pub use isaac::SecureRng;
pub use lcg::FastRng;

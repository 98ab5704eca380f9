//! Linear-congruential fast generator
//!
//! Small, fast, deterministic float generator using the classic recurrence
//! `seed' = (seed * 9301 + 49297) mod 233280`.
//!
//! # Determinism
//!
//! Same seed → same float sequence, bit-for-bit, on every run and platform.
//! This is CRITICAL for:
//! - Debugging (reproduce exact sequences)
//! - Testing (verify behavior)
//! - Checkpointing (resume from a stored seed)
//!
//! # Known Limitation
//!
//! The modulus is 233280 (< 2^18), so the sequence has a short period and
//! weak statistical quality over very long runs. This generator is NOT
//! suitable for anything security-sensitive; use [`SecureRng`] for that.
//!
//! [`SecureRng`]: crate::SecureRng

use serde::{Deserialize, Serialize};

use crate::entropy::{self, EntropyError, SeedSource};
use crate::sampling::{RandomSource, RngStats};

/// LCG recurrence constants
const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Deterministic fast generator (linear-congruential)
///
/// # Example
/// ```
/// use seeded_random_core_rs::{FastRng, RandomSource};
///
/// let mut rng = FastRng::new(42);
/// let value = rng.next_f64();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastRng {
    /// Seed fixed at construction; `reset()` returns here
    pub(crate) initial_seed: u64,

    /// Seed advanced by every draw; always in `[0, 233280)` after the
    /// first draw
    pub(crate) current_seed: u64,

    /// Count of primitive draws since construction or last `reset()`
    pub(crate) iterations: u64,
}

impl FastRng {
    /// Create a generator with the given seed.
    ///
    /// # Example
    /// ```
    /// use seeded_random_core_rs::FastRng;
    ///
    /// let rng = FastRng::new(12345);
    /// assert_eq!(rng.get_initial_seed(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            initial_seed: seed,
            current_seed: seed,
            iterations: 0,
        }
    }

    /// Create a generator seeded from the best available ambient source.
    ///
    /// Draws a 31-bit seed from the OS entropy pool, falling back to a
    /// scrambled wall clock when the pool is unreachable. This constructor
    /// favors availability over entropy quality and never fails.
    pub fn from_entropy() -> Self {
        Self::new(entropy::best_effort_seed_u31() as u64)
    }

    /// Create a generator seeded from a caller-supplied source.
    pub fn from_source(source: &mut dyn SeedSource) -> Result<Self, EntropyError> {
        Ok(Self::new(source.next_u31()? as u64))
    }

    /// Seed fixed at construction (the `reset()` target).
    pub fn get_initial_seed(&self) -> u64 {
        self.initial_seed
    }

    /// Seed as of the most recent draw (for checkpointing/replay).
    ///
    /// A new generator constructed with this value continues the exact
    /// sequence from this point.
    pub fn get_current_seed(&self) -> u64 {
        self.current_seed
    }

    /// Re-point the stream to `seed` without touching the initial seed.
    ///
    /// Allows fast-forwarding or rewinding to any previously observed
    /// current seed; `reset()` still returns to the true origin.
    pub fn set_seed(&mut self, seed: u64) {
        self.current_seed = seed;
    }
}

impl RandomSource for FastRng {
    fn next_f64(&mut self) -> f64 {
        // (s % M * A + C) % M == (s * A + C) % M, and keeps the product
        // inside u64 for any caller-supplied seed
        self.current_seed =
            (self.current_seed % LCG_MODULUS * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.iterations += 1;
        self.current_seed as f64 / LCG_MODULUS as f64
    }

    fn fork(&mut self) -> Self {
        let seed = self.next_int(0, i32::MAX as i64);
        Self::new(seed as u64)
    }

    fn reset(&mut self) {
        self.current_seed = self.initial_seed;
        self.iterations = 0;
    }

    fn stats(&self) -> RngStats {
        RngStats {
            initial_seed: self.initial_seed,
            current_seed: self.current_seed,
            iterations: self.iterations,
        }
    }
}

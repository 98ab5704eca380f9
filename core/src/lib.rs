//! Seeded Random Core - Deterministic Generators
//!
//! Seeded pseudo-random number generation with two independent generators
//! behind one sampling contract.
//!
//! # Architecture
//!
//! - **rng**: the two generators - [`FastRng`] (linear-congruential) and
//!   [`SecureRng`] (ISAAC-style block generator with hex/bytes/base64/UUID
//!   output helpers)
//! - **sampling**: the shared [`RandomSource`] capability trait; all derived
//!   operations (ranges, picks, shuffles, weighted selection, forking) are
//!   implemented once against the float primitive
//! - **entropy**: injectable ambient seed sources for unseeded construction
//! - **checkpoint**: serializable snapshots for exact sequence resume
//! - **oneshot**: construct-once convenience wrappers
//!
//! # Critical Invariants
//!
//! 1. Same seed → same output sequence, bit-for-bit, on every platform
//! 2. Seeded generators never touch ambient entropy
//! 3. Instances are single-owner with no shared state; `fork()` hands a seed
//!    to the child and nothing else
//!
//! # Choosing a generator
//!
//! [`FastRng`] trades statistical quality for speed and a tiny state: its
//! modulus is below 2^18, so it MUST NOT be used for tokens, keys, or any
//! security-sensitive draw. [`SecureRng`] is the stream-cipher-style
//! generator intended for those uses - but it is a deterministic generator,
//! not an audited CSPRNG.
//!
//! # Example
//! ```
//! use seeded_random_core_rs::{FastRng, RandomSource, SecureRng};
//!
//! let mut fast = FastRng::new(42);
//! let dice: Vec<i64> = (0..5).map(|_| fast.next_int(1, 6)).collect();
//! assert!(dice.iter().all(|d| (1..=6).contains(d)));
//!
//! let mut secure = SecureRng::new(42);
//! let token = secure.next_hex(16);
//! assert_eq!(token.len(), 32);
//! ```

// Module declarations
pub mod checkpoint;
pub mod entropy;
pub mod oneshot;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use checkpoint::{FastRngSnapshot, SecureRngSnapshot, SnapshotError};
pub use entropy::{ClockEntropy, EntropyError, FixedEntropy, OsEntropy, SeedSource};
pub use oneshot::{random_float, random_int, random_pick, random_shuffle, secure_hex, secure_int};
pub use rng::{FastRng, SecureRng};
pub use sampling::{RandomSource, RngStats, Weighted};

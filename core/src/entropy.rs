//! Ambient entropy sources for unseeded generator construction
//!
//! Seeded construction never touches this module: a seed fully determines a
//! generator's output and reproducibility is sacred. Only the unseeded
//! constructors draw from an ambient source, and they take it through the
//! [`SeedSource`] trait so callers (and tests) can substitute their own
//! provider instead of relying on a hidden global.
//!
//! # Sources
//!
//! - [`OsEntropy`]: the operating system's cryptographically strong pool
//!   (via `getrandom`). Can fail in restricted sandboxes.
//! - [`ClockEntropy`]: a scrambled wall-clock fallback. Never fails, makes
//!   no security claim.
//! - [`FixedEntropy`]: a repeating byte pattern for deterministic tests.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Errors that can occur while drawing seed material
#[derive(Debug, Error, PartialEq)]
pub enum EntropyError {
    #[error("entropy source unavailable: {reason}")]
    Unavailable { reason: String },
}

/// A provider of raw seed material
///
/// Implementations fill a byte buffer; the provided helpers cut seeds of the
/// widths the generators need.
pub trait SeedSource {
    /// Fill `dest` with seed bytes, or report that the source is unavailable.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Draw a full 32-bit seed.
    fn next_u32(&mut self) -> Result<u32, EntropyError> {
        let mut buf = [0u8; 4];
        self.try_fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Draw a 31-bit seed (the fast generator's seed domain).
    fn next_u31(&mut self) -> Result<u32, EntropyError> {
        Ok(self.next_u32()? & 0x7FFF_FFFF)
    }
}

/// The operating system's cryptographically strong entropy pool
///
/// # Example
/// ```
/// use seeded_random_core_rs::{OsEntropy, SeedSource};
///
/// let mut source = OsEntropy;
/// let mut buf = [0u8; 16];
/// if source.try_fill(&mut buf).is_ok() {
///     // buf now holds OS-provided random bytes
/// }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl SeedSource for OsEntropy {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|e| EntropyError::Unavailable {
            reason: e.to_string(),
        })
    }
}

/// Weak wall-clock fallback source
///
/// Seeds a splitmix-style scrambler from the current time. Infallible, but
/// NOT suitable for anything security-sensitive; it exists so that unseeded
/// construction of the fast generator degrades gracefully when the OS pool
/// is unreachable.
#[derive(Debug, Clone)]
pub struct ClockEntropy {
    state: u64,
}

impl ClockEntropy {
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        // Avoid the all-zero fixed point of the scrambler
        Self {
            state: nanos | 1,
        }
    }

    fn next_word(&mut self) -> u64 {
        // splitmix64 step
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl Default for ClockEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for ClockEntropy {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }
}

/// Fixed byte pattern source for tests
///
/// Cycles over the given bytes forever; an empty pattern yields zeros.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
    position: usize,
}

impl FixedEntropy {
    pub fn new(pattern: Vec<u8>) -> Self {
        Self {
            pattern,
            position: 0,
        }
    }
}

impl SeedSource for FixedEntropy {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for byte in dest.iter_mut() {
            *byte = if self.pattern.is_empty() {
                0
            } else {
                let b = self.pattern[self.position % self.pattern.len()];
                self.position += 1;
                b
            };
        }
        Ok(())
    }
}

/// Best-effort 31-bit seed: OS pool first, wall-clock scrambler otherwise.
///
/// Used by the fast generator's unseeded constructor, which favors
/// availability over entropy quality. The secure generator does the
/// opposite and fails loudly instead of falling back.
pub(crate) fn best_effort_seed_u31() -> u32 {
    match OsEntropy.next_u31() {
        Ok(seed) => seed,
        Err(_) => ClockEntropy::new()
            .next_u31()
            .unwrap_or(1), // ClockEntropy::try_fill is infallible
    }
}

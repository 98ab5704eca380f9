//! One-shot convenience wrappers
//!
//! Each function constructs a seeded generator, performs a single operation,
//! and discards it. Pure composition over the generator APIs, no new logic;
//! a call with seed `s` returns exactly what a fresh generator seeded with
//! `s` would return from its first operation.

use crate::rng::{FastRng, SecureRng};
use crate::sampling::RandomSource;

/// One-shot integer draw in `[min, max]` (fast generator).
///
/// # Panics
/// Panics if `min > max`.
///
/// # Example
/// ```
/// use seeded_random_core_rs::random_int;
///
/// let roll = random_int(42, 1, 6);
/// assert!((1..=6).contains(&roll));
/// assert_eq!(roll, random_int(42, 1, 6));
/// ```
pub fn random_int(seed: u64, min: i64, max: i64) -> i64 {
    FastRng::new(seed).next_int(min, max)
}

/// One-shot float draw in `[min, max)` (fast generator).
pub fn random_float(seed: u64, min: f64, max: f64) -> f64 {
    FastRng::new(seed).next_float(min, max)
}

/// One-shot shuffled copy of `items` (fast generator).
pub fn random_shuffle<T: Clone>(seed: u64, items: &[T]) -> Vec<T> {
    FastRng::new(seed).shuffle(items)
}

/// One-shot uniform pick from `items` (fast generator); `None` when empty.
pub fn random_pick<'a, T>(seed: u64, items: &'a [T]) -> Option<&'a T> {
    FastRng::new(seed).pick(items)
}

/// One-shot integer draw in `[min, max]` (secure generator).
///
/// # Panics
/// Panics if `min > max`.
pub fn secure_int(seed: u32, min: i64, max: i64) -> i64 {
    SecureRng::new(seed).next_int(min, max)
}

/// One-shot lowercase hex string of `2 * length` chars (secure generator).
pub fn secure_hex(seed: u32, length: usize) -> String {
    SecureRng::new(seed).next_hex(length)
}

//! Shared sampling contract for all generators
//!
//! Both generator types expose the same derived operations (integer ranges,
//! coin flips, picks, shuffles, weighted selection, forking). The algorithms
//! are identical regardless of which generator backs them, so they live here
//! once, as provided methods on the [`RandomSource`] trait, written purely in
//! terms of the `next_f64()` primitive.
//!
//! # Critical Invariants
//!
//! 1. Every derived operation consumes a deterministic number of primitive
//!    draws, so replaying a seed replays every derived result too
//! 2. `shuffle` never mutates its input
//! 3. Empty collections are a defined `None` outcome, not an error

use serde::{Deserialize, Serialize};

/// An item paired with a non-negative selection weight
///
/// Zero weights are allowed (and effectively unselectable); negative weights
/// are an unchecked precondition violation with best-effort behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weighted<T> {
    pub item: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub fn new(item: T, weight: f64) -> Self {
        Self { item, weight }
    }
}

/// Read-only snapshot of a generator's counters
///
/// A pure projection of generator state, produced on demand by
/// [`RandomSource::stats`] and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngStats {
    /// Seed fixed at construction (the `reset()` target)
    pub initial_seed: u64,

    /// Seed as of the most recent draw or re-seed
    pub current_seed: u64,

    /// Total primitive draws since construction or last `reset()`
    pub iterations: u64,
}

/// The capability set shared by every generator
///
/// Implementors provide the float primitive plus the per-generator lifecycle
/// operations (`fork`, `reset`, `stats`); everything else is derived here.
///
/// # Example
/// ```
/// use seeded_random_core_rs::{FastRng, RandomSource};
///
/// let mut rng = FastRng::new(42);
/// let roll = rng.next_int(1, 6);
/// assert!((1..=6).contains(&roll));
/// ```
pub trait RandomSource {
    /// Draw the next value in `[0.0, 1.0)`, advancing generator state.
    fn next_f64(&mut self) -> f64;

    /// Create an independent child generator seeded from this one's stream.
    ///
    /// The child shares no state with the parent; the parent's iteration
    /// counter advances exactly as for a normal draw.
    fn fork(&mut self) -> Self
    where
        Self: Sized;

    /// Restore the post-construction state (original seed, zero iterations).
    fn reset(&mut self);

    /// Snapshot the generator's counters.
    fn stats(&self) -> RngStats;

    /// Draw an integer in `[min, max]` (both ends inclusive).
    ///
    /// # Panics
    /// Panics if `min > max`.
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "next_int: min must be <= max");

        let span = (max as i128 - min as i128 + 1) as f64;
        min + (self.next_f64() * span).floor() as i64
    }

    /// Draw a float in `[min, max)`.
    fn next_float(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Return true with probability `p`.
    ///
    /// `p <= 0.0` is always false; `p >= 1.0` is always true (the primitive
    /// is strictly below 1).
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Fair coin flip.
    fn next_bool(&mut self) -> bool {
        self.chance(0.5)
    }

    /// Draw `+1` or `-1` with equal probability.
    fn next_sign(&mut self) -> i64 {
        if self.chance(0.5) {
            1
        } else {
            -1
        }
    }

    /// Pick a uniformly random element, or `None` if `items` is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_int(0, items.len() as i64 - 1) as usize;
        Some(&items[index])
    }

    /// Return a shuffled copy of `items` (Fisher-Yates).
    ///
    /// The input slice is never mutated.
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.next_int(0, i as i64) as usize;
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// Pick an element with probability proportional to its weight.
    ///
    /// Returns `None` for an empty list. If floating-point rounding exhausts
    /// the walk without crossing zero, the last item is the defined fallback.
    fn weighted_pick<'a, T>(&mut self, items: &'a [Weighted<T>]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let total: f64 = items.iter().map(|w| w.weight).sum();
        let mut remaining = self.next_f64() * total;
        for weighted in items {
            remaining -= weighted.weight;
            if remaining <= 0.0 {
                return Some(&weighted.item);
            }
        }
        items.last().map(|w| &w.item)
    }
}

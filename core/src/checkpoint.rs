//! Checkpoint - Save/Restore Generator State
//!
//! Serializable snapshots of generator state for pause/resume of an exact
//! output sequence.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues the exact sequence the
//!   original would have produced
//! - **Fast generator**: `{initial_seed, current_seed, iterations}` is the
//!   complete resumable state
//! - **Secure generator**: mid-sequence resume additionally needs the full
//!   256-word batch, the cursor, and the three accumulators; restoring is
//!   validated structurally (buffer length, cursor range)
//!
//! Without a snapshot, `set_seed`/`reset` on the secure generator restore a
//! start-of-sequence position only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{FastRng, SecureRng};

/// Words in a secure generator batch (snapshot validation target)
const SECURE_BATCH_WORDS: usize = 256;

/// Errors that can occur when restoring a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("snapshot buffer holds {found} words, expected {expected}")]
    BufferLength { found: usize, expected: usize },

    #[error("snapshot cursor {found} exceeds batch size {max}")]
    CursorOutOfRange { found: usize, max: usize },
}

/// Complete resumable state of a [`FastRng`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastRngSnapshot {
    pub initial_seed: u64,
    pub current_seed: u64,
    pub iterations: u64,
}

impl From<&FastRng> for FastRngSnapshot {
    fn from(rng: &FastRng) -> Self {
        FastRngSnapshot {
            initial_seed: rng.initial_seed,
            current_seed: rng.current_seed,
            iterations: rng.iterations,
        }
    }
}

impl From<FastRngSnapshot> for FastRng {
    fn from(snapshot: FastRngSnapshot) -> Self {
        let mut rng = FastRng::new(snapshot.initial_seed);
        rng.current_seed = snapshot.current_seed;
        rng.iterations = snapshot.iterations;
        rng
    }
}

/// Complete resumable state of a [`SecureRng`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecureRngSnapshot {
    pub initial_seed: u32,
    pub current_seed: u32,
    pub iterations: u64,

    /// The full pre-mixed batch, exactly 256 words
    pub buffer: Vec<u32>,

    /// Unconsumed words remaining in the batch
    pub cursor: usize,

    pub acc_a: u32,
    pub acc_b: u32,
    pub acc_c: u32,
}

impl From<&SecureRng> for SecureRngSnapshot {
    fn from(rng: &SecureRng) -> Self {
        SecureRngSnapshot {
            initial_seed: rng.initial_seed,
            current_seed: rng.current_seed,
            iterations: rng.iterations,
            buffer: rng.buffer.to_vec(),
            cursor: rng.cursor,
            acc_a: rng.acc_a,
            acc_b: rng.acc_b,
            acc_c: rng.acc_c,
        }
    }
}

impl TryFrom<SecureRngSnapshot> for SecureRng {
    type Error = SnapshotError;

    fn try_from(snapshot: SecureRngSnapshot) -> Result<Self, Self::Error> {
        if snapshot.buffer.len() != SECURE_BATCH_WORDS {
            return Err(SnapshotError::BufferLength {
                found: snapshot.buffer.len(),
                expected: SECURE_BATCH_WORDS,
            });
        }
        if snapshot.cursor > SECURE_BATCH_WORDS {
            return Err(SnapshotError::CursorOutOfRange {
                found: snapshot.cursor,
                max: SECURE_BATCH_WORDS,
            });
        }

        let mut rng = SecureRng::new(snapshot.initial_seed);
        rng.current_seed = snapshot.current_seed;
        rng.iterations = snapshot.iterations;
        let mut buffer = [0u32; SECURE_BATCH_WORDS];
        buffer.copy_from_slice(&snapshot.buffer);
        rng.buffer = buffer;
        rng.cursor = snapshot.cursor;
        rng.acc_a = snapshot.acc_a;
        rng.acc_b = snapshot.acc_b;
        rng.acc_c = snapshot.acc_c;
        Ok(rng)
    }
}

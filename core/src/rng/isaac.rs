//! ISAAC-style seeded block generator
//!
//! Stream-cipher-style generator producing batches of 256 32-bit words from
//! an expanded seed state. Words are pre-mixed a full batch at a time and
//! consumed one per draw; when the batch runs out the next draw transparently
//! mixes a fresh one.
//!
//! # Determinism
//!
//! Given a seed, every output (words, floats, hex, bytes, base64, UUIDs) is
//! a pure function of that seed. The secure-output helpers never touch the
//! ambient entropy source; reproducibility with a given seed is load-bearing.
//!
//! # Security Note
//!
//! This is a deterministic generator in the ISAAC family, not an audited
//! CSPRNG. It is far stronger than the fast LCG and suitable for tokens and
//! identifiers, but it carries no formal security proof.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use uuid::Uuid;

use crate::entropy::{EntropyError, OsEntropy, SeedSource};
use crate::sampling::{RandomSource, RngStats};

/// Words per output batch
const BATCH_WORDS: usize = 256;

/// 32-bit golden-ratio constant used for seed expansion
const GOLDEN_RATIO: u32 = 0x9E37_79B9;

/// Deterministic secure generator (ISAAC-style block state machine)
///
/// # Example
/// ```
/// use seeded_random_core_rs::SecureRng;
///
/// let mut rng = SecureRng::new(42);
/// let token = rng.next_hex(16);
/// assert_eq!(token.len(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct SecureRng {
    /// Seed fixed at construction; `reset()` re-runs the full seeding
    /// procedure from here
    pub(crate) initial_seed: u32,

    /// Seed applied by the most recent seeding (construction, `set_seed`,
    /// or `reset`)
    pub(crate) current_seed: u32,

    /// Count of primitive draws since construction or last `reset()`
    pub(crate) iterations: u64,

    /// Current batch of pre-mixed output words
    pub(crate) buffer: [u32; BATCH_WORDS],

    /// Unconsumed words remaining in the batch; counts down from 256 to 0
    pub(crate) cursor: usize,

    pub(crate) acc_a: u32,
    pub(crate) acc_b: u32,
    pub(crate) acc_c: u32,
}

impl SecureRng {
    /// Create a generator with the given seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            initial_seed: seed,
            current_seed: seed,
            iterations: 0,
            buffer: [0; BATCH_WORDS],
            cursor: 0,
            acc_a: 0,
            acc_b: 0,
            acc_c: 0,
        };
        rng.isaac_seed(seed);
        rng
    }

    /// Create a generator seeded from the OS entropy pool.
    ///
    /// Fails loudly when no cryptographically strong source is available —
    /// this constructor never silently degrades to a weaker source.
    ///
    /// # Errors
    /// [`EntropyError::Unavailable`] when the OS pool cannot be read.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        Ok(Self::new(OsEntropy.next_u32()?))
    }

    /// Create a generator seeded from a caller-supplied source.
    pub fn from_source(source: &mut dyn SeedSource) -> Result<Self, EntropyError> {
        Ok(Self::new(source.next_u32()?))
    }

    /// Seed fixed at construction (the `reset()` target).
    pub fn get_initial_seed(&self) -> u32 {
        self.initial_seed
    }

    /// Seed applied by the most recent seeding.
    pub fn get_current_seed(&self) -> u32 {
        self.current_seed
    }

    /// Re-seed the full generator state from `seed`.
    ///
    /// Runs the complete seeding procedure again (buffer expansion, warm-up
    /// mix); this is not a cheap pointer move. The initial seed is untouched,
    /// so `reset()` still returns to the true origin. Note that this restores
    /// a *start-of-sequence* position only; resuming an arbitrary mid-stream
    /// point requires a full snapshot (see [`SecureRngSnapshot`]).
    ///
    /// [`SecureRngSnapshot`]: crate::SecureRngSnapshot
    pub fn set_seed(&mut self, seed: u32) {
        self.current_seed = seed;
        self.isaac_seed(seed);
    }

    /// Expand `seed` into the full generator state.
    ///
    /// Fills the batch buffer by repeated xor-shift/multiply with the
    /// golden-ratio constant, derives the accumulators from the seed, then
    /// runs one warm-up mix round so the first served batch is not the raw
    /// expansion.
    fn isaac_seed(&mut self, seed: u32) {
        let mut word = seed;
        for slot in self.buffer.iter_mut() {
            word ^= word >> 15;
            word = word.wrapping_mul(GOLDEN_RATIO);
            *slot = word;
        }

        self.acc_a = seed;
        self.acc_b = seed ^ GOLDEN_RATIO;
        self.acc_c = seed ^ GOLDEN_RATIO;

        // Warm-up: overwrite the raw expansion before serving any words
        self.mix_round();
        self.cursor = BATCH_WORDS;
    }

    /// One full mix pass over the batch, producing 256 fresh words.
    fn mix_round(&mut self) {
        self.acc_b = self.acc_b.wrapping_add(self.acc_c).wrapping_add(1);
        self.acc_c = self.acc_c.wrapping_add(1);

        for i in 0..BATCH_WORDS {
            self.acc_a = match i % 4 {
                0 => self.acc_a ^ (self.acc_a << 13),
                1 => self.acc_a ^ (self.acc_a >> 6),
                2 => self.acc_a ^ (self.acc_a << 2),
                _ => self.acc_a ^ (self.acc_a >> 16),
            };

            let y = self.buffer[(i + 128) % BATCH_WORDS]
                .wrapping_add(self.acc_a)
                .wrapping_add(self.acc_b);
            self.buffer[i] = y;

            self.acc_b = self.buffer[(y >> 2) as usize % BATCH_WORDS]
                .wrapping_add(self.acc_a)
                .wrapping_add(self.acc_b);
        }
    }

    /// Draw the next 32-bit word, re-mixing the batch when it is exhausted.
    ///
    /// The empty→loaded transition happens entirely inside this call; callers
    /// never observe a partial batch.
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor == 0 {
            self.mix_round();
            self.cursor = BATCH_WORDS;
        }
        self.cursor -= 1;
        self.iterations += 1;
        self.buffer[self.cursor]
    }

    /// Draw one byte (low 8 bits of a full word draw).
    fn next_byte(&mut self) -> u8 {
        (self.next_u32() & 0xFF) as u8
    }

    /// Draw `length` bytes as a lowercase hex string of `2 * length` chars.
    ///
    /// # Example
    /// ```
    /// use seeded_random_core_rs::SecureRng;
    ///
    /// let mut rng = SecureRng::new(7);
    /// let hex = rng.next_hex(4);
    /// assert_eq!(hex.len(), 8);
    /// ```
    pub fn next_hex(&mut self, length: usize) -> String {
        let mut hex = String::with_capacity(length * 2);
        for _ in 0..length {
            hex.push_str(&format!("{:02x}", self.next_byte()));
        }
        hex
    }

    /// Draw exactly `length` bytes.
    pub fn next_bytes(&mut self, length: usize) -> Vec<u8> {
        (0..length).map(|_| self.next_byte()).collect()
    }

    /// Draw `length` bytes and encode them as standard padded Base64.
    pub fn next_base64(&mut self, length: usize) -> String {
        BASE64_STANDARD.encode(self.next_bytes(length))
    }

    /// Draw a version-4 UUID from 16 generator bytes.
    ///
    /// The version nibble and RFC 4122 variant bits are forced onto the
    /// drawn bytes; the remaining 122 bits come straight from the stream.
    pub fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        for byte in bytes.iter_mut() {
            *byte = self.next_byte();
        }
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

impl RandomSource for SecureRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    fn fork(&mut self) -> Self {
        let seed = self.next_int(0, u32::MAX as i64);
        Self::new(seed as u32)
    }

    fn reset(&mut self) {
        self.current_seed = self.initial_seed;
        self.iterations = 0;
        self.isaac_seed(self.initial_seed);
    }

    fn stats(&self) -> RngStats {
        RngStats {
            initial_seed: u64::from(self.initial_seed),
            current_seed: u64::from(self.current_seed),
            iterations: self.iterations,
        }
    }
}

//! Deterministic random number generation for computer-controlled seats.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Each computer seat gets its own independent stream
//! - **Owned**: No process-wide seeding; the source is threaded through
//!   construction so move selection can be tested with a fixed seed
//!
//! ```
//! use numbers_royale::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut cpu_rng = rng.fork();
//!
//! let roll = cpu_rng.gen_range_inclusive(1..=9);
//! assert!((1..=9).contains(&roll));
//!
//! // Forks are deterministic - same seed, same fork counter, same stream
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(again.seed(), cpu_rng.seed());
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for independent seat streams.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniformly distributed integer in `range` (both ends included).
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

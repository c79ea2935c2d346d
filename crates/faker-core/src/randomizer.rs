//! The narrow randomness capability every generator draws from.
//!
//! Consumers only ever see [`Randomizer`], so the engine behind it can be
//! swapped: 32-bit or 53-bit Mersenne Twister output, a `ChaCha8` stream, or
//! a test double.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SeedError;
use crate::mersenne::MersenneTwister19937;
use crate::seed::SeedValue;

/// A source of uniformly distributed floats in `[0, 1)`.
///
/// Implementations mutate internal state on every call and are therefore
/// not meant to be shared between threads without an owner.
pub trait Randomizer: Send {
    /// Returns the next value in `[0, 1)`.
    fn next(&mut self) -> f64;

    /// Reinitialises the stream from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the seed shape is invalid; the current
    /// stream must remain usable in that case.
    fn seed(&mut self, seed: &SeedValue) -> Result<(), SeedError>;
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next(&mut self) -> f64 {
        (**self).next()
    }

    fn seed(&mut self, seed: &SeedValue) -> Result<(), SeedError> {
        (**self).seed(seed)
    }
}

/// Randomizer backed by [`MersenneTwister19937::next_f32`].
///
/// One engine word per value.
#[derive(Debug)]
pub struct Mersenne32Randomizer {
    twister: MersenneTwister19937,
}

impl Mersenne32Randomizer {
    /// Creates a randomizer seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            twister: MersenneTwister19937::from_entropy(),
        }
    }

    /// Creates a randomizer seeded with a scalar.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            twister: MersenneTwister19937::with_seed(seed),
        }
    }
}

impl Default for Mersenne32Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for Mersenne32Randomizer {
    fn next(&mut self) -> f64 {
        self.twister.next_f32()
    }

    fn seed(&mut self, seed: &SeedValue) -> Result<(), SeedError> {
        self.twister.seed(seed)
    }
}

/// Randomizer backed by [`MersenneTwister19937::next_f53`].
///
/// Two engine words per value; this is the facade's default.
///
/// # Example
///
/// ```
/// use faker_core::{Mersenne53Randomizer, Randomizer, SeedValue};
///
/// let mut randomizer = Mersenne53Randomizer::with_seed(42);
/// let first = randomizer.next();
///
/// randomizer.seed(&SeedValue::Scalar(42)).expect("valid seed");
/// assert_eq!(randomizer.next(), first);
/// ```
#[derive(Debug)]
pub struct Mersenne53Randomizer {
    twister: MersenneTwister19937,
}

impl Mersenne53Randomizer {
    /// Creates a randomizer seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            twister: MersenneTwister19937::from_entropy(),
        }
    }

    /// Creates a randomizer seeded with a scalar.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            twister: MersenneTwister19937::with_seed(seed),
        }
    }
}

impl Default for Mersenne53Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for Mersenne53Randomizer {
    fn next(&mut self) -> f64 {
        self.twister.next_f53()
    }

    fn seed(&mut self, seed: &SeedValue) -> Result<(), SeedError> {
        self.twister.seed(seed)
    }
}

/// Randomizer backed by a `ChaCha8` stream cipher.
///
/// Streams are deterministic per seed but unrelated to the Mersenne
/// Twister streams for the same seed.
#[derive(Debug)]
pub struct ChaChaRandomizer {
    rng: ChaCha8Rng,
}

impl ChaChaRandomizer {
    /// Creates a randomizer seeded with a scalar.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
        }
    }
}

impl Randomizer for ChaChaRandomizer {
    fn next(&mut self) -> f64 {
        // `StandardUniform` for f64 yields 53 bits in [0, 1).
        self.rng.random::<f64>()
    }

    fn seed(&mut self, seed: &SeedValue) -> Result<(), SeedError> {
        seed.validate()?;
        self.rng = match seed {
            SeedValue::Scalar(value) => ChaCha8Rng::seed_from_u64(u64::from(*value)),
            SeedValue::Vector(words) => ChaCha8Rng::from_seed(chacha_key(words)),
        };
        Ok(())
    }
}

/// Folds a seed vector of any length into a 32-byte `ChaCha` key.
///
/// Word `i` lands in key slot `i % 8`, rotated by its lap so repeated words
/// do not cancel out.
#[expect(
    clippy::little_endian_bytes,
    reason = "the key layout must be identical on every host"
)]
fn chacha_key(words: &[u32]) -> [u8; 32] {
    let mut slots = [0_u32; 8];
    for (lap, chunk) in (0_u32..).zip(words.chunks(slots.len())) {
        for (slot, word) in slots.iter_mut().zip(chunk) {
            *slot ^= word.rotate_left(lap.wrapping_mul(7));
        }
    }
    let mut key = [0_u8; 32];
    for (bytes, slot) in key.chunks_exact_mut(4).zip(slots) {
        bytes.copy_from_slice(&slot.to_le_bytes());
    }
    key
}

//! MT19937 Mersenne Twister engine.
//!
//! The engine owns its 624-word state array and a cursor into it. Every draw
//! and every reseed mutates that state, so an engine must never be shared
//! between call sites that run concurrently; `&mut self` on every method
//! makes that explicit.
//!
//! The output stream is bit-exact with the reference `mt19937ar.c`
//! implementation for both `init_genrand` (scalar) and `init_by_array`
//! (vector) seeding.

use std::fmt;

use rand::RngCore;
use rand::rand_core::impls::{fill_bytes_via_next, next_u64_via_u32};

use crate::error::SeedError;
use crate::seed::{Seed, SeedValue};

/// Number of words in the state array.
const N: usize = 624;
/// Offset of the middle word used by the twist.
const M: usize = 397;
/// Constant vector `a` of the twist.
const MATRIX_A: u32 = 0x9908_b0df;
/// Most significant bit mask.
const UPPER_MASK: u32 = 0x8000_0000;
/// Least significant 31 bits mask.
const LOWER_MASK: u32 = 0x7fff_ffff;
/// Fixed seed `init_by_array` starts from.
const ARRAY_INIT_SEED: u32 = 19_650_218;

/// `2^-32`, exact in `f64`.
const INV_2_POW_32: f64 = 1.0 / 4_294_967_296.0;
/// `2^26`, exact in `f64`.
const TWO_POW_26: f64 = 67_108_864.0;
/// `2^-53`, exact in `f64`.
const INV_2_POW_53: f64 = 1.0 / 9_007_199_254_740_992.0;

/// A 32-bit Mersenne Twister with period `2^19937 - 1`.
///
/// # Example
///
/// ```
/// use faker_core::MersenneTwister19937;
///
/// let mut twister = MersenneTwister19937::with_seed(5489);
/// assert_eq!(twister.next_u32(), 3_499_211_612);
///
/// let value = twister.next_f53();
/// assert!((0.0..1.0).contains(&value));
/// ```
pub struct MersenneTwister19937 {
    state: [u32; N],
    cursor: usize,
}

impl MersenneTwister19937 {
    /// Creates an engine initialised from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptySeedVector`] for an empty seed vector.
    pub fn new(seed: Seed) -> Result<Self, SeedError> {
        let mut twister = Self::blank();
        twister.seed(&seed.into_value())?;
        Ok(twister)
    }

    /// Creates an engine seeded from system entropy.
    ///
    /// The resulting stream is not reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_seed(crate::seed::random_seed())
    }

    /// Creates an engine seeded with a scalar.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        let mut twister = Self::blank();
        twister.seed_scalar(seed);
        twister
    }

    /// Creates an engine seeded with a seed vector.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptySeedVector`] if `key` is empty.
    pub fn with_seed_vector(key: &[u32]) -> Result<Self, SeedError> {
        let mut twister = Self::blank();
        twister.seed_vector(key)?;
        Ok(twister)
    }

    const fn blank() -> Self {
        Self {
            state: [0; N],
            cursor: N,
        }
    }

    /// Reinitialises the state from `seed`, discarding buffered words.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptySeedVector`] for an empty vector; the
    /// existing state is left untouched in that case.
    pub fn seed(&mut self, seed: &SeedValue) -> Result<(), SeedError> {
        match seed {
            SeedValue::Scalar(value) => {
                self.seed_scalar(*value);
                Ok(())
            }
            SeedValue::Vector(key) => self.seed_vector(key),
        }
    }

    /// Reinitialises the state from a scalar (`init_genrand`).
    pub fn seed_scalar(&mut self, seed: u32) {
        let mut previous = seed;
        for (index, slot) in (0_u32..).zip(self.state.iter_mut()) {
            if index > 0 {
                previous = 1_812_433_253_u32
                    .wrapping_mul(previous ^ (previous >> 30))
                    .wrapping_add(index);
            }
            *slot = previous;
        }
        self.cursor = N;
    }

    /// Reinitialises the state from a seed vector (`init_by_array`).
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptySeedVector`] if `key` is empty; the
    /// existing state is left untouched in that case.
    #[expect(
        clippy::indexing_slicing,
        reason = "i and j are wrapped before they can leave their arrays"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the key offset is mixed in modulo 2^32 by the reference algorithm"
    )]
    pub fn seed_vector(&mut self, key: &[u32]) -> Result<(), SeedError> {
        if key.is_empty() {
            return Err(SeedError::EmptySeedVector);
        }

        self.seed_scalar(ARRAY_INIT_SEED);
        let mut i = 1_usize;
        let mut j = 0_usize;

        for _ in 0..N.max(key.len()) {
            let previous = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (previous ^ (previous >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                self.state[0] = self.state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..N - 1 {
            let previous = self.state[i - 1];
            self.state[i] = (self.state[i]
                ^ (previous ^ (previous >> 30)).wrapping_mul(1_566_083_941))
            .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                self.state[0] = self.state[N - 1];
                i = 1;
            }
        }

        // MSB is 1, assuring a non-zero initial array.
        self.state[0] = UPPER_MASK;
        self.cursor = N;
        Ok(())
    }

    /// Regenerates all 624 words of the state.
    #[expect(
        clippy::indexing_slicing,
        reason = "indices are reduced modulo the fixed state length"
    )]
    fn twist(&mut self) {
        for kk in 0..N {
            let y = (self.state[kk] & UPPER_MASK) | (self.state[(kk + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.state[kk] = self.state[(kk + M) % N] ^ (y >> 1) ^ mag;
        }
        self.cursor = 0;
    }

    /// Returns the next tempered 32-bit word.
    #[expect(
        clippy::indexing_slicing,
        reason = "the cursor is below N after a twist"
    )]
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= N {
            self.twist();
        }
        let mut y = self.state[self.cursor];
        self.cursor += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Returns a float in `[0, 1)` with 32 bits of precision.
    pub fn next_f32(&mut self) -> f64 {
        f32_from_u32(self.next_u32())
    }

    /// Returns a float in `[0, 1)` with 53 bits of precision.
    ///
    /// Consumes two words per call.
    pub fn next_f53(&mut self) -> f64 {
        let high = self.next_u32();
        let low = self.next_u32();
        f53_from_u32_pair(high, low)
    }
}

impl fmt::Debug for MersenneTwister19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister19937")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl RngCore for MersenneTwister19937 {
    fn next_u32(&mut self) -> u32 {
        Self::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes_via_next(self, dst);
    }
}

/// Maps a 32-bit word onto `[0, 1)` as `word / 2^32`.
///
/// `0` maps to exactly `0.0` and `u32::MAX` to `(2^32 - 1) / 2^32`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "scaling by an exact power of two keeps the mapping bit-exact"
)]
pub fn f32_from_u32(word: u32) -> f64 {
    f64::from(word) * INV_2_POW_32
}

/// Combines two words into a 53-bit float in `[0, 1)`.
///
/// The top 27 bits of `high` and the top 26 bits of `low` form the mantissa;
/// two `u32::MAX` words map to `1 - 2^-53`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "every intermediate is an integer below 2^53 and exact in f64"
)]
pub fn f53_from_u32_pair(high: u32, low: u32) -> f64 {
    let a = f64::from(high >> 5);
    let b = f64::from(low >> 6);
    (a * TWO_POW_26 + b) * INV_2_POW_53
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn reference_scalar_seed_matches_first_outputs() {
        let mut twister = MersenneTwister19937::with_seed(5489);
        let drawn: Vec<u32> = (0..5).map(|_| twister.next_u32()).collect();
        assert_eq!(
            drawn,
            [3_499_211_612, 581_869_302, 3_890_346_734, 3_586_334_585, 545_404_204]
        );
    }

    #[test]
    fn reference_scalar_seed_matches_ten_thousandth_output() {
        let mut twister = MersenneTwister19937::with_seed(5489);
        for _ in 0..9_999 {
            twister.next_u32();
        }
        assert_eq!(twister.next_u32(), 4_123_659_995);
    }

    #[test]
    fn reference_array_seed_matches_first_outputs() {
        let mut twister =
            MersenneTwister19937::with_seed_vector(&[0x123, 0x234, 0x345, 0x456]).expect("seed");
        let drawn: Vec<u32> = (0..5).map(|_| twister.next_u32()).collect();
        assert_eq!(
            drawn,
            [1_067_595_299, 955_945_823, 477_289_528, 4_107_218_783, 4_228_976_476]
        );
    }

    #[test]
    fn can_return_zero_on_sixth_draw() {
        let mut twister = MersenneTwister19937::with_seed(257_678_572);
        for _ in 0..5 {
            twister.next_u32();
        }
        assert_eq!(twister.next_u32(), 0);
    }

    #[test]
    fn can_return_max_word_on_first_draw() {
        let mut twister = MersenneTwister19937::with_seed(2_855_577_693);
        assert_eq!(twister.next_u32(), u32::MAX);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(u32::MAX, 0.999_999_999_767_169_4)]
    fn f32_mapping_hits_exact_bounds(#[case] word: u32, #[case] expected: f64) {
        assert_eq!(f32_from_u32(word).to_bits(), expected.to_bits());
    }

    #[test]
    fn f53_mapping_hits_exact_bounds() {
        assert_eq!(f53_from_u32_pair(0, 0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(
            f53_from_u32_pair(u32::MAX, u32::MAX).to_bits(),
            (1.0_f64 - f64::EPSILON / 2.0).to_bits()
        );
        assert!(f53_from_u32_pair(u32::MAX, u32::MAX) < 1.0);
    }

    #[test]
    fn zero_seed_does_not_degenerate() {
        let mut twister = MersenneTwister19937::with_seed(0);
        let drawn: Vec<u32> = (0..8).map(|_| twister.next_u32()).collect();
        assert!(drawn.iter().any(|word| *word != 0));
        assert!(drawn.windows(2).any(|pair| pair.first() != pair.last()));
    }

    #[test]
    fn reseeding_discards_buffered_words() {
        let mut reused = MersenneTwister19937::with_seed(1);
        reused.next_u32();
        reused.seed_scalar(1);

        let mut fresh = MersenneTwister19937::with_seed(1);
        assert_eq!(reused.next_u32(), fresh.next_u32());
    }

    #[test]
    fn rejected_vector_keeps_previous_stream() {
        let mut twister = MersenneTwister19937::with_seed(42);
        let mut reference = MersenneTwister19937::with_seed(42);
        twister.next_u32();
        reference.next_u32();

        let result = twister.seed(&SeedValue::Vector(vec![]));

        assert_eq!(result, Err(SeedError::EmptySeedVector));
        assert_eq!(twister.next_u32(), reference.next_u32());
    }

    #[test]
    fn scalar_and_single_element_vector_differ() {
        let mut scalar = MersenneTwister19937::with_seed(42);
        let mut vector = MersenneTwister19937::with_seed_vector(&[42]).expect("seed");
        assert_ne!(scalar.next_u32(), vector.next_u32());
    }

    #[test]
    fn new_with_entropy_returns_engine() {
        let mut twister = MersenneTwister19937::new(Seed::FromEntropy).expect("entropy seed");
        let value = twister.next_f32();
        assert!((0.0..1.0).contains(&value));
    }

    #[test]
    fn rng_core_next_u64_combines_two_words() {
        let mut words = MersenneTwister19937::with_seed(9);
        let low = u64::from(words.next_u32());
        let high = u64::from(words.next_u32());

        let mut rng = MersenneTwister19937::with_seed(9);
        assert_eq!(RngCore::next_u64(&mut rng), (high << 32) | low);
    }
}

//! Seed types shared by engines, randomizers, and the facade.
//!
//! A [`Seed`] separates the reproducible path ([`Seed::Explicit`]) from the
//! non-reproducible one ([`Seed::FromEntropy`]) so tests can never mistake
//! one for the other.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// A concrete seed value: one word or an ordered vector of words.
///
/// Scalar and vector seeds run different initialisation procedures, so
/// `Scalar(7)` and `Vector(vec![7])` produce different streams.
///
/// # Example
///
/// ```
/// use faker_core::SeedValue;
///
/// let scalar = SeedValue::from(42_u32);
/// let vector = SeedValue::from(vec![42_u32, 1, 2]);
///
/// assert_ne!(scalar, vector);
/// assert_eq!(vector.to_string(), "[42, 1, 2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// A single 32-bit seed.
    Scalar(u32),
    /// An ordered, non-empty sequence of 32-bit seeds.
    Vector(Vec<u32>),
}

impl SeedValue {
    /// Checks the seed shape before any engine state is touched.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptySeedVector`] for an empty vector.
    pub fn validate(&self) -> Result<(), SeedError> {
        match self {
            Self::Vector(words) if words.is_empty() => Err(SeedError::EmptySeedVector),
            Self::Scalar(_) | Self::Vector(_) => Ok(()),
        }
    }
}

impl From<u32> for SeedValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<u32>> for SeedValue {
    fn from(words: Vec<u32>) -> Self {
        Self::Vector(words)
    }
}

impl From<&[u32]> for SeedValue {
    fn from(words: &[u32]) -> Self {
        Self::Vector(words.to_vec())
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Vector(words) => {
                f.write_str("[")?;
                for (index, word) in words.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{word}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// How an engine should be (re)initialised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Seed {
    /// Reproducible initialisation from the given value.
    Explicit(SeedValue),
    /// Non-reproducible initialisation from system entropy.
    #[default]
    FromEntropy,
}

impl Seed {
    /// Resolves the seed into the concrete value that will be applied.
    ///
    /// Entropy seeds draw a fresh scalar on every call.
    #[must_use]
    pub fn into_value(self) -> SeedValue {
        match self {
            Self::Explicit(value) => value,
            Self::FromEntropy => SeedValue::Scalar(random_seed()),
        }
    }

    /// Returns `true` if this seed reproduces the same stream every time.
    #[must_use]
    pub const fn is_deterministic(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self::Explicit(SeedValue::Scalar(value))
    }
}

impl From<Vec<u32>> for Seed {
    fn from(words: Vec<u32>) -> Self {
        Self::Explicit(SeedValue::Vector(words))
    }
}

impl From<SeedValue> for Seed {
    fn from(value: SeedValue) -> Self {
        Self::Explicit(value)
    }
}

/// Draws a random scalar seed from the thread-local entropy source.
#[must_use]
pub fn random_seed() -> u32 {
    rand::rng().random()
}

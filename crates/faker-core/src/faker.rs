//! The seeded facade every generator goes through.
//!
//! A [`Faker`] owns exactly one [`Randomizer`] and one [`LocaleStack`].
//! Generators obtain randomness and data only through it, so one
//! [`Faker::seed`] call determines every value produced afterwards.
//!
//! A `Faker` is not meant to be driven from several threads at once: every
//! draw needs `&mut self`. Give each thread or task its own instance and
//! seed; the locale stack itself can be shared.

use std::fmt;

use tracing::debug;

use crate::error::{FakerError, ResolveError};
use crate::locale::{LocaleMetadata, LocalePath, LocaleStack, LocaleValue};
use crate::modules::{HelpersModule, NumberModule};
use crate::randomizer::{Mersenne53Randomizer, Randomizer};
use crate::seed::{Seed, SeedValue};

/// Seeding state of a facade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeedState {
    /// Initialised from entropy at construction; not reproducible.
    #[default]
    Unseeded,
    /// Seeded from an explicitly supplied value.
    Explicit(SeedValue),
    /// Seeded from a value drawn from entropy and reported to the caller.
    Entropy(SeedValue),
}

impl SeedState {
    /// Returns the seed last applied, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&SeedValue> {
        match self {
            Self::Unseeded => None,
            Self::Explicit(value) | Self::Entropy(value) => Some(value),
        }
    }

    /// Returns `true` only for explicitly supplied seeds.
    #[must_use]
    pub const fn is_deterministic(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

/// Seeded fake-data facade over a locale stack.
///
/// # Example
///
/// ```
/// use faker_core::{Faker, LocaleDefinition, LocalePath, LocaleStack};
///
/// let base = LocaleDefinition::new("base").with_entry("color", "human", ["red", "green", "blue"]);
/// let stack = LocaleStack::new(vec![base]).expect("non-empty stack");
/// let mut faker = Faker::new(stack);
/// let path = LocalePath::parse("color.human").expect("valid path");
///
/// faker.seed(42_u32).expect("valid seed");
/// let first = faker.helpers().from_definition(&path).expect("resolved");
///
/// faker.seed(42_u32).expect("valid seed");
/// let second = faker.helpers().from_definition(&path).expect("resolved");
///
/// assert_eq!(first, second);
/// ```
pub struct Faker {
    pub(crate) locale: LocaleStack,
    pub(crate) randomizer: Box<dyn Randomizer>,
    seed_state: SeedState,
}

impl Faker {
    /// Creates an unseeded facade with the default 53-bit randomizer.
    #[must_use]
    pub fn new(locale: LocaleStack) -> Self {
        Self {
            locale,
            randomizer: Box::new(Mersenne53Randomizer::new()),
            seed_state: SeedState::Unseeded,
        }
    }

    /// Starts building a facade with custom options.
    #[must_use]
    pub fn builder() -> FakerBuilder {
        FakerBuilder::default()
    }

    /// Reseeds the randomizer in place and returns the seed actually used.
    ///
    /// [`Seed::FromEntropy`] draws a fresh scalar and returns it, so the
    /// run can be reproduced later by seeding with that value.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::Seed`] for an invalid seed; the facade keeps its
    /// previous stream and state in that case.
    pub fn seed(&mut self, seed: impl Into<Seed>) -> Result<SeedValue, FakerError> {
        let seed = seed.into();
        let deterministic = seed.is_deterministic();
        let value = seed.into_value();
        self.randomizer.seed(&value)?;

        debug!(seed = %value, deterministic, "faker reseeded");
        self.seed_state = if deterministic {
            SeedState::Explicit(value.clone())
        } else {
            SeedState::Entropy(value.clone())
        };
        Ok(value)
    }

    /// Returns the current seeding state.
    #[must_use]
    pub const fn seed_state(&self) -> &SeedState {
        &self.seed_state
    }

    /// Returns the facade's only randomizer.
    pub fn randomizer(&mut self) -> &mut dyn Randomizer {
        self.randomizer.as_mut()
    }

    /// Returns the locale stack backing this facade.
    #[must_use]
    pub const fn definitions(&self) -> &LocaleStack {
        &self.locale
    }

    /// Resolves `path` against the locale stack.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if no layer defines the path or the winning
    /// layer marks it as not applicable.
    pub fn resolve(&self, path: &LocalePath) -> Result<&LocaleValue, ResolveError> {
        self.locale.resolve(path)
    }

    /// Returns the metadata of the most specific locale, with gaps filled
    /// from lower layers.
    #[must_use]
    pub fn metadata(&self) -> LocaleMetadata {
        self.locale.metadata()
    }

    /// Number generation backed by the seeded randomizer.
    pub fn number(&mut self) -> NumberModule<'_> {
        NumberModule::new(self)
    }

    /// Selection helpers over explicit lists and locale definitions.
    pub fn helpers(&mut self) -> HelpersModule<'_> {
        HelpersModule::new(self)
    }
}

impl fmt::Debug for Faker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Faker")
            .field("locale", &self.locale.codes())
            .field("seed_state", &self.seed_state)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Faker`] with an optional randomizer and initial seed.
///
/// # Example
///
/// ```
/// use faker_core::{Faker, LocaleDefinition, LocaleStack, Mersenne32Randomizer, SeedValue};
///
/// let stack = LocaleStack::new(vec![LocaleDefinition::new("base")]).expect("stack");
/// let faker = Faker::builder()
///     .locale(stack)
///     .randomizer(Box::new(Mersenne32Randomizer::new()))
///     .seed(1337_u32)
///     .build()
///     .expect("faker builds");
///
/// assert_eq!(faker.seed_state().value(), Some(&SeedValue::Scalar(1337)));
/// ```
#[derive(Default)]
pub struct FakerBuilder {
    locale: Option<LocaleStack>,
    randomizer: Option<Box<dyn Randomizer>>,
    seed: Option<Seed>,
}

impl FakerBuilder {
    /// Sets the locale stack.
    #[must_use]
    pub fn locale(mut self, locale: LocaleStack) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Replaces the default 53-bit Mersenne Twister randomizer.
    #[must_use]
    pub fn randomizer(mut self, randomizer: Box<dyn Randomizer>) -> Self {
        self.randomizer = Some(randomizer);
        self
    }

    /// Seeds the facade as part of construction.
    #[must_use]
    pub fn seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Builds the facade.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::MissingLocale`] without a locale stack, or
    /// [`FakerError::Seed`] if the initial seed is invalid.
    pub fn build(self) -> Result<Faker, FakerError> {
        let locale = self.locale.ok_or(FakerError::MissingLocale)?;
        let randomizer = self
            .randomizer
            .unwrap_or_else(|| Box::new(Mersenne53Randomizer::new()));
        let mut faker = Faker {
            locale,
            randomizer,
            seed_state: SeedState::Unseeded,
        };
        if let Some(seed) = self.seed {
            faker.seed(seed)?;
        }
        Ok(faker)
    }
}

impl fmt::Debug for FakerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakerBuilder")
            .field("locale", &self.locale)
            .field("custom_randomizer", &self.randomizer.is_some())
            .field("seed", &self.seed)
            .finish()
    }
}

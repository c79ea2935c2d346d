//! Seeded random engine and layered locale resolution for deterministic
//! fake data.
//!
//! This crate holds the two pieces every fake-data generator depends on:
//! a bit-exact pseudo-random stream that one seed fully determines, and the
//! lookup that finds locale data across a stack of more and less specific
//! locales. Word lists and value formatting live with the callers.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - An MT19937 engine with scalar and vector seeding
//! - A [`Randomizer`] abstraction with 32-bit, 53-bit, and `ChaCha8`
//!   adapters
//! - Locale layers loaded from JSON, stacked in descending precedence
//! - A [`Faker`] facade whose single `seed` call fixes every later value
//!
//! # Example
//!
//! ```
//! use faker_core::{Faker, LocaleDefinition, LocalePath, LocaleStack};
//!
//! let en_au = LocaleDefinition::from_json(r#"{
//!     "metadata": {"code": "en_AU"},
//!     "person": {"last_name": ["Nguyen", "Smith"]}
//! }"#).expect("valid locale");
//! let base = LocaleDefinition::from_json(r#"{
//!     "metadata": {"code": "base"},
//!     "color": {"space": "sRGB"}
//! }"#).expect("valid locale");
//!
//! let stack = LocaleStack::new(vec![en_au, base]).expect("non-empty stack");
//! let mut faker = Faker::new(stack);
//! faker.seed(42_u32).expect("valid seed");
//!
//! let last_name = LocalePath::parse("person.last_name").expect("valid path");
//! let name = faker.helpers().from_definition(&last_name).expect("resolved");
//! assert!(name == "Nguyen" || name == "Smith");
//! ```

mod error;
mod faker;
mod locale;
mod mersenne;
mod modules;
mod randomizer;
pub mod resolve_cli;
mod seed;

pub use error::{FakerError, LocaleError, ResolveError, SeedError};
pub use faker::{Faker, FakerBuilder, SeedState};
pub use locale::{
    LocaleDefinition, LocaleGenerator, LocaleMetadata, LocalePath, LocaleStack, LocaleValue,
    TextDirection,
};
pub use mersenne::{MersenneTwister19937, f32_from_u32, f53_from_u32_pair};
pub use modules::{HelpersModule, NumberModule};
pub use randomizer::{ChaChaRandomizer, Mersenne32Randomizer, Mersenne53Randomizer, Randomizer};
pub use seed::{Seed, SeedValue, random_seed};

//! Generation modules layered on the facade.
//!
//! These modules borrow the [`Faker`](crate::Faker) mutably for the duration
//! of a call chain and draw from its single randomizer and locale stack.

mod helpers;
mod number;

pub use helpers::HelpersModule;
pub use number::NumberModule;

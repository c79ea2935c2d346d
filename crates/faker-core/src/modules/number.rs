//! Integer and float generation from the seeded stream.

use crate::error::FakerError;
use crate::faker::Faker;
use crate::randomizer::Randomizer;

/// Number generators bound to one facade.
///
/// # Example
///
/// ```
/// use faker_core::{Faker, LocaleDefinition, LocaleStack};
///
/// let stack = LocaleStack::new(vec![LocaleDefinition::new("base")]).expect("stack");
/// let mut faker = Faker::new(stack);
/// faker.seed(42_u32).expect("seed");
///
/// let roll = faker.number().int(1, 6).expect("valid range");
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug)]
pub struct NumberModule<'a> {
    faker: &'a mut Faker,
}

impl<'a> NumberModule<'a> {
    pub(crate) const fn new(faker: &'a mut Faker) -> Self {
        Self { faker }
    }

    /// Returns an integer in `min..=max`.
    ///
    /// No value is drawn when `min == max`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::InvalidRange`] if `max < min`.
    pub fn int(&mut self, min: i64, max: i64) -> Result<i64, FakerError> {
        int_in_range(self.faker.randomizer.as_mut(), min, max)
    }

    /// Returns a float in `min..max`, or `min` when the bounds are equal.
    ///
    /// Ranges wider than `f64::MAX` are scaled without forming the span, and
    /// a result rounded up onto `max` is pulled back below it.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::InvalidRange`] if `max < min` or either bound is
    /// not finite.
    #[expect(
        clippy::float_arithmetic,
        reason = "scaling a unit draw onto the requested range"
    )]
    pub fn float(&mut self, min: f64, max: f64) -> Result<f64, FakerError> {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(FakerError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let real = self.faker.randomizer.next();
        let span = max - min;
        let value = if span.is_finite() {
            real * span + min
        } else {
            min + real * max - real * min
        };
        if value >= max && min < max {
            return Ok(max.next_down().max(min));
        }
        Ok(value)
    }
}

/// Maps one draw onto `min..=max` as `floor(real * span) + min`.
#[expect(
    clippy::float_arithmetic,
    reason = "scaling a unit draw onto the requested range"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "spans beyond 2^53 lose low bits, matching the draw's precision"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the floored product is below the span, which fits in i128"
)]
pub(crate) fn int_in_range(
    randomizer: &mut dyn Randomizer,
    min: i64,
    max: i64,
) -> Result<i64, FakerError> {
    if max < min {
        return Err(FakerError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    if max == min {
        return Ok(min);
    }

    let span = i128::from(max) - i128::from(min) + 1;
    let offset = (randomizer.next() * span as f64).floor() as i128;
    let value = i128::from(min) + offset;
    Ok(i64::try_from(value).map_or(max, |v| v.min(max)))
}

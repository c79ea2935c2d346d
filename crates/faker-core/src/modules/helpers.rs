//! Selection helpers over explicit lists and resolved locale data.

use crate::error::{FakerError, ResolveError};
use crate::faker::Faker;
use crate::locale::{LocalePath, LocaleValue};
use crate::modules::number::int_in_range;
use crate::randomizer::Randomizer;

/// Selection helpers bound to one facade.
#[derive(Debug)]
pub struct HelpersModule<'a> {
    faker: &'a mut Faker,
}

impl<'a> HelpersModule<'a> {
    pub(crate) const fn new(faker: &'a mut Faker) -> Self {
        Self { faker }
    }

    /// Picks one element of `items`.
    ///
    /// A single-element slice is returned without drawing.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::EmptySelection`] if `items` is empty.
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
    /// let pick = faker.helpers().array_element(&["a", "b", "c"]).expect("non-empty");
    /// assert!(["a", "b", "c"].contains(pick));
    /// ```
    pub fn array_element<'t, T>(&mut self, items: &'t [T]) -> Result<&'t T, FakerError> {
        pick(self.faker.randomizer.as_mut(), items)
    }

    /// Produces one value for `path` from the locale stack.
    ///
    /// Lists yield one random entry, text is returned as-is, and generators
    /// are run against the facade's randomizer.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::Resolve`] if the path cannot be resolved or
    /// resolves to an object.
    pub fn from_definition(&mut self, path: &LocalePath) -> Result<String, FakerError> {
        let Faker {
            locale, randomizer, ..
        } = &mut *self.faker;

        match locale.resolve(path)? {
            LocaleValue::List(items) => pick(randomizer.as_mut(), items).cloned(),
            LocaleValue::Text(text) => Ok(text.clone()),
            LocaleValue::Generator(generator) => Ok(generator.generate(randomizer.as_mut())),
            other @ (LocaleValue::Object(_) | LocaleValue::NotApplicable) => {
                Err(ResolveError::UnexpectedShape {
                    path: path.to_string(),
                    expected: "a list, text, or a generator",
                    found: other.shape(),
                }
                .into())
            }
        }
    }
}

fn pick<'t, T>(randomizer: &mut dyn Randomizer, items: &'t [T]) -> Result<&'t T, FakerError> {
    let last = items
        .len()
        .checked_sub(1)
        .and_then(|last| i64::try_from(last).ok())
        .ok_or(FakerError::EmptySelection)?;
    let index = if last == 0 {
        0
    } else {
        int_in_range(randomizer, 0, last)?
    };
    usize::try_from(index)
        .ok()
        .and_then(|position| items.get(position))
        .ok_or(FakerError::EmptySelection)
}

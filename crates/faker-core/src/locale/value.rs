//! Values stored in a locale layer.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::randomizer::Randomizer;

/// A function-valued locale entry.
///
/// Generators receive the facade's randomizer so they stay on the seeded
/// stream. They can only be supplied programmatically.
///
/// # Example
///
/// ```
/// use faker_core::{LocaleGenerator, Mersenne53Randomizer, Randomizer};
///
/// let generator = LocaleGenerator::new(|randomizer: &mut dyn Randomizer| {
///     if randomizer.next() < 0.5 { "heads".to_owned() } else { "tails".to_owned() }
/// });
///
/// let mut randomizer = Mersenne53Randomizer::with_seed(7);
/// let side = generator.generate(&mut randomizer);
/// assert!(side == "heads" || side == "tails");
/// ```
#[derive(Clone)]
pub struct LocaleGenerator(Arc<dyn Fn(&mut dyn Randomizer) -> String + Send + Sync>);

impl LocaleGenerator {
    /// Wraps a generator function.
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn(&mut dyn Randomizer) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(generator))
    }

    /// Runs the generator against `randomizer`.
    pub fn generate(&self, randomizer: &mut dyn Randomizer) -> String {
        (self.0)(randomizer)
    }
}

impl fmt::Debug for LocaleGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LocaleGenerator(..)")
    }
}

impl PartialEq for LocaleGenerator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for LocaleGenerator {}

/// A single entry of a locale layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleValue {
    /// A single string, often a pattern such as `{{person.last_name}}`.
    Text(String),
    /// A list of candidate strings.
    List(Vec<String>),
    /// Nested entries, e.g. postcodes keyed by state.
    Object(BTreeMap<String, LocaleValue>),
    /// A function producing a value from the seeded stream.
    Generator(LocaleGenerator),
    /// The entry exists but does not apply to this locale.
    ///
    /// Resolution stops here instead of falling through to lower layers.
    NotApplicable,
}

impl LocaleValue {
    /// Returns a short name for the value's shape, used in error messages.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "a list",
            Self::Object(_) => "an object",
            Self::Generator(_) => "a generator",
            Self::NotApplicable => "not applicable",
        }
    }

    /// Returns the list entries if this is a [`LocaleValue::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text if this is a [`LocaleValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the nested entries if this is a [`LocaleValue::Object`].
    #[must_use]
    pub const fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<&str> for LocaleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for LocaleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for LocaleValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<const LEN: usize> From<[&str; LEN]> for LocaleValue {
    fn from(items: [&str; LEN]) -> Self {
        Self::List(items.iter().map(|item| (*item).to_owned()).collect())
    }
}

impl From<LocaleGenerator> for LocaleValue {
    fn from(generator: LocaleGenerator) -> Self {
        Self::Generator(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_compare_by_identity() {
        let generator = LocaleGenerator::new(|_: &mut dyn Randomizer| "x".to_owned());
        let same = generator.clone();
        let other = LocaleGenerator::new(|_: &mut dyn Randomizer| "x".to_owned());

        assert_eq!(generator, same);
        assert_ne!(generator, other);
    }

    #[test]
    fn list_conversion_keeps_order() {
        let value = LocaleValue::from(["Smith", "Jones"]);
        assert_eq!(
            value.as_list(),
            Some(["Smith".to_owned(), "Jones".to_owned()].as_slice())
        );
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn shapes_are_named() {
        assert_eq!(LocaleValue::from("x").shape(), "text");
        assert_eq!(LocaleValue::NotApplicable.shape(), "not applicable");
    }
}

//! Ordered locale layers and the resolution rule over them.
//!
//! Layer 0 has the highest precedence; the last layer is the generic `base`
//! layer that is expected to define everything the others omit. Resolution
//! takes the whole value from the first layer that defines a path. Values
//! are never merged across layers.

use std::collections::HashMap;
use std::sync::Arc;

use camino::Utf8PathBuf;
use cap_std::fs::Dir;
use tracing::{debug, warn};

use crate::error::{LocaleError, ResolveError};
use crate::locale::definition::{LocaleDefinition, LocaleMetadata};
use crate::locale::path::LocalePath;
use crate::locale::value::LocaleValue;

/// Extension of locale files loaded by [`LocaleStack::from_dir`].
const LOCALE_FILE_EXTENSION: &str = "json";

/// module → field → indices of the layers defining it, in precedence order.
type LayerIndex = HashMap<String, HashMap<String, Vec<usize>>>;

/// An immutable, ordered stack of locale layers.
///
/// Cloning is cheap and clones share the same layers, so one stack can back
/// many facades, including facades on different threads.
///
/// # Example
///
/// ```
/// use faker_core::{LocaleDefinition, LocalePath, LocaleStack};
///
/// let en_au = LocaleDefinition::new("en_AU").with_entry("person", "last_name", ["Nguyen"]);
/// let base = LocaleDefinition::new("base")
///     .with_entry("person", "last_name", ["Smith"])
///     .with_entry("color", "human", ["red"]);
///
/// let stack = LocaleStack::new(vec![en_au, base]).expect("non-empty stack");
///
/// let last_name = LocalePath::parse("person.last_name").expect("path");
/// let color = LocalePath::parse("color.human").expect("path");
/// assert_eq!(stack.resolve_list(&last_name).expect("resolved"), ["Nguyen"]);
/// assert_eq!(stack.resolve_list(&color).expect("resolved"), ["red"]);
/// ```
#[derive(Debug, Clone)]
pub struct LocaleStack {
    inner: Arc<StackInner>,
}

#[derive(Debug)]
struct StackInner {
    layers: Vec<LocaleDefinition>,
    index: LayerIndex,
}

impl LocaleStack {
    /// Assembles a stack from layers in descending precedence.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::EmptyStack`] if `layers` is empty.
    pub fn new(layers: Vec<LocaleDefinition>) -> Result<Self, LocaleError> {
        if layers.is_empty() {
            return Err(LocaleError::EmptyStack);
        }

        let mut index = LayerIndex::new();
        for (position, layer) in layers.iter().enumerate() {
            for (module, field) in layer.entries() {
                index
                    .entry(module.to_owned())
                    .or_default()
                    .entry(field.to_owned())
                    .or_default()
                    .push(position);
            }
        }

        let stack = Self {
            inner: Arc::new(StackInner { layers, index }),
        };
        debug!(layers = ?stack.codes(), "locale stack assembled");
        Ok(stack)
    }

    /// Loads `{code}.json` for every code from `dir` and stacks them in the
    /// given order.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if any file cannot be loaded or `codes` is
    /// empty.
    pub fn from_dir<S: AsRef<str>>(dir: &Dir, codes: &[S]) -> Result<Self, LocaleError> {
        let layers = codes
            .iter()
            .map(|code| {
                let mut file = Utf8PathBuf::from(code.as_ref());
                file.set_extension(LOCALE_FILE_EXTENSION);
                LocaleDefinition::from_file(dir, &file)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(layers)
    }

    /// Returns the layers in precedence order.
    #[must_use]
    pub fn layers(&self) -> &[LocaleDefinition] {
        &self.inner.layers
    }

    /// Returns the layer codes in precedence order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.inner.layers.iter().map(LocaleDefinition::code).collect()
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.layers.len()
    }

    /// Always `false`: a stack holds at least one layer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.layers.is_empty()
    }

    /// Returns `true` if both handles share the same layers.
    #[must_use]
    pub fn same_stack(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Resolves `path` to the value of the highest-precedence layer that
    /// defines its module and field.
    ///
    /// That layer wins outright: nested keys are looked up inside it only,
    /// so a key it lacks is missing even if a lower layer has it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingData`] if no layer defines the field
    /// or the winning layer lacks a nested key, or
    /// [`ResolveError::NotApplicable`] if the winning layer marks it as not
    /// applicable.
    pub fn resolve(&self, path: &LocalePath) -> Result<&LocaleValue, ResolveError> {
        let winner = self
            .inner
            .index
            .get(path.module())
            .and_then(|fields| fields.get(path.field()))
            .and_then(|positions| positions.first())
            .and_then(|position| self.inner.layers.get(*position));

        let Some(layer) = winner else {
            warn!(%path, layers = ?self.codes(), "locale data missing from every layer");
            return Err(ResolveError::MissingData {
                path: path.to_string(),
            });
        };

        match layer.lookup(path) {
            Some(LocaleValue::NotApplicable) => {
                warn!(%path, locale = layer.code(), "locale data not applicable");
                Err(ResolveError::NotApplicable {
                    path: path.to_string(),
                    locale: layer.code().to_owned(),
                })
            }
            Some(value) => Ok(value),
            None => {
                warn!(%path, locale = layer.code(), "nested key missing from winning layer");
                Err(ResolveError::MissingData {
                    path: path.to_string(),
                })
            }
        }
    }

    /// Resolves `path` and requires a list of strings.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if resolution fails or the value is not a
    /// list.
    pub fn resolve_list(&self, path: &LocalePath) -> Result<&[String], ResolveError> {
        let value = self.resolve(path)?;
        value.as_list().ok_or_else(|| unexpected(path, "a list", value))
    }

    /// Resolves `path` and requires a single string.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if resolution fails or the value is not
    /// text.
    pub fn resolve_text(&self, path: &LocalePath) -> Result<&str, ResolveError> {
        let value = self.resolve(path)?;
        value.as_text().ok_or_else(|| unexpected(path, "text", value))
    }

    /// Returns the stack's metadata, each field taken from the first layer
    /// that sets it.
    #[must_use]
    pub fn metadata(&self) -> LocaleMetadata {
        let mut merged = LocaleMetadata::default();
        for layer in &self.inner.layers {
            merged.fill_from(layer.metadata());
        }
        merged
    }
}

fn unexpected(path: &LocalePath, expected: &'static str, found: &LocaleValue) -> ResolveError {
    ResolveError::UnexpectedShape {
        path: path.to_string(),
        expected,
        found: found.shape(),
    }
}

//! Validated dotted paths into locale data.
//!
//! A path always names a module and a field, optionally followed by keys
//! into nested objects: `location.postcode_by_state.AU`.

use std::fmt;
use std::str::FromStr;

use crate::error::LocaleError;

/// Separator between path segments.
const SEPARATOR: char = '.';

/// A module/field path, optionally descending into nested objects.
///
/// # Example
///
/// ```
/// use faker_core::LocalePath;
///
/// let path: LocalePath = "location.postcode_by_state.AU".parse().expect("valid path");
///
/// assert_eq!(path.module(), "location");
/// assert_eq!(path.field(), "postcode_by_state");
/// assert_eq!(path.nested(), ["AU".to_owned()].as_slice());
/// assert!("person".parse::<LocalePath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalePath {
    module: String,
    field: String,
    nested: Vec<String>,
}

impl LocalePath {
    /// Builds a module/field path.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::InvalidPath`] if either segment is invalid.
    pub fn new(module: impl Into<String>, field: impl Into<String>) -> Result<Self, LocaleError> {
        let path = Self {
            module: module.into(),
            field: field.into(),
            nested: Vec::new(),
        };
        path.validate()?;
        Ok(path)
    }

    /// Parses a dotted path such as `person.last_name`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::InvalidPath`] if the path has fewer than two
    /// segments or any segment is invalid.
    pub fn parse(text: &str) -> Result<Self, LocaleError> {
        let mut segments = text.split(SEPARATOR).map(str::to_owned);
        let (Some(module), Some(field)) = (segments.next(), segments.next()) else {
            return Err(LocaleError::InvalidPath {
                path: text.to_owned(),
                reason: "expected at least a module and a field",
            });
        };
        let path = Self {
            module,
            field,
            nested: segments.collect(),
        };
        path.validate()?;
        Ok(path)
    }

    /// Extends the path by one nested key.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::InvalidPath`] if `key` is not a valid segment.
    pub fn child(mut self, key: impl Into<String>) -> Result<Self, LocaleError> {
        self.nested.push(key.into());
        self.validate()?;
        Ok(self)
    }

    /// Returns the module segment.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Returns the field segment.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the keys below the field, outermost first.
    #[must_use]
    pub fn nested(&self) -> &[String] {
        &self.nested
    }

    fn validate(&self) -> Result<(), LocaleError> {
        let segments = [&self.module, &self.field].into_iter().chain(&self.nested);
        for segment in segments {
            if let Some(reason) = segment_problem(segment) {
                return Err(LocaleError::InvalidPath {
                    path: self.to_string(),
                    reason,
                });
            }
        }
        Ok(())
    }
}

/// Describes why `segment` cannot be part of a path, if it cannot.
fn segment_problem(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        Some("segments must not be empty")
    } else if segment.contains(SEPARATOR) {
        Some("segments must not contain '.'")
    } else if segment.trim() != segment {
        Some("segments must not have surrounding whitespace")
    } else {
        None
    }
}

impl FromStr for LocalePath {
    type Err = LocaleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for LocalePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.module, self.field)?;
        for key in &self.nested {
            write!(f, "{SEPARATOR}{key}")?;
        }
        Ok(())
    }
}

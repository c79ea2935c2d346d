//! Error types for the faker-core crate.
//!
//! Each concern gets its own semantic error enum built with `thiserror`:
//! seeding, locale loading, locale resolution, and the facade that ties them
//! together.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a seed cannot be applied to an engine.
///
/// A rejected seed never mutates the engine, so the previous stream remains
/// usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// A seed vector must contain at least one word.
    #[error("seed vector must contain at least one value")]
    EmptySeedVector,
}

/// Errors that can occur when loading locale layers or assembling a stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The locale file could not be read.
    #[error("failed to read locale file at '{path}': {message}")]
    IoError {
        /// Path to the locale file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The locale JSON is malformed.
    #[error("invalid locale JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The locale JSON contains a value kind that cannot be stored.
    #[error("unsupported {kind} value at '{path}'")]
    UnsupportedValue {
        /// Dotted path of the offending value.
        path: String,
        /// JSON kind that was found.
        kind: &'static str,
    },

    /// A locale path is empty or contains an empty segment.
    #[error("invalid locale path '{path}': {reason}")]
    InvalidPath {
        /// The rejected path text.
        path: String,
        /// Why the path was rejected.
        reason: &'static str,
    },

    /// A locale stack needs at least one layer.
    #[error("locale stack must contain at least one layer")]
    EmptyStack,
}

/// Errors raised while resolving a path against a locale stack.
///
/// These indicate a malformed layer stack rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No layer, including the base layer, defines the path.
    #[error(
        "locale data for '{path}' are missing from every layer; make sure all required locales are used, e.g. [de_AT, de, en, base]"
    )]
    MissingData {
        /// Dotted path that was requested.
        path: String,
    },

    /// The highest-precedence layer marks the path as not applicable.
    #[error("locale data for '{path}' aren't applicable to locale '{locale}'")]
    NotApplicable {
        /// Dotted path that was requested.
        path: String,
        /// Code of the layer holding the marker.
        locale: String,
    },

    /// The resolved value has a different shape than the caller required.
    #[error("locale data for '{path}' is {found}, expected {expected}")]
    UnexpectedShape {
        /// Dotted path that was requested.
        path: String,
        /// Shape the caller asked for.
        expected: &'static str,
        /// Shape that was resolved.
        found: &'static str,
    },
}

/// Errors surfaced by the [`Faker`](crate::Faker) facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FakerError {
    /// A seed was rejected.
    #[error("seed error: {source}")]
    Seed {
        /// Underlying seed error.
        #[from]
        #[source]
        source: SeedError,
    },

    /// Locale data could not be loaded or assembled.
    #[error("locale error: {source}")]
    Locale {
        /// Underlying locale error.
        #[from]
        #[source]
        source: LocaleError,
    },

    /// A locale path could not be resolved.
    #[error("resolve error: {source}")]
    Resolve {
        /// Underlying resolution error.
        #[from]
        #[source]
        source: ResolveError,
    },

    /// The builder was not given a locale stack.
    #[error("a locale stack is required to build a faker")]
    MissingLocale,

    /// An element was requested from an empty selection.
    #[error("cannot select an element from an empty list")]
    EmptySelection,

    /// A numeric range has its bounds reversed.
    #[error("invalid range: max {max} is less than min {min}")]
    InvalidRange {
        /// Lower bound that was supplied, as written.
        min: String,
        /// Upper bound that was supplied, as written.
        max: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_error_formats_correctly() {
        assert_eq!(
            SeedError::EmptySeedVector.to_string(),
            "seed vector must contain at least one value"
        );
    }

    #[test]
    fn locale_error_io_formats_correctly() {
        let err = LocaleError::IoError {
            path: PathBuf::from("locales/en.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read locale file at 'locales/en.json': file not found"
        );
    }

    #[test]
    fn locale_error_unsupported_value_formats_correctly() {
        let err = LocaleError::UnsupportedValue {
            path: "person.age".to_owned(),
            kind: "number",
        };
        assert_eq!(err.to_string(), "unsupported number value at 'person.age'");
    }

    #[test]
    fn locale_error_empty_stack_formats_correctly() {
        assert_eq!(
            LocaleError::EmptyStack.to_string(),
            "locale stack must contain at least one layer"
        );
    }

    #[test]
    fn resolve_error_missing_data_names_path() {
        let err = ResolveError::MissingData {
            path: "person.last_name".to_owned(),
        };
        let message = err.to_string();
        assert!(message.starts_with("locale data for 'person.last_name' are missing"));
        assert!(message.contains("[de_AT, de, en, base]"));
    }

    #[test]
    fn resolve_error_not_applicable_formats_correctly() {
        let err = ResolveError::NotApplicable {
            path: "location.state".to_owned(),
            locale: "en_GB".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "locale data for 'location.state' aren't applicable to locale 'en_GB'"
        );
    }

    #[test]
    fn faker_error_wraps_resolve_error() {
        let err = FakerError::from(ResolveError::MissingData {
            path: "a.b".to_owned(),
        });
        assert!(err.to_string().starts_with("resolve error: locale data for 'a.b'"));
    }

    #[test]
    fn faker_error_invalid_range_formats_correctly() {
        let err = FakerError::InvalidRange {
            min: "5".to_owned(),
            max: "1".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid range: max 1 is less than min 5");
    }
}

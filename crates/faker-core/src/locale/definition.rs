//! A single locale layer and its JSON representation.
//!
//! Locale files are JSON objects whose top-level keys are module names, each
//! mapping field names to values. An optional `metadata` key describes the
//! locale itself:
//!
//! ```json
//! {
//!   "metadata": { "code": "en_AU", "title": "English (Australia)" },
//!   "person": { "last_name": ["Smith", "Jones"] },
//!   "location": { "state": null }
//! }
//! ```
//!
//! `null` marks an entry as not applicable to the locale.

use std::collections::BTreeMap;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LocaleError;
use crate::locale::path::LocalePath;
use crate::locale::value::LocaleValue;

/// Top-level key reserved for locale metadata.
const METADATA_KEY: &str = "metadata";

/// Code used for layers that do not name themselves.
const CUSTOM_CODE: &str = "custom";

/// Writing direction of a locale's script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Descriptive metadata for a locale.
///
/// Every field is optional so a specific layer can omit what a more general
/// layer already provides; see [`LocaleMetadata::fill_from`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleMetadata {
    /// English name of the locale, e.g. `English (Australia)`.
    pub title: Option<String>,
    /// Locale code, e.g. `en_AU`.
    pub code: Option<String>,
    /// ISO 3166 country code, if the locale is country-specific.
    pub country: Option<String>,
    /// ISO 639 language code.
    pub language: Option<String>,
    /// Name of the locale in its own language.
    pub endonym: Option<String>,
    /// Writing direction.
    pub dir: Option<TextDirection>,
    /// ISO 15924 script code.
    pub script: Option<String>,
}

impl LocaleMetadata {
    /// Fills every missing field from `fallback`.
    pub fn fill_from(&mut self, fallback: &Self) {
        fill(&mut self.title, fallback.title.as_ref());
        fill(&mut self.code, fallback.code.as_ref());
        fill(&mut self.country, fallback.country.as_ref());
        fill(&mut self.language, fallback.language.as_ref());
        fill(&mut self.endonym, fallback.endonym.as_ref());
        fill(&mut self.script, fallback.script.as_ref());
        if self.dir.is_none() {
            self.dir = fallback.dir;
        }
    }
}

fn fill(slot: &mut Option<String>, fallback: Option<&String>) {
    if slot.is_none() {
        *slot = fallback.cloned();
    }
}

/// One locale layer: a named tree of module → field → value.
///
/// # Example
///
/// ```
/// use faker_core::{LocaleDefinition, LocalePath, LocaleValue};
///
/// let json = r#"{
///     "metadata": {"code": "en", "title": "English"},
///     "person": {"last_name": ["Smith", "Jones"]}
/// }"#;
///
/// let layer = LocaleDefinition::from_json(json).expect("valid locale");
/// let path = LocalePath::parse("person.last_name").expect("valid path");
///
/// assert_eq!(layer.code(), "en");
/// assert_eq!(layer.lookup(&path), Some(&LocaleValue::from(["Smith", "Jones"])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDefinition {
    code: String,
    metadata: LocaleMetadata,
    modules: BTreeMap<String, BTreeMap<String, LocaleValue>>,
}

impl LocaleDefinition {
    /// Creates an empty layer with the given code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            metadata: LocaleMetadata {
                code: Some(code.clone()),
                ..LocaleMetadata::default()
            },
            code,
            modules: BTreeMap::new(),
        }
    }

    /// Replaces the layer metadata, keeping the layer code.
    #[must_use]
    pub fn with_metadata(mut self, metadata: LocaleMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Adds or replaces one module field, returning the layer.
    #[must_use]
    pub fn with_entry(
        mut self,
        module: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<LocaleValue>,
    ) -> Self {
        self.insert(module, field, value);
        self
    }

    /// Adds or replaces one module field.
    pub fn insert(
        &mut self,
        module: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<LocaleValue>,
    ) {
        self.modules
            .entry(module.into())
            .or_default()
            .insert(field.into(), value.into());
    }

    /// Parses a layer from JSON text.
    ///
    /// The layer code comes from `metadata.code`, falling back to `custom`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the JSON is malformed or holds a value
    /// kind that locale data cannot contain.
    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        Self::from_json_with_code(json, CUSTOM_CODE)
    }

    /// Loads a layer from a JSON file inside `dir`.
    ///
    /// The layer code comes from `metadata.code`, falling back to the file
    /// stem.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, LocaleError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|err| LocaleError::IoError {
                path: path.as_std_path().to_path_buf(),
                message: err.to_string(),
            })?;
        let fallback_code = path.file_stem().unwrap_or(CUSTOM_CODE);
        Self::from_json_with_code(&contents, fallback_code)
    }

    fn from_json_with_code(json: &str, fallback_code: &str) -> Result<Self, LocaleError> {
        let raw: BTreeMap<String, Value> =
            serde_json::from_str(json).map_err(|e| LocaleError::ParseError {
                message: e.to_string(),
            })?;
        Self::from_raw(raw, fallback_code)
    }

    fn from_raw(raw: BTreeMap<String, Value>, fallback_code: &str) -> Result<Self, LocaleError> {
        let mut metadata = LocaleMetadata::default();
        let mut modules = BTreeMap::new();

        for (name, value) in raw {
            if name == METADATA_KEY {
                metadata = serde_json::from_value(value).map_err(|e| LocaleError::ParseError {
                    message: format!("invalid metadata: {e}"),
                })?;
                continue;
            }
            let fields = match value {
                Value::Object(fields) => fields,
                other => {
                    return Err(LocaleError::UnsupportedValue {
                        kind: json_kind(&other),
                        path: name,
                    });
                }
            };
            let converted = fields
                .into_iter()
                .map(|(field, field_value)| {
                    let path = format!("{name}.{field}");
                    convert_value(field_value, &path).map(|v| (field, v))
                })
                .collect::<Result<BTreeMap<_, _>, _>>()?;
            modules.insert(name, converted);
        }

        let code = metadata
            .code
            .clone()
            .unwrap_or_else(|| fallback_code.to_owned());
        if metadata.code.is_none() {
            metadata.code = Some(code.clone());
        }

        Ok(Self {
            code,
            metadata,
            modules,
        })
    }

    /// Returns the locale code, e.g. `en_AU`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the layer's own metadata.
    #[must_use]
    pub const fn metadata(&self) -> &LocaleMetadata {
        &self.metadata
    }

    /// Iterates over module names defined by this layer.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Iterates over `(module, field)` pairs defined by this layer.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().flat_map(|(module, fields)| {
            fields
                .keys()
                .map(move |field| (module.as_str(), field.as_str()))
        })
    }

    /// Looks `path` up in this layer only.
    ///
    /// Returns `None` if the path is absent. A [`LocaleValue::NotApplicable`]
    /// marker met on the way down is returned as-is, since it covers every
    /// key below it.
    #[must_use]
    pub fn lookup(&self, path: &LocalePath) -> Option<&LocaleValue> {
        let mut value = self.modules.get(path.module())?.get(path.field())?;
        for key in path.nested() {
            value = match value {
                LocaleValue::Object(entries) => entries.get(key)?,
                LocaleValue::NotApplicable => return Some(value),
                LocaleValue::Text(_) | LocaleValue::List(_) | LocaleValue::Generator(_) => {
                    return None;
                }
            };
        }
        Some(value)
    }
}

fn convert_value(value: Value, path: &str) -> Result<LocaleValue, LocaleError> {
    match value {
        Value::String(text) => Ok(LocaleValue::Text(text)),
        Value::Null => Ok(LocaleValue::NotApplicable),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(text) => Ok(text),
                other => Err(LocaleError::UnsupportedValue {
                    path: format!("{path}[{index}]"),
                    kind: json_kind(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(LocaleValue::List),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, entry)| {
                let child = format!("{path}.{key}");
                convert_value(entry, &child).map(|v| (key, v))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(LocaleValue::Object),
        other @ (Value::Bool(_) | Value::Number(_)) => Err(LocaleError::UnsupportedValue {
            path: path.to_owned(),
            kind: json_kind(&other),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Settings and run logic for the `faker-resolve` binary.
//!
//! The binary loads [`FakerSettings`] through `OrthoConfig` (command line,
//! `FAKER_*` environment variables, and configuration files), assembles a
//! facade from locale JSON files, and samples one locale definition. The
//! logic lives here so it can be exercised without spawning a process.

use std::path::PathBuf;

use cap_std::{ambient_authority, fs::Dir};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::error::{FakerError, LocaleError};
use crate::faker::Faker;
use crate::locale::{LocalePath, LocaleStack};
use crate::randomizer::{ChaChaRandomizer, Mersenne32Randomizer, Mersenne53Randomizer, Randomizer};
use crate::seed::{Seed, SeedValue};

const DEFAULT_LOCALES: &str = "en,base";
const DEFAULT_DEFINITION: &str = "person.last_name";
const DEFAULT_COUNT: usize = 5;
const DEFAULT_RANDOMIZER: &str = "mersenne53";

fn default_locale_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("locales")
}

/// Configuration values for one sampling run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FAKER")]
pub struct FakerSettings {
    /// Comma-separated locale codes in descending precedence.
    pub locales: Option<String>,
    /// Directory holding `{code}.json` locale files.
    pub locale_dir: Option<PathBuf>,
    /// Seed for the run; drawn from entropy when absent.
    pub seed: Option<u32>,
    /// Randomizer name: `mersenne53`, `mersenne32`, or `chacha8`.
    pub randomizer: Option<String>,
    /// Dotted locale path to sample.
    pub definition: Option<String>,
    /// Number of values to sample.
    pub count: Option<usize>,
}

impl FakerSettings {
    /// Returns the locale chain, falling back to `en,base`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::EmptyLocaleChain`] if the configured chain
    /// names no locale.
    pub fn locale_chain(&self) -> Result<Vec<String>, SettingsError> {
        let chain: Vec<String> = self
            .locales
            .as_deref()
            .unwrap_or(DEFAULT_LOCALES)
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_owned)
            .collect();
        if chain.is_empty() {
            return Err(SettingsError::EmptyLocaleChain);
        }
        Ok(chain)
    }

    /// Returns the configured locale directory, falling back to the bundled
    /// fixtures.
    #[must_use]
    pub fn locale_dir(&self) -> PathBuf {
        self.locale_dir.clone().unwrap_or_else(default_locale_dir)
    }

    /// Returns the configured definition path, falling back to
    /// `person.last_name`.
    #[must_use]
    pub fn definition(&self) -> &str {
        self.definition.as_deref().unwrap_or(DEFAULT_DEFINITION)
    }

    /// Returns the configured sample count, falling back to 5.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Returns the configured seed, or entropy when none is set.
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed.map_or(Seed::FromEntropy, Seed::from)
    }

    /// Instantiates the configured randomizer.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownRandomizer`] for an unrecognised name.
    pub fn build_randomizer(&self) -> Result<Box<dyn Randomizer>, SettingsError> {
        let name = self.randomizer.as_deref().unwrap_or(DEFAULT_RANDOMIZER);
        match name {
            "mersenne53" => Ok(Box::new(Mersenne53Randomizer::new())),
            "mersenne32" => Ok(Box::new(Mersenne32Randomizer::new())),
            "chacha8" => Ok(Box::new(ChaChaRandomizer::with_seed(0))),
            other => Err(SettingsError::UnknownRandomizer {
                name: other.to_owned(),
            }),
        }
    }

    /// Loads the locale stack and builds a seeded facade.
    ///
    /// The facade is always seeded, from entropy if no seed is configured,
    /// so the seed in use can be reported back.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the locale files cannot be loaded or the
    /// randomizer name is unknown.
    pub fn build_faker(&self) -> Result<Faker, SettingsError> {
        let codes = self.locale_chain()?;
        let dir_path = self.locale_dir();
        let dir = Dir::open_ambient_dir(&dir_path, ambient_authority()).map_err(|err| {
            LocaleError::IoError {
                path: dir_path.clone(),
                message: err.to_string(),
            }
        })?;
        let stack = LocaleStack::from_dir(&dir, &codes)?;

        Ok(Faker::builder()
            .locale(stack)
            .randomizer(self.build_randomizer()?)
            .seed(self.seed())
            .build()?)
    }
}

/// Outcome of one sampling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleReport {
    /// Seed actually used; replaying it reproduces `values`.
    pub seed: SeedValue,
    /// Locale codes in precedence order.
    pub locales: Vec<String>,
    /// Path that was sampled.
    pub definition: String,
    /// Sampled values in draw order.
    pub values: Vec<String>,
}

/// Builds a facade from `settings` and samples the configured definition.
///
/// # Errors
///
/// Returns [`SettingsError`] if the facade cannot be built or the definition
/// cannot be resolved.
///
/// # Example
///
/// ```
/// use faker_core::resolve_cli::{FakerSettings, run};
///
/// let settings = FakerSettings {
///     locales: Some("en_AU,en,base".to_owned()),
///     locale_dir: None,
///     seed: Some(42),
///     randomizer: None,
///     definition: Some("person.last_name".to_owned()),
///     count: Some(3),
/// };
///
/// let first = run(&settings).expect("sample");
/// let second = run(&settings).expect("sample");
///
/// assert_eq!(first.values.len(), 3);
/// assert_eq!(first, second);
/// ```
pub fn run(settings: &FakerSettings) -> Result<SampleReport, SettingsError> {
    let path = LocalePath::parse(settings.definition())?;
    let mut faker = settings.build_faker()?;
    let seed = faker
        .seed_state()
        .value()
        .cloned()
        .ok_or(SettingsError::Unseeded)?;

    let values = (0..settings.count())
        .map(|_| faker.helpers().from_definition(&path))
        .collect::<Result<Vec<_>, _>>()?;

    info!(%seed, definition = %path, count = values.len(), "sampled locale definition");
    Ok(SampleReport {
        seed,
        locales: faker
            .definitions()
            .codes()
            .into_iter()
            .map(str::to_owned)
            .collect(),
        definition: path.to_string(),
        values,
    })
}

/// Errors surfaced while configuring or executing a sampling run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Settings could not be loaded from arguments, environment, or files.
    #[error("failed to load settings: {message}")]
    Load {
        /// Loader error message.
        message: String,
    },
    /// The locale chain names no locale.
    #[error("locale chain must name at least one locale")]
    EmptyLocaleChain,
    /// The randomizer name is not recognised.
    #[error("unknown randomizer '{name}'; expected mersenne53, mersenne32, or chacha8")]
    UnknownRandomizer {
        /// Name that was supplied.
        name: String,
    },
    /// The report could not be rendered as JSON.
    #[error("failed to render report: {message}")]
    Render {
        /// Serialiser error message.
        message: String,
    },
    /// The facade reported no seed after construction.
    #[error("faker was built without a seed")]
    Unseeded,
    /// Locale files or paths were invalid.
    #[error("locale error: {source}")]
    Locale {
        /// Underlying locale error.
        #[from]
        #[source]
        source: LocaleError,
    },
    /// The facade failed to build or sample.
    #[error("faker error: {source}")]
    Faker {
        /// Underlying facade error.
        #[from]
        #[source]
        source: FakerError,
    },
}

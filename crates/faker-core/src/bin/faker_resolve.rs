//! Samples a locale definition through a seeded facade.
//!
//! This binary delegates to `faker_core::resolve_cli` for configuration and
//! sampling, keeping the behaviour testable without spawning a process. The
//! report is printed to stdout as JSON; logs go to stderr.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use faker_core::resolve_cli::{FakerSettings, SettingsError, run};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn execute() -> Result<(), SettingsError> {
    let settings =
        FakerSettings::load_from_iter(env::args_os()).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })?;
    let report = run(&settings)?;
    let json = serde_json::to_string_pretty(&report).map_err(|err| SettingsError::Render {
        message: err.to_string(),
    })?;
    if let Err(err) = writeln!(io::stdout().lock(), "{json}") {
        drop(err);
    }
    Ok(())
}

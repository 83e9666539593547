// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawSettingsFile, Settings};
use crate::errors::Result;

/// Load a settings file from a given path and return the raw `RawSettingsFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSettingsFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let settings: RawSettingsFile = toml::from_str(&contents)?;

    Ok(settings)
}

/// Load a settings file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Settings> {
    let raw = load_from_path(&path)?;
    let settings = Settings::try_from(raw)?;
    Ok(settings)
}

/// Resolve the raw settings for a run.
///
/// - An explicitly given path must exist and parse.
/// - Without one, [`default_config_path`] is used if it exists; otherwise the
///   built-in defaults apply.
pub fn load_raw_or_default(explicit: Option<&Path>) -> Result<RawSettingsFile> {
    match explicit {
        Some(path) => load_from_path(path),
        None => {
            let path = default_config_path();
            if path.is_file() {
                debug!(path = ?path, "loading default settings file");
                load_from_path(&path)
            } else {
                debug!("no settings file found; using built-in defaults");
                Ok(RawSettingsFile::default())
            }
        }
    }
}

/// Default settings file: `Critpath.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Critpath.toml")
}

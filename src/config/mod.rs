// src/config/mod.rs

//! Settings loading and validation for critpath.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a settings file from disk (`loader.rs`).
//! - Validate delimiters and numeric knobs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_raw_or_default};
pub use model::{AnalysisSettings, InputSettings, OutputSettings, RawSettingsFile, Settings};

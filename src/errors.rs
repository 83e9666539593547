// src/errors.rs

//! Crate-wide error type.
//!
//! The scheduling core only ever produces the first group of variants; the
//! rest come from the I/O glue (input reader, settings loader, export).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpmError {
    #[error("duplicate activity '{0}'")]
    DuplicateActivity(String),

    #[error("activity '{activity}' references unknown predecessor '{reference}'")]
    UnknownPredecessor { activity: String, reference: String },

    #[error("cycle detected in activity network involving '{0}'")]
    Cycle(String),

    #[error("activity '{activity}' has invalid duration '{value}' (expected a non-negative number below 2^53)")]
    InvalidDuration { activity: String, value: String },

    /// `row` counts data rows from 1; the header and skipped blank lines are
    /// not included.
    #[error("data row {row} has an empty activity name (header and blank lines not counted)")]
    InvalidActivityName { row: usize },

    #[error("early finish of activity '{activity}' reaches {finish}, beyond the exactly representable time range")]
    TimeOutOfRange { activity: String, finish: f64 },

    #[error("activity network is empty")]
    NoActivities,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CpmError>;

// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::Delimiter;

/// Command-line arguments for `critpath`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "critpath",
    version,
    about = "Critical Path Method analysis of an activity network read from a delimited file.",
    long_about = None
)]
pub struct CliArgs {
    /// Delimited file with `Task`, `Duration` and `Predecessors` columns.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the settings file (TOML).
    ///
    /// If omitted, `Critpath.toml` in the current working directory is used
    /// when present; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Column separator of the input file (e.g. ";", "comma", "tab").
    #[arg(long, value_name = "DELIM")]
    pub field_delimiter: Option<Delimiter>,

    /// Separator between names inside the predecessor column.
    #[arg(long, value_name = "DELIM")]
    pub predecessor_delimiter: Option<Delimiter>,

    /// Directory the timestamped CSV export is written to.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip the CSV export; only print the table and critical path.
    #[arg(long)]
    pub no_export: bool,

    /// Tolerance used to decide zero slack when durations are fractional.
    #[arg(long, value_name = "F64")]
    pub epsilon: Option<f64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CRITPATH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the activity registry, but don't compute or export.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::Delimiter;

/// Settings as read from a TOML file, before validation.
///
/// ```toml
/// [input]
/// field_delimiter = ";"
/// predecessor_delimiter = ","
///
/// [output]
/// dir = "outputs"
///
/// [analysis]
/// slack_epsilon = 1e-9
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawSettingsFile {
    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// Validated settings for one pipeline run.
///
/// Only obtainable through `TryFrom<RawSettingsFile>`, so every instance has
/// passed the checks in `config::validate`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: InputSettings,
    pub output: OutputSettings,
    pub analysis: AnalysisSettings,
}

impl Settings {
    pub(crate) fn new_unchecked(
        input: InputSettings,
        output: OutputSettings,
        analysis: AnalysisSettings,
    ) -> Self {
        Self {
            input,
            output,
            analysis,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new_unchecked(
            InputSettings::default(),
            OutputSettings::default(),
            AnalysisSettings::default(),
        )
    }
}

/// `[input]` section: how the activity file is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSettings {
    /// Column separator.
    #[serde(default = "default_input_field_delimiter")]
    pub field_delimiter: Delimiter,

    /// Separator between names inside the predecessor column.
    #[serde(default = "default_list_delimiter")]
    pub predecessor_delimiter: Delimiter,

    /// Header of the activity name column (matched case-insensitively).
    #[serde(default = "default_task_column")]
    pub task_column: String,

    #[serde(default = "default_duration_column")]
    pub duration_column: String,

    /// Optional column; when absent from the file no activity has predecessors.
    #[serde(default = "default_predecessors_column")]
    pub predecessors_column: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            field_delimiter: default_input_field_delimiter(),
            predecessor_delimiter: default_list_delimiter(),
            task_column: default_task_column(),
            duration_column: default_duration_column(),
            predecessors_column: default_predecessors_column(),
        }
    }
}

/// `[output]` section: CSV export of the result table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Whether the pipeline writes a CSV export at all.
    #[serde(default = "default_export")]
    pub export: bool,

    /// Directory the export is written to (created if missing).
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name prefix; the file is `<prefix>_<YYYYmmdd_HHMMSS>.csv`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    #[serde(default = "default_output_field_delimiter")]
    pub field_delimiter: Delimiter,

    /// Separator used when rendering predecessor/successor lists.
    #[serde(default = "default_list_delimiter")]
    pub list_delimiter: Delimiter,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            export: default_export(),
            dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            field_delimiter: default_output_field_delimiter(),
            list_delimiter: default_list_delimiter(),
        }
    }
}

/// `[analysis]` section: numeric knobs of the scheduling core.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisSettings {
    /// Zero-slack tolerance, used only when some duration is fractional.
    #[serde(default = "default_slack_epsilon")]
    pub slack_epsilon: f64,

    /// Upper bound on the number of critical chains enumerated.
    #[serde(default = "default_max_critical_chains")]
    pub max_critical_chains: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            slack_epsilon: default_slack_epsilon(),
            max_critical_chains: default_max_critical_chains(),
        }
    }
}

fn default_input_field_delimiter() -> Delimiter {
    Delimiter::SEMICOLON
}

fn default_output_field_delimiter() -> Delimiter {
    Delimiter::SEMICOLON
}

fn default_list_delimiter() -> Delimiter {
    Delimiter::COMMA
}

fn default_task_column() -> String {
    "Task".to_string()
}

fn default_duration_column() -> String {
    "Duration".to_string()
}

fn default_predecessors_column() -> String {
    "Predecessors".to_string()
}

fn default_export() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_file_prefix() -> String {
    "cpm_output".to_string()
}

fn default_slack_epsilon() -> f64 {
    1e-9
}

fn default_max_critical_chains() -> usize {
    64
}

// src/config/validate.rs

use crate::config::model::{RawSettingsFile, Settings};
use crate::errors::{CpmError, Result};

impl TryFrom<RawSettingsFile> for Settings {
    type Error = CpmError;

    fn try_from(raw: RawSettingsFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_settings(&raw)?;
        Ok(Settings::new_unchecked(raw.input, raw.output, raw.analysis))
    }
}

fn validate_raw_settings(cfg: &RawSettingsFile) -> Result<()> {
    validate_input(cfg)?;
    validate_output(cfg)?;
    validate_analysis(cfg)?;
    Ok(())
}

fn validate_input(cfg: &RawSettingsFile) -> Result<()> {
    let input = &cfg.input;

    if input.field_delimiter == input.predecessor_delimiter {
        return Err(CpmError::ConfigError(format!(
            "[input].field_delimiter and [input].predecessor_delimiter must differ (both '{}')",
            input.field_delimiter
        )));
    }

    for (key, value) in [
        ("task_column", &input.task_column),
        ("duration_column", &input.duration_column),
        ("predecessors_column", &input.predecessors_column),
    ] {
        if value.trim().is_empty() {
            return Err(CpmError::ConfigError(format!(
                "[input].{key} must not be empty"
            )));
        }
    }

    Ok(())
}

fn validate_output(cfg: &RawSettingsFile) -> Result<()> {
    let output = &cfg.output;

    if output.field_delimiter == output.list_delimiter {
        return Err(CpmError::ConfigError(format!(
            "[output].field_delimiter and [output].list_delimiter must differ (both '{}')",
            output.field_delimiter
        )));
    }

    if output.file_prefix.trim().is_empty() {
        return Err(CpmError::ConfigError(
            "[output].file_prefix must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_analysis(cfg: &RawSettingsFile) -> Result<()> {
    let analysis = &cfg.analysis;

    if !analysis.slack_epsilon.is_finite() || analysis.slack_epsilon < 0.0 {
        return Err(CpmError::ConfigError(format!(
            "[analysis].slack_epsilon must be a finite number >= 0 (got {})",
            analysis.slack_epsilon
        )));
    }

    if analysis.max_critical_chains == 0 {
        return Err(CpmError::ConfigError(
            "[analysis].max_critical_chains must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

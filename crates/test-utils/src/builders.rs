#![allow(dead_code)]

use critpath::config::{RawSettingsFile, Settings};
use critpath::dag::ActivityRow;
use critpath::types::Delimiter;

/// Builder for a list of [`ActivityRow`]s.
///
/// Predecessors are given as a slice and joined with the configured
/// delimiter (`,` unless changed), matching what the file reader produces.
pub struct RowsBuilder {
    rows: Vec<ActivityRow>,
    delimiter: Delimiter,
}

impl RowsBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            delimiter: Delimiter::COMMA,
        }
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn activity(mut self, name: &str, duration: impl ToString, preds: &[&str]) -> Self {
        let preds = self.delimiter.join(preds);
        self.rows
            .push(ActivityRow::new(name, duration.to_string(), preds));
        self
    }

    /// Push a row verbatim, e.g. to exercise malformed input.
    pub fn raw(mut self, name: &str, duration: &str, preds: &str) -> Self {
        self.rows.push(ActivityRow::new(name, duration, preds));
        self
    }

    pub fn build(self) -> Vec<ActivityRow> {
        self.rows
    }
}

impl Default for RowsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for validated [`Settings`].
pub struct SettingsBuilder {
    raw: RawSettingsFile,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawSettingsFile::default(),
        }
    }

    pub fn predecessor_delimiter(mut self, d: Delimiter) -> Self {
        self.raw.input.predecessor_delimiter = d;
        self
    }

    pub fn field_delimiter(mut self, d: Delimiter) -> Self {
        self.raw.input.field_delimiter = d;
        self
    }

    pub fn slack_epsilon(mut self, eps: f64) -> Self {
        self.raw.analysis.slack_epsilon = eps;
        self
    }

    pub fn max_critical_chains(mut self, n: usize) -> Self {
        self.raw.analysis.max_critical_chains = n;
        self
    }

    pub fn build(self) -> Settings {
        Settings::try_from(self.raw).expect("Failed to build valid settings from builder")
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear chain A(3) -> B(2) -> C(4).
pub fn linear_chain() -> Vec<ActivityRow> {
    RowsBuilder::new()
        .activity("A", 3, &[])
        .activity("B", 2, &["A"])
        .activity("C", 4, &["B"])
        .build()
}

/// A(2) fans out to B(5) and C(1), which merge into D(1).
pub fn parallel_branches() -> Vec<ActivityRow> {
    RowsBuilder::new()
        .activity("A", 2, &[])
        .activity("B", 5, &["A"])
        .activity("C", 1, &["A"])
        .activity("D", 1, &["B", "C"])
        .build()
}

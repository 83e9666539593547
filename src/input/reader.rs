// src/input/reader.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::config::InputSettings;
use crate::dag::ActivityRow;
use crate::errors::{CpmError, Result};

/// Read activity rows from a delimited file.
pub fn read_rows(path: impl AsRef<Path>, settings: &InputSettings) -> Result<Vec<ActivityRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        CpmError::Input(format!("cannot open activity file {}: {e}", path.display()))
    })?;
    let rows = read_rows_from(file, settings)?;
    debug!(path = %path.display(), rows = rows.len(), "activity file read");
    Ok(rows)
}

/// Read activity rows from any reader.
///
/// The first record is the header. Columns are located by name
/// (case-insensitive); the predecessor column is optional. Blank lines are
/// skipped and short records are padded with empty fields.
pub fn read_rows_from<R: Read>(reader: R, settings: &InputSettings) -> Result<Vec<ActivityRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(settings.field_delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = Columns::locate(&headers, settings)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(columns.row(&record));
    }

    Ok(rows)
}

/// Positions of the recognised columns in the header record.
#[derive(Debug, Clone, Copy)]
struct Columns {
    task: usize,
    duration: usize,
    predecessors: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord, settings: &InputSettings) -> Result<Self> {
        let find = |wanted: &str| {
            let wanted = wanted.trim();
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };

        let required = |wanted: &str| {
            find(wanted).ok_or_else(|| {
                CpmError::Input(format!(
                    "missing required column '{wanted}' (found: {})",
                    headers.iter().collect::<Vec<_>>().join(", ")
                ))
            })
        };

        Ok(Self {
            task: required(&settings.task_column)?,
            duration: required(&settings.duration_column)?,
            predecessors: find(&settings.predecessors_column),
        })
    }

    fn row(&self, record: &StringRecord) -> ActivityRow {
        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        ActivityRow {
            name: field(self.task),
            duration: field(self.duration),
            predecessors: self.predecessors.map(field).unwrap_or_default(),
        }
    }
}

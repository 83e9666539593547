// src/report/export.rs

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use csv::WriterBuilder;
use tracing::info;

use crate::config::OutputSettings;
use crate::cpm::Schedule;
use crate::errors::Result;
use crate::report::table::{COLUMNS, row_cells};

/// Timestamp layout used in export file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for an export taken at `timestamp`: `<prefix>_<YYYYmmdd_HHMMSS>.csv`.
pub fn export_file_name(prefix: &str, timestamp: NaiveDateTime) -> String {
    format!("{prefix}_{}.csv", timestamp.format(TIMESTAMP_FORMAT))
}

/// Write the result table as delimited text to `writer`.
pub fn write_csv<W: Write>(schedule: &Schedule, writer: W, settings: &OutputSettings) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(settings.field_delimiter.as_byte())
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for activity in &schedule.activities {
        csv_writer.write_record(row_cells(activity, settings.list_delimiter))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export the result table into `settings.dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn export_csv(
    schedule: &Schedule,
    settings: &OutputSettings,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(&settings.dir)?;

    let path = settings
        .dir
        .join(export_file_name(&settings.file_prefix, timestamp));
    let file = fs::File::create(&path)?;
    write_csv(schedule, file, settings)?;

    info!(path = %path.display(), "CPM results exported");
    Ok(path)
}

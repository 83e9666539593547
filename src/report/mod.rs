// src/report/mod.rs

//! Reporting and export collaborators.
//!
//! - [`table`] renders the result table and critical path for the console.
//! - [`export`] writes the same table as a timestamped delimited file.

pub mod export;
pub mod table;

pub use export::{export_csv, export_file_name, write_csv};
pub use table::{COLUMNS, critical_path_line, render_table};

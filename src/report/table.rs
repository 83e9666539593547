// src/report/table.rs

use crate::cpm::{Schedule, ScheduledActivity};
use crate::types::{Delimiter, format_time};

/// Column headers of the result table, in output order.
pub const COLUMNS: [&str; 10] = [
    "Task",
    "Duration",
    "Predecessors",
    "Successors",
    "ES",
    "EF",
    "LS",
    "LF",
    "Slack",
    "Critical",
];

/// Render one activity as the ten table cells.
pub fn row_cells(activity: &ScheduledActivity, list_delimiter: Delimiter) -> [String; 10] {
    [
        activity.name.clone(),
        format_time(activity.duration),
        list_delimiter.join(&activity.predecessors),
        list_delimiter.join(&activity.successors),
        format_time(activity.early_start),
        format_time(activity.early_finish),
        format_time(activity.late_start),
        format_time(activity.late_finish),
        format_time(activity.slack),
        if activity.critical { "True" } else { "False" }.to_string(),
    ]
}

/// Render the result table as left-aligned, space-padded text.
pub fn render_table(schedule: &Schedule, list_delimiter: Delimiter) -> String {
    let rows: Vec<[String; 10]> = schedule
        .activities
        .iter()
        .map(|a| row_cells(a, list_delimiter))
        .collect();

    let mut widths: [usize; 10] = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, COLUMNS.iter().copied(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

/// `"A -> B -> C"`, or `"(none)"` when there is nothing critical.
pub fn critical_path_line(schedule: &Schedule) -> String {
    if schedule.critical_path.is_empty() {
        "(none)".to_string()
    } else {
        schedule.critical_path.join(" -> ")
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 10]) {
    let line = cells
        .zip(widths.iter())
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

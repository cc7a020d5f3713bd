use std::path::Path;

use crate::error::Result;
use crate::schedule::Schedule;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Export a computed schedule to a semicolon-delimited CSV file.
///
/// Columns: Task ; Start Date ; End Date ; Duration ; Level ; Status ;
/// Priority ; Progress. Rows follow the schedule order.
/// Returns the number of tasks written.
pub fn export_csv(schedule: &Schedule, path: &Path) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record([
        "Task",
        "Start Date",
        "End Date",
        "Duration",
        "Level",
        "Status",
        "Priority",
        "Progress",
    ])?;

    for task in &schedule.tasks {
        let start = task.start_date.format(DATE_FORMAT).to_string();
        let end = task.end_date.format(DATE_FORMAT).to_string();
        let duration = task.duration_days.to_string();
        let level = task.level.to_string();
        let progress = format!("{}%", task.progress_percent);
        wtr.write_record([
            task.title.as_str(),
            start.as_str(),
            end.as_str(),
            duration.as_str(),
            level.as_str(),
            task.status.label(),
            task.priority.label(),
            progress.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(schedule.tasks.len())
}

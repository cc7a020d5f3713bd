use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::{Task, TaskPriority, TaskStatus};

/// Separator between titles in the dependency column.
const DEPENDENCY_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Title,
    Status,
    Priority,
    Due,
    Created,
    DependsOn,
}

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

fn header_to_column(header: &str) -> Option<Column> {
    let normalized = header.trim().to_lowercase().replace([' ', '-', '_'], "");
    match normalized.as_str() {
        "title" | "name" | "task" | "taskname" | "tasklabel" | "label" | "summary" => {
            Some(Column::Title)
        }
        "status" | "state" | "stage" => Some(Column::Status),
        "priority" | "pri" | "importance" => Some(Column::Priority),
        "due" | "duedate" | "deadline" | "end" | "enddate" => Some(Column::Due),
        "created" | "createdat" | "createddate" | "start" | "startdate" => Some(Column::Created),
        "dependson" | "dependencies" | "depends" | "after" | "blockedby" | "predecessors" => {
            Some(Column::DependsOn)
        }
        _ => None,
    }
}

/// Import tasks from a CSV file, using the local date for rows without a
/// creation date.
///
/// Returns `(tasks, skipped_count)` on success.
pub fn import_csv(path: &Path) -> Result<(Vec<Task>, usize)> {
    let content = std::fs::read_to_string(path)?;
    parse_csv(&content, chrono::Local::now().date_naive())
}

/// Parse CSV text into tasks.
///
/// The delimiter (comma, semicolon, tab) is auto-detected and headers are
/// matched loosely. Only a title column is required. Dependencies are given
/// as `|`-separated titles of other rows and resolved once every row is read.
pub fn parse_csv(content: &str, today: NaiveDate) -> Result<(Vec<Task>, usize)> {
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns: Vec<Option<Column>> = headers.iter().map(header_to_column).collect();

    if !columns.contains(&Some(Column::Title)) {
        return Err(Error::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut tasks: Vec<Task> = Vec::new();
    let mut dependency_names: Vec<Vec<String>> = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = i + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(row, error = %e, "skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        let field = |wanted: Column| {
            columns
                .iter()
                .position(|c| *c == Some(wanted))
                .and_then(|idx| record.get(idx))
                .filter(|s| !s.is_empty())
        };

        let Some(title) = field(Column::Title) else {
            skipped += 1;
            continue;
        };

        let created_at = match field(Column::Created) {
            Some(raw) => parse_date(raw).unwrap_or_else(|| {
                tracing::warn!(row, value = raw, "invalid created date, using today");
                today
            }),
            None => today,
        };

        let mut task = Task::new(title, created_at)
            .with_status(field(Column::Status).map(TaskStatus::parse_lenient).unwrap_or_default())
            .with_priority(field(Column::Priority).map(TaskPriority::parse_lenient).unwrap_or_default());

        if let Some(raw) = field(Column::Due) {
            match parse_date(raw) {
                Some(due) => task.due_date = Some(due),
                None => tracing::warn!(row, value = raw, "invalid due date, ignoring"),
            }
        }

        let deps = field(Column::DependsOn)
            .map(|raw| {
                raw.split(DEPENDENCY_SEPARATOR)
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        dependency_names.push(deps);
        tasks.push(task);
    }

    if tasks.is_empty() {
        return Err(Error::EmptyImport { skipped });
    }

    // Second pass: resolve dependency titles to ids.
    let name_to_id: HashMap<String, uuid::Uuid> = tasks
        .iter()
        .map(|t| (t.title.to_lowercase(), t.id))
        .collect();

    for (task, names) in tasks.iter_mut().zip(&dependency_names) {
        for name in names {
            match name_to_id.get(name) {
                Some(&id) => task.add_dependency(id),
                None => {
                    tracing::warn!(task = %task.title, dependency = %name, "dependency not found in CSV")
                }
            }
        }
    }

    Ok((tasks, skipped))
}

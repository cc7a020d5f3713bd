use chrono::{Duration, NaiveDate};

use crate::config::DurationTable;
use crate::model::Task;

/// A start/end pair with the duration that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration_days: u32,
}

impl Span {
    /// A span of `duration_days` beginning on `start`. Near the end of the
    /// calendar the span is slid back so it still fits.
    pub fn starting(start: NaiveDate, duration_days: u32) -> Self {
        let days = i64::from(duration_days);
        let end = shift(start, days);
        Self {
            start: shift(end, -days),
            end,
            duration_days,
        }
    }

    /// A span of `duration_days` finishing on `end`. Near the start of the
    /// calendar the span is slid forward so it still fits.
    pub fn ending(end: NaiveDate, duration_days: u32) -> Self {
        let days = i64::from(duration_days);
        let start = shift(end, -days);
        Self {
            start,
            end: shift(start, days),
            duration_days,
        }
    }
}

/// `date` moved by `days`, saturating at `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Place a task on its own, ignoring every other task.
///
/// Tasks with a due date end on it; the rest start on their creation date.
pub fn build_naive(task: &Task, durations: &DurationTable) -> Span {
    let days = durations.days_for(task.priority);
    match task.due_date {
        Some(due) => Span::ending(due, days),
        None => Span::starting(task.created_at, days),
    }
}

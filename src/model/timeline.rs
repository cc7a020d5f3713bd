use chrono::NaiveDate;
use serde::Serialize;

/// Horizontal placement of a task bar, as percentages of the grid width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarPosition {
    pub left_percent: f32,
    pub width_percent: f32,
}

impl BarPosition {
    /// Fallback used when there is no grid to measure against.
    pub const FULL: BarPosition = BarPosition {
        left_percent: 0.0,
        width_percent: 100.0,
    };
}

/// Consecutive calendar days covered by the timeline, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TimelineGrid {
    days: Vec<NaiveDate>,
}

impl TimelineGrid {
    /// Upper bound on the number of days in a grid (about a century).
    pub const MAX_DAYS: usize = 36_525;

    /// Every day from `start` to `end`, inclusive. Reversed bounds are
    /// swapped. Ranges longer than `MAX_DAYS` are cut after `MAX_DAYS` days.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let span = usize::try_from((end - start).num_days()).unwrap_or(0);
        let mut days = Vec::with_capacity(span.saturating_add(1).min(Self::MAX_DAYS));
        let mut day = start;
        loop {
            days.push(day);
            if day >= end || days.len() >= Self::MAX_DAYS {
                break;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        Self { days }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day index of `date` from the start of the grid (may be negative or
    /// past the end).
    pub fn offset_of(&self, date: NaiveDate) -> Option<i64> {
        self.first().map(|start| (date - start).num_days())
    }
}

use chrono::NaiveDate;

use super::naive::{shift, Span};
use crate::config::SchedulerConfig;
use crate::model::TimelineGrid;

/// Build the day grid for the timeline.
///
/// The base window is the declared project range when both ends are known,
/// otherwise the spread of task due dates, otherwise `default_window_days`
/// from `today`. It is then widened to hold every resolved span plus
/// `grid_padding_days` on each side.
pub fn build_grid(
    declared: Option<(NaiveDate, NaiveDate)>,
    due_dates: impl IntoIterator<Item = NaiveDate>,
    spans: &[Span],
    today: NaiveDate,
    config: &SchedulerConfig,
) -> TimelineGrid {
    let (mut lo, mut hi) = declared
        .map(|(start, end)| (start.min(end), start.max(end)))
        .or_else(|| min_max(due_dates))
        .unwrap_or_else(|| (today, shift(today, i64::from(config.default_window_days))));

    if let (Some(first), Some(last)) = (
        spans.iter().map(|s| s.start).min(),
        spans.iter().map(|s| s.end).max(),
    ) {
        let pad = i64::from(config.grid_padding_days);
        lo = lo.min(shift(first, -pad));
        hi = hi.max(shift(last, pad));
    }

    let wanted = (hi - lo).num_days();
    if wanted >= TimelineGrid::MAX_DAYS as i64 {
        tracing::warn!(
            from = %lo,
            to = %hi,
            kept = TimelineGrid::MAX_DAYS,
            "timeline range too wide, truncating grid"
        );
    }

    TimelineGrid::between(lo, hi)
}

fn min_max(dates: impl IntoIterator<Item = NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    dates.into_iter().fold(None, |acc, d| match acc {
        None => Some((d, d)),
        Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
    })
}

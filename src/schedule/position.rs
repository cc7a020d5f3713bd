use chrono::NaiveDate;

use crate::model::{BarPosition, ScheduledTask, TimelineGrid};

/// Place a task bar on the grid as left offset and width percentages.
pub fn position(task: &ScheduledTask, grid: &TimelineGrid) -> BarPosition {
    bar_position(task.start_date, task.duration_days, grid)
}

/// Bars that start before the grid are clamped to its left edge.
pub fn bar_position(start: NaiveDate, duration_days: u32, grid: &TimelineGrid) -> BarPosition {
    let Some(offset) = grid.offset_of(start) else {
        return BarPosition::FULL;
    };
    let total = grid.len() as f32;
    let offset_days = offset.max(0) as f32;
    let width_days = duration_days.max(1) as f32;

    BarPosition {
        left_percent: offset_days / total * 100.0,
        width_percent: width_days / total * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grid() -> TimelineGrid {
        // Ten days: 1st..=10th.
        TimelineGrid::between(day(2024, 1, 1), day(2024, 1, 10))
    }

    #[test]
    fn offset_and_width_are_fractions_of_the_grid() {
        let pos = bar_position(day(2024, 1, 3), 5, &grid());
        assert_eq!(pos.left_percent, 20.0);
        assert_eq!(pos.width_percent, 50.0);
    }

    #[test]
    fn start_before_grid_clamps_to_zero() {
        let pos = bar_position(day(2023, 12, 25), 2, &grid());
        assert_eq!(pos.left_percent, 0.0);
        assert_eq!(pos.width_percent, 20.0);
    }

    #[test]
    fn zero_duration_still_gets_a_day() {
        let pos = bar_position(day(2024, 1, 1), 0, &grid());
        assert_eq!(pos.width_percent, 10.0);
    }

    #[test]
    fn empty_grid_is_full_width() {
        let pos = bar_position(day(2024, 1, 1), 3, &TimelineGrid::default());
        assert_eq!(pos, BarPosition::FULL);
    }
}

use crate::model::{ColorTag, TaskPriority, TaskStatus};

/// Estimated working duration in days for a task of the given priority.
/// Urgent work is assumed to be small, low-priority work to drag on.
pub fn estimate_duration(priority: TaskPriority) -> u32 {
    match priority {
        TaskPriority::Urgent => 1,
        TaskPriority::High => 3,
        TaskPriority::Medium => 7,
        TaskPriority::Low => 14,
    }
}

/// Map a status to a completion percentage (0 – 100).
pub fn progress_percent(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 50,
        TaskStatus::InReview => 80,
        TaskStatus::Done => 100,
        TaskStatus::Blocked => 0,
    }
}

pub fn status_color(status: TaskStatus) -> ColorTag {
    match status {
        TaskStatus::Todo => ColorTag::Gray,
        TaskStatus::InProgress => ColorTag::Blue,
        TaskStatus::InReview => ColorTag::Amber,
        TaskStatus::Done => ColorTag::Green,
        TaskStatus::Blocked => ColorTag::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_by_priority() {
        assert_eq!(estimate_duration(TaskPriority::Urgent), 1);
        assert_eq!(estimate_duration(TaskPriority::High), 3);
        assert_eq!(estimate_duration(TaskPriority::Medium), 7);
        assert_eq!(estimate_duration(TaskPriority::Low), 14);
    }

    #[test]
    fn unrecognised_priority_text_gets_default_duration() {
        assert_eq!(estimate_duration(TaskPriority::parse_lenient("someday")), 7);
    }

    #[test]
    fn progress_by_status() {
        assert_eq!(progress_percent(TaskStatus::Todo), 0);
        assert_eq!(progress_percent(TaskStatus::InProgress), 50);
        assert_eq!(progress_percent(TaskStatus::InReview), 80);
        assert_eq!(progress_percent(TaskStatus::Done), 100);
        assert_eq!(progress_percent(TaskStatus::Blocked), 0);
    }

    #[test]
    fn every_status_has_a_distinct_color() {
        let mut colors: Vec<ColorTag> = TaskStatus::all().iter().map(|s| status_color(*s)).collect();
        colors.dedup();
        assert_eq!(colors.len(), TaskStatus::all().len());
    }
}

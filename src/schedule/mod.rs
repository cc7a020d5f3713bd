//! The scheduling pipeline: naive placement, dependency resolution, grid
//! generation and bar positioning.
//!
//! Every call recomputes the whole schedule from the project; nothing is
//! cached between runs.

pub mod estimate;
pub mod grid;
pub mod naive;
pub mod position;
pub mod resolve;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::SchedulerConfig;
use crate::model::{BarPosition, Project, ScheduledTask, TimelineGrid};

pub use estimate::{estimate_duration, progress_percent, status_color};
pub use position::position;

/// A computed timeline: tasks sorted by `(level, start_date)` and the day
/// grid they are laid out on.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub tasks: Vec<ScheduledTask>,
    pub grid: TimelineGrid,
}

impl Schedule {
    pub fn get(&self, id: Uuid) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, task: &ScheduledTask) -> BarPosition {
        position::position(task, &self.grid)
    }

    /// Highest dependency level in the schedule, if there are any tasks.
    pub fn max_level(&self) -> Option<u32> {
        self.tasks.iter().map(|t| t.level).max()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Schedule against the local calendar date.
    pub fn schedule(&self, project: &Project) -> Schedule {
        self.schedule_on(project, chrono::Local::now().date_naive())
    }

    /// Schedule with an explicit "today", which only matters for the grid
    /// fallback window when nothing in the project carries a date.
    pub fn schedule_on(&self, project: &Project, today: NaiveDate) -> Schedule {
        let tasks = &project.tasks;
        let naive = tasks
            .iter()
            .map(|t| naive::build_naive(t, &self.config.durations))
            .collect();
        let resolution =
            resolve::resolve_dependencies(tasks, naive, self.config.dependency_buffer_days);

        let grid = grid::build_grid(
            project.declared_range(),
            tasks.iter().filter_map(|t| t.due_date),
            &resolution.spans,
            today,
            &self.config,
        );

        let mut scheduled: Vec<ScheduledTask> = tasks
            .iter()
            .zip(&resolution.spans)
            .zip(&resolution.levels)
            .map(|((task, span), &level)| ScheduledTask {
                id: task.id,
                title: task.title.clone(),
                status: task.status,
                priority: task.priority,
                start_date: span.start,
                end_date: span.end,
                duration_days: span.duration_days,
                progress_percent: progress_percent(task.status),
                level,
                color: status_color(task.status),
            })
            .collect();
        scheduled.sort_by(|a, b| {
            a.level
                .cmp(&b.level)
                .then_with(|| a.start_date.cmp(&b.start_date))
        });

        let schedule = Schedule {
            tasks: scheduled,
            grid,
        };
        tracing::debug!(
            project = %project.name,
            tasks = schedule.tasks.len(),
            days = schedule.grid.len(),
            max_level = ?schedule.max_level(),
            cycle_edges = resolution.cycle_edges,
            dangling = resolution.dangling,
            "schedule computed"
        );
        schedule
    }
}

/// Schedule `project` with the default configuration.
pub fn schedule(project: &Project) -> Schedule {
    Scheduler::default().schedule(project)
}

//! Dependency-aware timeline scheduling for Gantt-style project views.
//!
//! Given a project's tasks (priority, optional due date, dependencies,
//! status) the [`Scheduler`] derives a start and end date, a dependency
//! level and a progress value for each task, plus a day grid and bar
//! positions for rendering. Scheduling never fails: missing dates fall back
//! to defaults, unknown dependency ids are ignored and cycles are cut.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod schedule;

pub use config::{DurationTable, SchedulerConfig};
pub use error::{Error, Result};
pub use model::{
    BarPosition, ColorTag, Project, ScheduledTask, Task, TaskPriority, TaskStatus, TimelineGrid,
};
pub use schedule::{
    estimate_duration, position, progress_percent, schedule, status_color, Schedule, Scheduler,
};

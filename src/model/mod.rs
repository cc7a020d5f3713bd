pub mod project;
pub mod task;
pub mod timeline;

pub use project::Project;
pub use task::{ColorTag, ScheduledTask, Task, TaskPriority, TaskStatus};
pub use timeline::{BarPosition, TimelineGrid};

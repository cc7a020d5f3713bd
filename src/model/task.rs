use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    InReview,
    Done,
    Blocked,
}

impl TaskStatus {
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::InReview,
            TaskStatus::Done,
            TaskStatus::Blocked,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InReview => "In Review",
            TaskStatus::Done => "Done",
            TaskStatus::Blocked => "Blocked",
        }
    }

    /// Lenient parse used by importers. Unknown text is treated as `Todo`.
    pub fn parse_lenient(s: &str) -> Self {
        match normalize(s).as_str() {
            "inprogress" | "active" | "started" | "doing" => TaskStatus::InProgress,
            "inreview" | "review" | "reviewing" => TaskStatus::InReview,
            "done" | "finished" | "complete" | "completed" | "closed" => TaskStatus::Done,
            "blocked" | "onhold" | "stuck" => TaskStatus::Blocked,
            _ => TaskStatus::Todo,
        }
    }
}

/// Task priority. Drives the duration estimate when scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn all() -> &'static [TaskPriority] {
        &[
            TaskPriority::Low,
            TaskPriority::Medium,
            TaskPriority::High,
            TaskPriority::Urgent,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Urgent => "Urgent",
        }
    }

    /// Lenient parse used by importers. Anything unrecognised falls back to
    /// `Medium`, which keeps the default duration estimate.
    pub fn parse_lenient(s: &str) -> Self {
        match normalize(s).as_str() {
            "low" | "minor" => TaskPriority::Low,
            "high" | "major" => TaskPriority::High,
            "urgent" | "critical" | "blocker" => TaskPriority::Urgent,
            _ => TaskPriority::Medium,
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Cosmetic colour derived from a task's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTag {
    Gray,
    Blue,
    Amber,
    Green,
    Red,
}

impl ColorTag {
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ColorTag::Gray => [156, 163, 175],
            ColorTag::Blue => [59, 130, 246],
            ColorTag::Amber => [245, 158, 11],
            ColorTag::Green => [34, 197, 94],
            ColorTag::Red => [239, 68, 68],
        }
    }

    /// `#rrggbb` form for web-style renderers.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// A unit of work as owned by the task-management side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    /// Ids of tasks this one cannot start before. May reference ids that
    /// are not part of the project.
    #[serde(default)]
    pub dependencies: Vec<Uuid>,
}

impl Task {
    /// Create a new task with sensible defaults.
    pub fn new(title: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            due_date: None,
            created_at,
            dependencies: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Add a prerequisite. Duplicates are ignored.
    pub fn depends_on(mut self, id: Uuid) -> Self {
        self.add_dependency(id);
        self
    }

    pub fn add_dependency(&mut self, id: Uuid) {
        if !self.dependencies.contains(&id) {
            self.dependencies.push(id);
        }
    }
}

/// A task placed on the timeline. Produced fresh by every scheduling pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledTask {
    pub id: Uuid,
    pub title: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Always at least one day.
    pub duration_days: u32,
    /// 0 to 100, derived from `status` only.
    pub progress_percent: u8,
    /// Dependency depth: 0 for tasks with no (resolvable) prerequisites.
    pub level: u32,
    pub color: ColorTag,
}

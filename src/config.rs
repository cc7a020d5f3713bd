//! Scheduler tuning knobs, optionally read from a TOML file in the OS
//! config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::TaskPriority;
use crate::schedule::estimate::estimate_duration;

const CONFIG_FILE: &str = "scheduler.toml";

/// Longest duration a single task can be estimated at (ten years).
pub const MAX_DURATION_DAYS: u32 = 3_650;

/// Estimated duration in days per priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationTable {
    pub urgent: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            urgent: estimate_duration(TaskPriority::Urgent),
            high: estimate_duration(TaskPriority::High),
            medium: estimate_duration(TaskPriority::Medium),
            low: estimate_duration(TaskPriority::Low),
        }
    }
}

impl DurationTable {
    /// Duration for `priority`, clamped to `1..=MAX_DURATION_DAYS`.
    pub fn days_for(&self, priority: TaskPriority) -> u32 {
        let days = match priority {
            TaskPriority::Urgent => self.urgent,
            TaskPriority::High => self.high,
            TaskPriority::Medium => self.medium,
            TaskPriority::Low => self.low,
        };
        days.clamp(1, MAX_DURATION_DAYS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Gap enforced between a prerequisite's end and its dependent's start.
    pub dependency_buffer_days: u32,
    /// Days added on both sides of the task extents when building the grid.
    pub grid_padding_days: u32,
    /// Length of the fallback window when nothing carries a date.
    pub default_window_days: u32,
    pub durations: DurationTable,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            dependency_buffer_days: 1,
            grid_padding_days: 7,
            default_window_days: 30,
            durations: DurationTable::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load `scheduler.toml` from the config directory, or defaults if it is
    /// absent or unreadable.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no scheduler config, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load scheduler config, using defaults");
                Self::default()
            }
        }
    }

    pub fn config_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "TaskTimeline") {
            proj_dirs.config_dir().join(CONFIG_FILE)
        } else {
            PathBuf::from(".").join(CONFIG_FILE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_estimator() {
        let config = SchedulerConfig::default();
        assert_eq!(config.dependency_buffer_days, 1);
        assert_eq!(config.grid_padding_days, 7);
        assert_eq!(config.default_window_days, 30);
        assert_eq!(config.durations.days_for(TaskPriority::Urgent), 1);
        assert_eq!(config.durations.days_for(TaskPriority::High), 3);
        assert_eq!(config.durations.days_for(TaskPriority::Medium), 7);
        assert_eq!(config.durations.days_for(TaskPriority::Low), 14);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SchedulerConfig::from_toml(
            r#"
            grid_padding_days = 3

            [durations]
            low = 21
            "#,
        )
        .unwrap();
        assert_eq!(config.grid_padding_days, 3);
        assert_eq!(config.dependency_buffer_days, 1);
        assert_eq!(config.durations.low, 21);
        assert_eq!(config.durations.high, 3);
    }

    #[test]
    fn zero_duration_is_clamped() {
        let table = DurationTable {
            urgent: 0,
            ..Default::default()
        };
        assert_eq!(table.days_for(TaskPriority::Urgent), 1);
    }

    #[test]
    fn huge_duration_is_capped() {
        let config = SchedulerConfig::from_toml("[durations]\nmedium = 4000000000\n").unwrap();
        assert_eq!(config.durations.medium, 4_000_000_000);
        assert_eq!(config.durations.days_for(TaskPriority::Medium), MAX_DURATION_DAYS);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(SchedulerConfig::from_toml("grid_padding_days = \"wide\"").is_err());
    }
}

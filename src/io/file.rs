use std::path::Path;

use crate::error::Result;
use crate::model::Project;

/// Save a project to a JSON file.
pub fn save_project(project: &Project, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(project)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a project from a JSON file.
pub fn load_project(path: &Path) -> Result<Project> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Task, TaskPriority};
    use chrono::NaiveDate;

    #[test]
    fn save_then_load_keeps_tasks_and_dependencies() {
        let created = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = Task::new("Design", created).with_priority(TaskPriority::High);
        let b = Task::new("Build", created).depends_on(a.id);
        let project = Project::new("Roundtrip")
            .with_range(created, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .with_tasks(vec![a, b]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");
        save_project(&project, &path).unwrap();
        let loaded = load_project(&path).unwrap();

        assert_eq!(loaded.name, project.name);
        assert_eq!(loaded.declared_range(), project.declared_range());
        assert_eq!(loaded.tasks, project.tasks);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_project(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn garbage_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_project(&path).unwrap_err(), Error::Json(_)));
    }
}

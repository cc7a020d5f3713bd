use thiserror::Error;

/// Errors from the file surfaces (project files, CSV, configuration).
/// Scheduling itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("CSV is missing required columns. Found headers: {found:?}. Need a column for the task title.")]
    MissingColumns { found: Vec<String> },

    #[error("No valid tasks found in CSV ({skipped} rows skipped)")]
    EmptyImport { skipped: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", Error::EmptyImport { skipped: 3 }),
            "No valid tasks found in CSV (3 rows skipped)"
        );
        let err = Error::MissingColumns {
            found: vec!["Start".to_string()],
        };
        assert!(err.to_string().contains("[\"Start\"]"));
    }
}

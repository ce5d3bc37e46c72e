//! Board file: a TOML description of tasks to create at start-up.
//!
//! ```toml
//! [config]
//! format = "text"
//!
//! [[task]]
//! key = "schema"
//! description = "Design schema"
//! priority = 2
//!
//! [[task]]
//! key = "api"
//! description = "Build API"
//! priority = 1
//! after = ["schema"]
//! ```
//!
//! The file is only read, never written back.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use taskflow_core::ports::Clock;
use taskflow_core::{Priority, TaskId, TaskManager};

use crate::errors::{CliError, Result};
use crate::render::OutputFormat;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardFile {
    #[serde(default)]
    pub config: BoardConfig,

    #[serde(default)]
    pub task: Vec<TaskEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Listing format when `--format` is not given.
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskEntry {
    /// Name other entries use in `after`.
    pub key: String,
    pub description: String,
    pub priority: i64,

    /// Keys of tasks this one waits for.
    #[serde(default)]
    pub after: Vec<String>,
}

/// Read and validate a board file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<BoardFile> {
    let contents = fs::read_to_string(path)?;
    parse_board(&contents)
}

/// Parse TOML and check keys and `after` references.
pub fn parse_board(contents: &str) -> Result<BoardFile> {
    let board: BoardFile = toml::from_str(contents)?;
    validate(&board)?;
    Ok(board)
}

fn validate(board: &BoardFile) -> Result<()> {
    let mut keys = HashSet::new();
    for entry in &board.task {
        if !keys.insert(entry.key.as_str()) {
            return Err(CliError::ConfigError(format!(
                "duplicate task key '{}'",
                entry.key
            )));
        }
    }

    for entry in &board.task {
        for dep in &entry.after {
            if !keys.contains(dep.as_str()) {
                return Err(CliError::ConfigError(format!(
                    "task '{}' has unknown dependency '{}' in `after`",
                    entry.key, dep
                )));
            }
        }
    }
    Ok(())
}

/// Create the file's tasks in order, then add their dependencies.
///
/// Returns the id assigned to each key. A dependency cycle is reported as a
/// warning only; the tasks on it will simply never start.
pub fn seed<C: Clock>(board: &BoardFile, manager: &mut TaskManager<C>) -> HashMap<String, TaskId> {
    let mut ids = HashMap::with_capacity(board.task.len());
    for entry in &board.task {
        let id = manager.create_task(entry.description.clone(), Priority::new(entry.priority));
        ids.insert(entry.key.clone(), id);
    }

    for entry in &board.task {
        let Some(&task) = ids.get(&entry.key) else {
            continue;
        };
        for dep in &entry.after {
            if let Some(&depends_on) = ids.get(dep) {
                manager.add_dependency(task, depends_on);
            }
        }
    }

    if let Some(cycle) = manager.find_cycle() {
        let path: Vec<String> = cycle.iter().map(TaskId::to_string).collect();
        warn!(cycle = %path.join(" -> "), "board file contains a dependency cycle");
    }
    info!(tasks = ids.len(), "board file loaded");
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use taskflow_core::ports::FixedClock;

    const SAMPLE: &str = r#"
[config]
format = "json"

[[task]]
key = "schema"
description = "Design schema"
priority = 2

[[task]]
key = "api"
description = "Build API"
priority = 1
after = ["schema"]
"#;

    fn manager() -> TaskManager<FixedClock> {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        TaskManager::with_clock(FixedClock::new(at))
    }

    #[test]
    fn parses_sample_board() {
        let board = parse_board(SAMPLE).unwrap();
        assert_eq!(board.config.format, Some(OutputFormat::Json));
        assert_eq!(board.task.len(), 2);
        assert_eq!(board.task[1].after, vec!["schema".to_string()]);
    }

    #[test]
    fn empty_file_is_an_empty_board() {
        let board = parse_board("").unwrap();
        assert!(board.task.is_empty());
        assert_eq!(board.config.format, None);
    }

    #[test]
    fn rejects_unknown_dependency() {
        let err = parse_board(
            r#"
[[task]]
key = "a"
description = "A"
priority = 1
after = ["ghost"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ConfigError(msg) if msg.contains("ghost")));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = parse_board(
            r#"
[[task]]
key = "a"
description = "A"
priority = 1

[[task]]
key = "a"
description = "again"
priority = 2
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ConfigError(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn rejects_non_integer_priority() {
        let err = parse_board(
            r#"
[[task]]
key = "a"
description = "A"
priority = "high"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::TomlError(_)));
    }

    #[test]
    fn seed_creates_tasks_and_edges() {
        let board = parse_board(SAMPLE).unwrap();
        let mut manager = manager();

        let ids = seed(&board, &mut manager);

        let schema = ids["schema"];
        let api = ids["api"];
        assert_eq!(manager.dependencies_of(api), &[schema]);
        assert_eq!(manager.start_next(), Some(schema));
        assert_eq!(manager.start_next(), None);
    }

    #[test]
    fn seed_accepts_cycles() {
        let board = parse_board(
            r#"
[[task]]
key = "a"
description = "A"
priority = 1
after = ["b"]

[[task]]
key = "b"
description = "B"
priority = 1
after = ["a"]
"#,
        )
        .unwrap();
        let mut manager = manager();

        seed(&board, &mut manager);

        assert!(manager.has_cycle());
        assert_eq!(manager.start_next(), None);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let board = load_from_path(file.path()).unwrap();
        assert_eq!(board.task[0].key, "schema");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::IoError(_)));
    }
}

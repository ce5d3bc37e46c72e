//! Status - plain-data views of a board for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::domain::{Priority, Task, TaskId, TaskStatus};

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: TaskId,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            description: task.description().to_string(),
            priority: task.priority(),
            status: task.status(),
        }
    }
}

/// Contents of the three visible stores, each in store order.
///
/// `completed` runs bottom to top, so its first entry is the oldest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pending: Vec<TaskView>,
    pub in_progress: Vec<TaskView>,
    pub completed: Vec<TaskView>,
}

impl BoardSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCounts {
    /// Task records ever created, deleted ones included.
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Tasks in the priority index, deleted ones included.
    pub indexed: usize,
    /// Vertices in the dependency graph, deleted ones included.
    pub vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_with_snake_case_status() {
        let snapshot = BoardSnapshot {
            pending: vec![],
            in_progress: vec![TaskView {
                id: TaskId::new(7),
                description: "ship".to_string(),
                priority: Priority::new(1),
                status: TaskStatus::InProgress,
            }],
            completed: vec![],
        };

        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["in_progress"][0]["id"], 7);
        assert_eq!(value["in_progress"][0]["status"], "in_progress");
        assert_eq!(value["pending"], serde_json::json!([]));
    }
}

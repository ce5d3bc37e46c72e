use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{Keyed, TaskId};
use crate::error::TaskflowError;

/// Task priority. Lower values sort first in the priority index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(i64);

impl Priority {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Priority {
    type Err = TaskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Priority)
            .map_err(|_| TaskflowError::InvalidPriority(s.to_string()))
    }
}

/// Where a task currently sits.
///
/// State transitions:
/// - Pending -> InProgress -> Completed
///
/// There is no way back, and no state can be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Waiting in the pending list.
    Pending,

    /// Started; sits in the in-progress queue.
    InProgress,

    /// Finished; sits on the completed stack until deleted.
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A unit of work tracked by the board.
///
/// Only `status` changes after creation, and only the task manager changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    priority: Priority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl Task {
    /// A freshly submitted task, always `Pending`.
    pub fn new(
        id: TaskId,
        description: impl Into<String>,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            priority,
            status: TaskStatus::Pending,
            created_at,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn mark_in_progress(&mut self) {
        self.status = TaskStatus::InProgress;
    }

    pub(crate) fn mark_completed(&mut self) {
        self.status = TaskStatus::Completed;
    }
}

impl Keyed for Task {
    fn key(&self) -> TaskId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn task() -> Task {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Task::new(TaskId::new(1), "write docs", Priority::new(3), at)
    }

    #[test]
    fn new_task_starts_pending() {
        let task = task();
        assert_eq!(task.status(), TaskStatus::Pending);
        assert_eq!(task.description(), "write docs");
        assert_eq!(task.priority(), Priority::new(3));
        assert_eq!(task.key(), TaskId::new(1));
    }

    #[test]
    fn status_moves_forward() {
        let mut task = task();
        task.mark_in_progress();
        assert_eq!(task.status(), TaskStatus::InProgress);
        task.mark_completed();
        assert_eq!(task.status(), TaskStatus::Completed);
    }

    #[rstest]
    #[case::positive("5", 5)]
    #[case::negative("-2", -2)]
    #[case::whitespace(" 10 ", 10)]
    fn priority_parses_integers(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(input.parse::<Priority>(), Ok(Priority::new(expected)));
    }

    #[rstest]
    #[case::empty("")]
    #[case::float("1.5")]
    #[case::word("high")]
    fn priority_rejects_non_integers(#[case] input: &str) {
        assert_eq!(
            input.parse::<Priority>(),
            Err(TaskflowError::InvalidPriority(input.to_string()))
        );
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(TaskStatus::InProgress.to_string(), "in progress");
    }
}

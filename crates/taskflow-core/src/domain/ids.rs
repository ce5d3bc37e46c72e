//! Task identifiers.
//!
//! A `TaskId` is an integer derived from the creation timestamp in
//! milliseconds (see [`crate::ports::TimestampIdGenerator`]). Ids are
//! strictly increasing within a board and never reused, so sorting by id is
//! sorting by creation order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaskflowError;

const PREFIX: &str = "task-";

/// Identifier of a task.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = TaskflowError;

    /// Accepts both the display form (`task-42`) and a bare number (`42`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(PREFIX).unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| TaskflowError::InvalidTaskId(s.to_string()))
    }
}

/// Anything a store can look up by task id.
///
/// The board keeps bare `TaskId`s in its stores, but the stores work just as
/// well holding whole [`crate::domain::Task`] values.
pub trait Keyed {
    fn key(&self) -> TaskId;
}

impl Keyed for TaskId {
    fn key(&self) -> TaskId {
        *self
    }
}

//! Board - the context object owning every structure of one session.

use std::collections::HashMap;

use crate::domain::{Task, TaskId};
use crate::store::{CompletedStack, DependencyGraph, InProgressQueue, PendingList, PriorityIndex};

/// All state of one task board.
///
/// Design:
/// - `records` is the single source of truth for task data.
/// - The stores and the index hold `TaskId`s only.
/// - A task id is in at most one of pending / in-progress / completed, and
///   which one mirrors the record's status.
/// - `records`, `priority` and `graph` keep every task ever created.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub(crate) records: HashMap<TaskId, Task>,
    pub(crate) pending: PendingList<TaskId>,
    pub(crate) in_progress: InProgressQueue<TaskId>,
    pub(crate) completed: CompletedStack<TaskId>,
    pub(crate) priority: PriorityIndex<TaskId>,
    pub(crate) graph: DependencyGraph,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.records.get(&id)
    }

    pub fn pending(&self) -> &PendingList<TaskId> {
        &self.pending
    }

    pub fn in_progress(&self) -> &InProgressQueue<TaskId> {
        &self.in_progress
    }

    pub fn completed(&self) -> &CompletedStack<TaskId> {
        &self.completed
    }

    pub fn priority_index(&self) -> &PriorityIndex<TaskId> {
        &self.priority
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Number of task records ever created.
    pub fn total_tasks(&self) -> usize {
        self.records.len()
    }

    /// True when every dependency of `id` sits on the completed stack.
    pub(crate) fn dependencies_completed(&self, id: TaskId) -> bool {
        self.graph
            .adjacent(id)
            .iter()
            .all(|dep| self.completed.contains(*dep))
    }

    /// Look up records for `ids`, keeping their order.
    pub(crate) fn resolve<'a>(
        &'a self,
        ids: impl IntoIterator<Item = &'a TaskId>,
    ) -> Vec<&'a Task> {
        ids.into_iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }
}

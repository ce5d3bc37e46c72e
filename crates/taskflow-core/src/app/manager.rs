//! TaskManager - the orchestrator moving tasks between stores.
//!
//! Every operation runs to completion synchronously. None of them fail:
//! empty stores, unknown ids and ineligible tasks turn the call into a no-op
//! that returns `None` (or `false`).

use tracing::{debug, info};

use super::board::Board;
use super::status::{BoardCounts, BoardSnapshot, TaskView};
use crate::domain::{Priority, Task, TaskId};
use crate::ports::{Clock, IdGenerator, SystemClock, TimestampIdGenerator};

/// Owns a [`Board`] and the id generator feeding it.
#[derive(Debug, Clone)]
pub struct TaskManager<C = SystemClock> {
    board: Board,
    ids: TimestampIdGenerator<C>,
}

impl TaskManager<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TaskManager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskManager<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            board: Board::new(),
            ids: TimestampIdGenerator::new(clock),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Submit a new task.
    ///
    /// The task lands at the end of the pending list, in the priority index
    /// and as a vertex of the dependency graph. No edges are created.
    pub fn create_task(&mut self, description: impl Into<String>, priority: Priority) -> TaskId {
        let id = self.ids.next_id();
        let task = Task::new(id, description, priority, self.ids.clock().now());

        self.board.pending.add(id);
        self.board.priority.add(priority, id);
        self.board.graph.add_vertex(id);
        info!(task = %id, %priority, description = task.description(), "task created");
        self.board.records.insert(id, task);
        id
    }

    /// Record that `task` cannot start before `depends_on` is completed.
    ///
    /// Unknown ids are ignored. Edges that close a cycle are accepted; the
    /// tasks on the cycle then never become eligible.
    pub fn add_dependency(&mut self, task: TaskId, depends_on: TaskId) -> bool {
        let added = self.board.graph.add_edge(task, depends_on);
        if added {
            debug!(task = %task, depends_on = %depends_on, "dependency added");
        } else {
            debug!(task = %task, depends_on = %depends_on, "dependency ignored: unknown task");
        }
        added
    }

    /// Start the first eligible pending task.
    ///
    /// Scans the pending list in order and moves the first task whose
    /// dependencies are all completed into the in-progress queue. At most one
    /// task moves per call.
    pub fn start_next(&mut self) -> Option<TaskId> {
        let board = &self.board;
        let Some(id) = board
            .pending
            .iter()
            .copied()
            .find(|&id| board.dependencies_completed(id))
        else {
            debug!(pending = board.pending.len(), "start_next: no eligible task");
            return None;
        };

        self.board.pending.remove(id);
        self.board.in_progress.enqueue(id);
        if let Some(task) = self.board.records.get_mut(&id) {
            task.mark_in_progress();
        }
        debug!(task = %id, "task started");
        Some(id)
    }

    /// Move the front of the in-progress queue onto the completed stack.
    pub fn finish_current(&mut self) -> Option<TaskId> {
        let Some(id) = self.board.in_progress.dequeue() else {
            debug!("finish_current: nothing in progress");
            return None;
        };

        self.board.completed.push(id);
        if let Some(task) = self.board.records.get_mut(&id) {
            task.mark_completed();
        }
        debug!(task = %id, "task finished");
        Some(id)
    }

    /// Permanently remove the oldest completed task.
    ///
    /// This takes the bottom of the completed stack, not the top. The record
    /// stays in the priority index and the dependency graph.
    pub fn delete_completed(&mut self) -> Option<TaskId> {
        let Some(&oldest) = self.board.completed.bottom() else {
            debug!("delete_completed: completed stack is empty");
            return None;
        };

        let removed = self.board.completed.remove_by_id(oldest);
        debug!(task = %oldest, "completed task deleted");
        removed
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.board.task(id)
    }

    /// Pending tasks, head of the list first.
    pub fn pending(&self) -> Vec<&Task> {
        self.board.resolve(self.board.pending.iter())
    }

    /// In-progress tasks, front of the queue first.
    pub fn in_progress(&self) -> Vec<&Task> {
        self.board.resolve(self.board.in_progress.iter())
    }

    /// Completed tasks, bottom (oldest) of the stack first.
    pub fn completed(&self) -> Vec<&Task> {
        self.board.resolve(self.board.completed.iter())
    }

    /// Every task ever created, by ascending priority.
    pub fn by_priority(&self) -> Vec<&Task> {
        self.board.resolve(self.board.priority.in_order())
    }

    pub fn dependencies_of(&self, id: TaskId) -> &[TaskId] {
        self.board.graph.adjacent(id)
    }

    /// Whether `id` is pending with every dependency completed.
    pub fn is_eligible(&self, id: TaskId) -> bool {
        self.board.pending.contains(id) && self.board.dependencies_completed(id)
    }

    pub fn has_cycle(&self) -> bool {
        self.board.graph.has_cycle()
    }

    pub fn find_cycle(&self) -> Option<Vec<TaskId>> {
        self.board.graph.find_cycle()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            pending: views(self.pending()),
            in_progress: views(self.in_progress()),
            completed: views(self.completed()),
        }
    }

    pub fn counts(&self) -> BoardCounts {
        BoardCounts {
            total: self.board.total_tasks(),
            pending: self.board.pending.len(),
            in_progress: self.board.in_progress.len(),
            completed: self.board.completed.len(),
            indexed: self.board.priority.len(),
            vertices: self.board.graph.len(),
        }
    }
}

fn views(tasks: Vec<&Task>) -> Vec<TaskView> {
    tasks.into_iter().map(TaskView::from).collect()
}

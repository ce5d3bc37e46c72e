//! taskflow-core
//!
//! In-memory task board: tasks move from pending to in progress to
//! completed, gated by a dependency graph.
//!
//! # Modules
//! - **domain**: tasks, ids, priorities, status
//! - **ports**: clock and id generation seams
//! - **store**: pending list, in-progress queue, completed stack, priority
//!   index, dependency graph
//! - **app**: the board context, the task manager and status views
//! - **error**: errors for text coercions

pub mod app;
pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use app::{Board, BoardCounts, BoardSnapshot, TaskManager, TaskView};
pub use domain::{Keyed, Priority, Task, TaskId, TaskStatus};
pub use error::TaskflowError;

//! Domain model (ids, tasks, priorities, status).

pub mod ids;
pub mod task;

pub use ids::{Keyed, TaskId};
pub use task::{Priority, Task, TaskStatus};

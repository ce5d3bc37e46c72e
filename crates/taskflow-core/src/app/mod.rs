//! App - the orchestration layer.
//!
//! # Components
//! - **Board**: context object owning the stores of one session
//! - **TaskManager**: the operations moving tasks between stores
//! - **Status**: plain-data views handed to the presentation layer

pub mod board;
pub mod manager;
pub mod status;

pub use self::board::Board;
pub use self::manager::TaskManager;
pub use self::status::{BoardCounts, BoardSnapshot, TaskView};

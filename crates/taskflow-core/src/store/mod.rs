//! Store module: the five in-memory structures a board is made of.
//!
//! The three holding stores (pending, in-progress, completed) are generic
//! over any [`Keyed`](crate::domain::Keyed) element. The board itself keeps
//! task ids in them and resolves records through its registry.

mod completed;
mod dependency;
mod in_progress;
mod pending;
mod priority;

pub use completed::CompletedStack;
pub use dependency::DependencyGraph;
pub use in_progress::InProgressQueue;
pub use pending::{Iter as PendingIter, PendingList};
pub use priority::PriorityIndex;

use thiserror::Error;

/// Errors for the text coercions the core offers.
///
/// Board operations never fail; they degrade to no-ops instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskflowError {
    #[error("invalid priority {0:?}: expected an integer")]
    InvalidPriority(String),

    #[error("invalid task id {0:?}: expected `task-<n>` or `<n>`")]
    InvalidTaskId(String),
}

//! IdGenerator port - task id allocation behind a trait.
//!
//! # Implementations
//! - **TimestampIdGenerator**: ids derived from the clock in milliseconds

use crate::domain::TaskId;
use crate::ports::Clock;

/// Hands out task ids.
///
/// Every id returned must be strictly greater than the previous one, so ids
/// are never reused.
pub trait IdGenerator {
    fn next_id(&mut self) -> TaskId;
}

/// Derives ids from the creation timestamp (milliseconds since the epoch).
///
/// When the clock has not advanced past the last id (two tasks in the same
/// millisecond, a fixed clock, or the clock stepping backwards) the next id
/// is `last + 1`.
#[derive(Debug, Clone)]
pub struct TimestampIdGenerator<C> {
    clock: C,
    last: Option<u64>,
}

impl<C: Clock> TimestampIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, last: None }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> IdGenerator for TimestampIdGenerator<C> {
    fn next_id(&mut self) -> TaskId {
        // Pre-epoch clocks clamp to zero.
        let millis = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        TaskId::new(id)
    }
}

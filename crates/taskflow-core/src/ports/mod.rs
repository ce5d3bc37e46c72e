//! Ports - seams for the things the board does not own.
//!
//! Time and id allocation sit behind traits so a board can be driven
//! deterministically in tests.

pub mod clock;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, TimestampIdGenerator};

//! Load lifecycle events.
//!
//! Provides the [`LoadObserver`] trait the loader reports through, the
//! [`LoadEvent`] message type, and ready-made observers for tests and for
//! forwarding events to another task.

mod load_event;
mod observer;

pub use load_event::*;
pub use observer::*;

//! Timer engine for the Pomodoro widget.
//!
//! - `timer`: countdown state machine with start/pause, tick and reset
//! - `schedule`: the cancellable periodic tick behind a running countdown

pub mod schedule;
pub mod timer;

pub use schedule::TickSchedule;
pub use timer::{completion_message, reset_message, TimerEngine, TimerEvent};

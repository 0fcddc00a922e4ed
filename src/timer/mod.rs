//! Timer core for the Pomodoro Timer.
//!
//! This module contains the timer state machine:
//! - `scheduler`: cycle index to interval mapping
//! - `clock`: one-second countdown with a single pending tick
//! - `controller`: orchestration, auto-chaining and persistence

pub mod clock;
pub mod controller;
pub mod scheduler;

pub use clock::{ClockEvent, CountdownClock, TICK_INTERVAL};
pub use controller::PomodoroController;
pub use scheduler::{IntervalScheduler, PlannedInterval, CYCLE_LENGTH};

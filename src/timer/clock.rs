//! Countdown clock for the Pomodoro Timer.
//!
//! This module provides the single-interval countdown:
//! - State transitions (Idle → Running ⇄ Paused → Idle)
//! - One pending tick deadline at most, withdrawn before any reschedule
//! - Event firing for ticks and completion
//!
//! The clock never sleeps or spawns. The owning event loop awaits
//! [`CountdownClock::next_tick_at`] and calls [`CountdownClock::tick`]
//! when the deadline passes.

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tracing::{debug, trace, warn};

use crate::types::ClockStatus;

/// Interval between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// ClockEvent
// ============================================================================

/// Events emitted by the clock to its observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// One second elapsed
    Tick {
        /// Remaining seconds after this tick
        remaining_seconds: u64,
    },
    /// Remaining time reached zero; the clock is idle again
    Completed,
}

// ============================================================================
// CountdownClock
// ============================================================================

/// Counts a duration down one second at a time.
pub struct CountdownClock {
    status: ClockStatus,
    remaining_seconds: u64,
    /// Deadline of the single pending tick, if any.
    next_tick: Option<Instant>,
    event_tx: mpsc::UnboundedSender<ClockEvent>,
}

impl CountdownClock {
    /// Creates an idle clock that reports to the given channel.
    pub fn new(event_tx: mpsc::UnboundedSender<ClockEvent>) -> Self {
        Self {
            status: ClockStatus::Idle,
            remaining_seconds: 0,
            next_tick: None,
            event_tx,
        }
    }

    /// Starts counting down from `duration_seconds`.
    ///
    /// Any countdown in progress is replaced.
    pub fn start(&mut self, duration_seconds: u64) {
        self.withdraw_tick();
        self.remaining_seconds = duration_seconds;
        self.status = ClockStatus::Running;
        self.schedule_tick();
        debug!("Clock started: {} seconds", duration_seconds);
    }

    /// Advances the countdown by one second.
    ///
    /// Ignored unless the clock is running. When the remaining time reaches
    /// zero the clock goes idle and emits a single `Completed` event.
    pub fn tick(&mut self) {
        if self.status != ClockStatus::Running {
            trace!("Tick ignored while {}", self.status.as_str());
            return;
        }

        self.withdraw_tick();
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.emit(ClockEvent::Tick {
            remaining_seconds: self.remaining_seconds,
        });

        if self.remaining_seconds == 0 {
            self.status = ClockStatus::Idle;
            debug!("Clock completed");
            self.emit(ClockEvent::Completed);
        } else {
            self.schedule_tick();
        }
    }

    /// Pauses a running countdown, keeping the remaining time.
    ///
    /// Returns false (and does nothing) unless the clock is running.
    pub fn pause(&mut self) -> bool {
        if self.status != ClockStatus::Running {
            return false;
        }
        self.withdraw_tick();
        self.status = ClockStatus::Paused;
        debug!("Clock paused at {} seconds", self.remaining_seconds);
        true
    }

    /// Resumes a paused countdown from the preserved remaining time.
    ///
    /// Returns false (and does nothing) unless the clock is paused.
    pub fn resume(&mut self) -> bool {
        if self.status != ClockStatus::Paused {
            return false;
        }
        self.status = ClockStatus::Running;
        self.schedule_tick();
        debug!("Clock resumed at {} seconds", self.remaining_seconds);
        true
    }

    /// Stops any countdown and returns to idle.
    pub fn cancel(&mut self) {
        self.withdraw_tick();
        self.status = ClockStatus::Idle;
        self.remaining_seconds = 0;
    }

    /// Returns the clock status.
    pub fn status(&self) -> ClockStatus {
        self.status
    }

    /// Returns the remaining seconds of the current countdown.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Returns the deadline of the pending tick.
    pub fn next_tick_at(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Returns true if a tick is scheduled.
    pub fn has_pending_tick(&self) -> bool {
        self.next_tick.is_some()
    }

    fn schedule_tick(&mut self) {
        self.next_tick = Some(Instant::now() + TICK_INTERVAL);
    }

    fn withdraw_tick(&mut self) {
        self.next_tick = None;
    }

    fn emit(&self, event: ClockEvent) {
        if self.event_tx.send(event).is_err() {
            warn!("Clock observer is gone, dropping {:?}", event);
        }
    }
}

impl std::fmt::Debug for CountdownClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownClock")
            .field("status", &self.status)
            .field("remaining_seconds", &self.remaining_seconds)
            .field("next_tick", &self.next_tick)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

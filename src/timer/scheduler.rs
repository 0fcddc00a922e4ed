//! Interval scheduling.
//!
//! Maps the 1-based cycle index to the interval that should run:
//! Focus, Short, Focus, Short, Focus, Short, Focus, Long, repeating.

use crate::types::{IntervalKind, Settings};

/// Number of intervals in one full cycle (four focus sessions with breaks).
pub const CYCLE_LENGTH: u64 = 8;

/// An interval chosen by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedInterval {
    /// Kind of the interval
    pub kind: IntervalKind,
    /// Planned duration in minutes
    pub minutes: u32,
}

impl PlannedInterval {
    /// Returns the planned duration in seconds.
    pub fn duration_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60
    }
}

/// Stateless lookup from cycle index to interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl IntervalScheduler {
    /// Returns the interval kind for a 1-based cycle index.
    pub fn kind_for(cycle_index: u64) -> IntervalKind {
        if cycle_index % CYCLE_LENGTH == 0 {
            IntervalKind::LongBreak
        } else if cycle_index % 2 == 0 {
            IntervalKind::ShortBreak
        } else {
            IntervalKind::Focus
        }
    }

    /// Returns the interval and its duration for a 1-based cycle index.
    pub fn plan(cycle_index: u64, settings: &Settings) -> PlannedInterval {
        let kind = Self::kind_for(cycle_index);
        PlannedInterval {
            kind,
            minutes: settings.minutes_for(kind),
        }
    }

    /// Returns the smallest index greater than `current` that maps to `kind`.
    ///
    /// Used when the user starts an interval by hand, so that the automatic
    /// sequence carries on from the manually chosen interval.
    pub fn next_index_for(current: u64, kind: IntervalKind) -> u64 {
        let mut candidate = current + 1;
        while Self::kind_for(candidate) != kind {
            candidate += 1;
        }
        candidate
    }
}

//! Core data types for the Pomodoro Timer.
//!
//! This module defines the data structures used for:
//! - Interval kinds and clock status
//! - The persisted settings record with validation
//! - Raw settings input coming from the front end
//! - Display state handed to the front end

use serde::{Deserialize, Serialize};

use crate::settings::SettingsError;

// ============================================================================
// IntervalKind
// ============================================================================

/// The kind of interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalKind {
    /// Work session
    Focus,
    /// Short rest after a focus session
    ShortBreak,
    /// Long rest after every fourth focus session
    LongBreak,
}

impl IntervalKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalKind::Focus => "focus",
            IntervalKind::ShortBreak => "short_break",
            IntervalKind::LongBreak => "long_break",
        }
    }

    /// Returns the label shown while this interval runs.
    pub fn label(&self) -> &'static str {
        match self {
            IntervalKind::Focus => "集中時間",
            IntervalKind::ShortBreak => "短い休憩",
            IntervalKind::LongBreak => "長い休憩",
        }
    }
}

// ============================================================================
// ClockStatus
// ============================================================================

/// Status of the countdown clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockStatus {
    /// No countdown in progress
    #[default]
    Idle,
    /// Counting down, one tick pending
    Running,
    /// Countdown suspended, remaining time preserved
    Paused,
}

impl ClockStatus {
    /// Returns the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockStatus::Idle => "idle",
            ClockStatus::Running => "running",
            ClockStatus::Paused => "paused",
        }
    }

    /// Returns the label of the start/pause toggle for this status.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ClockStatus::Idle => "スタート",
            ClockStatus::Running => "一時停止",
            ClockStatus::Paused => "再開",
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// The persisted settings record.
///
/// Field names on disk follow the flat key-value layout
/// (`work_min`, `short_break_min`, `long_break_min`, `pomodoros`).
/// Every field is required when deserializing, so a record is either
/// complete or rejected as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Focus duration in minutes
    #[serde(rename = "work_min")]
    pub work_minutes: u32,
    /// Short break duration in minutes
    #[serde(rename = "short_break_min")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes
    #[serde(rename = "long_break_min")]
    pub long_break_minutes: u32,
    /// Cumulative number of completed focus sessions
    #[serde(rename = "pomodoros")]
    pub completed_focus_sessions: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 30,
            completed_focus_sessions: 0,
        }
    }
}

impl Settings {
    /// Creates a new settings value with the specified focus duration.
    pub fn with_work_minutes(mut self, minutes: u32) -> Self {
        self.work_minutes = minutes;
        self
    }

    /// Creates a new settings value with the specified short break duration.
    pub fn with_short_break_minutes(mut self, minutes: u32) -> Self {
        self.short_break_minutes = minutes;
        self
    }

    /// Creates a new settings value with the specified long break duration.
    pub fn with_long_break_minutes(mut self, minutes: u32) -> Self {
        self.long_break_minutes = minutes;
        self
    }

    /// Creates a new settings value with the specified completed count.
    pub fn with_completed_focus_sessions(mut self, count: u32) -> Self {
        self.completed_focus_sessions = count;
        self
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidInput` naming the first duration that
    /// is not a positive number of minutes.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let durations = [
            ("work_min", self.work_minutes),
            ("short_break_min", self.short_break_minutes),
            ("long_break_min", self.long_break_minutes),
        ];
        for (field, minutes) in durations {
            if minutes == 0 {
                return Err(SettingsError::invalid_input(field, minutes.to_string()));
            }
        }
        Ok(())
    }

    /// Returns the planned duration in minutes for an interval kind.
    pub fn minutes_for(&self, kind: IntervalKind) -> u32 {
        match kind {
            IntervalKind::Focus => self.work_minutes,
            IntervalKind::ShortBreak => self.short_break_minutes,
            IntervalKind::LongBreak => self.long_break_minutes,
        }
    }
}

// ============================================================================
// SettingsInput
// ============================================================================

/// Raw text values for the four settings fields, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsInput {
    /// Focus duration in minutes, as typed
    pub work_minutes: String,
    /// Short break duration in minutes, as typed
    pub short_break_minutes: String,
    /// Long break duration in minutes, as typed
    pub long_break_minutes: String,
    /// Completed focus session count, as typed
    pub completed_focus_sessions: String,
}

impl SettingsInput {
    /// Creates an input form pre-filled with the given settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            work_minutes: settings.work_minutes.to_string(),
            short_break_minutes: settings.short_break_minutes.to_string(),
            long_break_minutes: settings.long_break_minutes.to_string(),
            completed_focus_sessions: settings.completed_focus_sessions.to_string(),
        }
    }

    /// Parses and validates every field.
    ///
    /// Nothing is returned unless all four fields are valid.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidInput` for the first field that is not
    /// a plain non-negative integer, or for a zero duration.
    pub fn parse(&self) -> Result<Settings, SettingsError> {
        let settings = Settings {
            work_minutes: parse_field("work_min", &self.work_minutes)?,
            short_break_minutes: parse_field("short_break_min", &self.short_break_minutes)?,
            long_break_minutes: parse_field("long_break_min", &self.long_break_minutes)?,
            completed_focus_sessions: parse_field("pomodoros", &self.completed_focus_sessions)?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<u32, SettingsError> {
    let trimmed = raw.trim();
    // u32::from_str accepts a leading '+', which is not a plain integer entry.
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SettingsError::invalid_input(field, raw));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| SettingsError::invalid_input(field, raw))
}

// ============================================================================
// DisplayState
// ============================================================================

/// Label shown when no interval is running.
pub const IDLE_LABEL: &str = "タイマー";

/// Mark repeated once per completed focus session.
pub const COMPLETED_MARK: char = '✔';

/// Everything the front end needs to render the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Interval label
    pub label: String,
    /// Remaining time as `MM:SS`
    pub remaining: String,
    /// Completed focus sessions, see [`completed_marks`]
    pub marks: String,
    /// Label of the start/pause toggle
    pub toggle_label: String,
    /// Clock status
    pub status: ClockStatus,
}

/// Formats a number of seconds as `MM:SS`.
///
/// Minutes are not capped, so 100 minutes renders as `100:00`.
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Largest count drawn as individual marks.
pub const MAX_DRAWN_MARKS: u32 = 20;

/// Builds the completed-session marks string.
///
/// Up to [`MAX_DRAWN_MARKS`] the mark is repeated once per session; larger
/// counts render as `✔ × N`.
pub fn completed_marks(count: u32) -> String {
    if count > MAX_DRAWN_MARKS {
        return format!("{} × {}", COMPLETED_MARK, count);
    }
    std::iter::repeat(COMPLETED_MARK)
        .take(count as usize)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

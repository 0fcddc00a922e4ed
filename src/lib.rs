//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the Pomodoro Timer CLI.
//! It includes:
//! - Interval scheduling (focus, short break, long break)
//! - A one-second countdown clock with pause/resume
//! - The controller that chains intervals and counts finished focus sessions
//! - Settings persistence in a flat JSON record
//! - Sound notifications with layered fallback
//! - CLI command parsing, the interactive session and display utilities

pub mod cli;
pub mod settings;
pub mod sound;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{ClockStatus, DisplayState, IntervalKind, Settings, SettingsInput};

pub use settings::{SettingsError, SettingsStore};

pub use timer::{
    ClockEvent, CountdownClock, IntervalScheduler, PlannedInterval, PomodoroController,
};

// Re-export sound types
pub use sound::{
    try_create_player, AudioFileCue, AudioFormat, CueStrategy, MockSoundPlayer, NotificationSink,
    RodioSoundPlayer, SoundError, SoundPlayer, TerminalBell,
};

//! Pomodoro controller.
//!
//! Ties the scheduler, the countdown clock, the settings store, and the
//! notification sink together. All mutable timer state lives here:
//! - the cycle index driving automatic interval selection
//! - the interval currently shown
//! - the in-memory settings record (mirrors the last successful save)
//!
//! Completed intervals chain into the next one automatically; the timer only
//! stops when it is paused or reset.

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

use crate::settings::{SettingsError, SettingsStore};
use crate::sound::NotificationSink;
use crate::types::{
    completed_marks, format_remaining, ClockStatus, DisplayState, IntervalKind, Settings,
    SettingsInput, IDLE_LABEL,
};

use super::clock::{ClockEvent, CountdownClock};
use super::scheduler::IntervalScheduler;

// ============================================================================
// PomodoroController
// ============================================================================

/// Orchestrates focus and break intervals.
pub struct PomodoroController {
    settings: Settings,
    store: SettingsStore,
    notifier: NotificationSink,
    clock: CountdownClock,
    clock_events: mpsc::UnboundedReceiver<ClockEvent>,
    cycle_index: u64,
    current: Option<IntervalKind>,
}

impl PomodoroController {
    /// Creates a controller with settings loaded from the store.
    pub fn new(store: SettingsStore, notifier: NotificationSink) -> Self {
        let settings = store.load();
        Self::with_settings(settings, store, notifier)
    }

    /// Creates a controller with explicit settings.
    ///
    /// The settings are not written to the store until something changes.
    pub fn with_settings(
        settings: Settings,
        store: SettingsStore,
        notifier: NotificationSink,
    ) -> Self {
        let (event_tx, clock_events) = mpsc::unbounded_channel();
        Self {
            settings,
            store,
            notifier,
            clock: CountdownClock::new(event_tx),
            clock_events,
            cycle_index: 0,
            current: None,
        }
    }

    // ------------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------------

    /// Resumes a paused interval, or starts the next one in the cycle.
    pub fn start_or_resume(&mut self) {
        if self.clock.status() == ClockStatus::Paused {
            self.clock.resume();
            info!("Resumed {}", self.current_label());
            return;
        }

        self.cycle_index += 1;
        self.begin_interval();
    }

    /// Pauses the running interval. No-op unless running.
    pub fn pause(&mut self) {
        if self.clock.pause() {
            info!("Paused with {} seconds left", self.clock.remaining_seconds());
        } else {
            debug!("Pause ignored while {}", self.clock.status().as_str());
        }
    }

    /// Start/pause toggle: pauses when running, otherwise starts or resumes.
    pub fn toggle(&mut self) {
        if self.clock.status() == ClockStatus::Running {
            self.pause();
        } else {
            self.start_or_resume();
        }
    }

    /// Stops the timer and returns to the beginning of the cycle.
    ///
    /// The completed-session counter is kept; its display is restored from
    /// the settings record.
    pub fn reset(&mut self) {
        self.clock.cancel();
        self.discard_clock_events();
        self.cycle_index = 0;
        self.current = None;
        info!("Timer reset");
    }

    /// Starts a specific interval now, bypassing the automatic choice.
    ///
    /// The cycle index jumps forward to the next slot of that kind, so the
    /// automatic sequence continues from the chosen interval.
    pub fn manual_start(&mut self, kind: IntervalKind) {
        self.clock.cancel();
        self.discard_clock_events();
        self.cycle_index = IntervalScheduler::next_index_for(self.cycle_index, kind);
        debug!("Manual start of {} at index {}", kind.as_str(), self.cycle_index);
        self.begin_interval();
    }

    /// Validates and persists new settings.
    ///
    /// New durations apply from the next interval on.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidInput` if a duration is zero, or a
    /// persistence error if the record cannot be written. In both cases the
    /// in-memory settings are left unchanged.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.store.save(&settings)?;
        self.settings = settings;
        info!(
            "Settings updated: work={} short={} long={} completed={}",
            settings.work_minutes,
            settings.short_break_minutes,
            settings.long_break_minutes,
            settings.completed_focus_sessions
        );
        Ok(())
    }

    /// Parses raw text entries and applies them as new settings.
    ///
    /// # Errors
    ///
    /// See [`SettingsInput::parse`] and [`Self::update_settings`].
    pub fn update_settings_from_input(&mut self, input: &SettingsInput) -> Result<(), SettingsError> {
        let settings = input.parse()?;
        self.update_settings(settings)
    }

    /// Sets the completed-session counter back to zero and persists it.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the record cannot be written.
    pub fn reset_completed_count(&mut self) -> Result<(), SettingsError> {
        let settings = self.settings.with_completed_focus_sessions(0);
        self.update_settings(settings)
    }

    /// Stops the clock and writes the current settings for a normal exit.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the record cannot be written.
    pub fn shutdown(&mut self) -> Result<(), SettingsError> {
        self.clock.cancel();
        self.discard_clock_events();
        self.store.save(&self.settings)?;
        info!("Settings saved on shutdown");
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Clock driving
    // ------------------------------------------------------------------------

    /// Advances the clock by one elapsed second and reacts to its events.
    pub fn tick(&mut self) {
        self.clock.tick();
        self.dispatch_clock_events();
    }

    /// Handles the end of the current interval.
    ///
    /// Plays the cue, records a finished focus session, and starts the next
    /// interval.
    pub fn on_interval_completed(&mut self) {
        let finished = self.current;
        info!("Interval completed: {}", self.current_label());

        self.notifier.notify();

        if finished == Some(IntervalKind::Focus) {
            self.settings.completed_focus_sessions =
                self.settings.completed_focus_sessions.saturating_add(1);
            if let Err(e) = self.store.save(&self.settings) {
                warn!("Failed to persist completed session count: {}", e);
            }
        }

        self.start_or_resume();
    }

    /// Returns the deadline of the pending tick, if the clock is running.
    pub fn next_tick_at(&self) -> Option<Instant> {
        self.clock.next_tick_at()
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns the number of intervals started since the last reset.
    pub fn cycle_index(&self) -> u64 {
        self.cycle_index
    }

    /// Returns the interval being shown, if any.
    pub fn current_interval(&self) -> Option<IntervalKind> {
        self.current
    }

    /// Returns the clock status.
    pub fn clock_status(&self) -> ClockStatus {
        self.clock.status()
    }

    /// Returns the remaining seconds of the current interval.
    pub fn remaining_seconds(&self) -> u64 {
        self.clock.remaining_seconds()
    }

    /// Returns true if a tick is scheduled.
    pub fn has_pending_tick(&self) -> bool {
        self.clock.has_pending_tick()
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the settings store.
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Returns everything the front end needs to render.
    pub fn display(&self) -> DisplayState {
        let status = self.clock.status();
        DisplayState {
            label: self.current_label().to_string(),
            remaining: format_remaining(self.clock.remaining_seconds()),
            marks: completed_marks(self.settings.completed_focus_sessions),
            toggle_label: status.toggle_label().to_string(),
            status,
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn begin_interval(&mut self) {
        let planned = IntervalScheduler::plan(self.cycle_index, &self.settings);
        self.current = Some(planned.kind);
        self.clock.start(planned.duration_seconds());
        info!(
            "Started {} ({} min, index {})",
            planned.kind.as_str(),
            planned.minutes,
            self.cycle_index
        );
    }

    fn dispatch_clock_events(&mut self) {
        while let Ok(event) = self.clock_events.try_recv() {
            match event {
                ClockEvent::Tick { remaining_seconds } => {
                    trace!("Tick: {} seconds left", remaining_seconds);
                }
                ClockEvent::Completed => self.on_interval_completed(),
            }
        }
    }

    fn discard_clock_events(&mut self) {
        while self.clock_events.try_recv().is_ok() {}
    }

    fn current_label(&self) -> &'static str {
        self.current.map_or(IDLE_LABEL, |kind| kind.label())
    }
}

impl std::fmt::Debug for PomodoroController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PomodoroController")
            .field("settings", &self.settings)
            .field("cycle_index", &self.cycle_index)
            .field("current", &self.current)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

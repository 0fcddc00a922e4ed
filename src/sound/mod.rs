//! Sound notifications for the Pomodoro Timer.
//!
//! This module provides the audible cue played when an interval ends:
//!
//! - Non-blocking audio file playback through rodio
//! - Layered fallback: `bell.wav`, then `bell.mp3`, then the terminal bell
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ NotificationSink │ ← Called by the controller
//! └────────┬─────────┘
//!          │ tries in order
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   AudioFileCue   │────▶│   SoundPlayer    │
//! │ (bell.wav/.mp3)  │     │ (rodio / mock)   │
//! ├──────────────────┤     └──────────────────┘
//! │   TerminalBell   │
//! └──────────────────┘
//! ```
//!
//! Failures never propagate: a cue that is unavailable or fails is logged
//! and the next one is tried.

mod cue;
mod error;
mod player;

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::{debug, warn};

pub use cue::{AudioFileCue, AudioFormat, CueStrategy, TerminalBell, BELL_FILE_STEM};
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};

/// Trait for sound playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait SoundPlayer {
    /// Plays an audio file.
    ///
    /// This method should be non-blocking; the sound plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play_file(&self, path: &Path) -> Result<(), SoundError>;

    /// Returns true if the audio system is available.
    fn is_available(&self) -> bool;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play_file(&self, path: &Path) -> Result<(), SoundError> {
        RodioSoundPlayer::play_file(self, path)
    }

    fn is_available(&self) -> bool {
        // The output stream is opened in `new`, so an existing player is usable.
        true
    }
}

/// Mock sound player for testing.
#[derive(Debug)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<PathBuf>>,
    available: AtomicBool,
    should_fail: AtomicBool,
}

impl Default for MockSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_calls: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<PathBuf> {
        self.play_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play_file(&self, path: &Path) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::Playback("mock failure".to_string()));
        }
        if let Ok(mut calls) = self.play_calls.lock() {
            calls.push(path.to_path_buf());
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

// ============================================================================
// NotificationSink
// ============================================================================

/// Plays the interval-completion cue, falling back through its cues in order.
pub struct NotificationSink {
    cues: Vec<Box<dyn CueStrategy>>,
}

impl NotificationSink {
    /// Creates a sink from an ordered list of cues.
    pub fn new(cues: Vec<Box<dyn CueStrategy>>) -> Self {
        Self { cues }
    }

    /// Creates the standard chain: `bell.wav`, `bell.mp3`, terminal bell.
    ///
    /// Audio file cues are skipped at play time when `player` is `None` or
    /// the file is missing from `sound_dir`.
    pub fn with_default_cues(sound_dir: &Path, player: Option<Rc<dyn SoundPlayer>>) -> Self {
        Self::new(vec![
            Box::new(AudioFileCue::bell(sound_dir, AudioFormat::Wav, player.clone())),
            Box::new(AudioFileCue::bell(sound_dir, AudioFormat::Mp3, player)),
            Box::new(TerminalBell),
        ])
    }

    /// Creates a sink that only rings the terminal bell.
    pub fn bell_only() -> Self {
        Self::new(vec![Box::new(TerminalBell)])
    }

    /// Creates a sink that plays nothing.
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    /// Plays the first cue that is available and succeeds.
    ///
    /// Returns the name of the cue that played, or `None` if every cue was
    /// unavailable or failed. Never returns an error.
    pub fn notify(&self) -> Option<&str> {
        for cue in &self.cues {
            if !cue.is_available() {
                debug!("Cue '{}' unavailable, skipping", cue.name());
                continue;
            }
            match cue.play() {
                Ok(()) => {
                    debug!("Played cue '{}'", cue.name());
                    return Some(cue.name());
                }
                Err(e) if e.is_file_error() => {
                    debug!("Cue '{}' failed: {}, trying next", cue.name(), e);
                }
                Err(e) => {
                    warn!("Cue '{}' failed: {}, trying next", cue.name(), e);
                }
            }
        }
        if !self.cues.is_empty() {
            warn!("No notification cue could be played");
        }
        None
    }

    /// Returns the number of configured cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Returns true if no cues are configured.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

impl std::fmt::Debug for NotificationSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.cues.iter().map(|c| c.name()).collect();
        f.debug_struct("NotificationSink")
            .field("cues", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeCue {
        name: &'static str,
        available: bool,
        fails: bool,
        plays: Rc<Cell<usize>>,
    }

    impl FakeCue {
        fn boxed(name: &'static str, available: bool, fails: bool) -> (Box<dyn CueStrategy>, Rc<Cell<usize>>) {
            let plays = Rc::new(Cell::new(0));
            let cue = Self {
                name,
                available,
                fails,
                plays: plays.clone(),
            };
            (Box::new(cue), plays)
        }
    }

    impl CueStrategy for FakeCue {
        fn name(&self) -> &str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn play(&self) -> Result<(), SoundError> {
            self.plays.set(self.plays.get() + 1);
            if self.fails {
                Err(SoundError::Playback(self.name.to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_first_available_cue_plays() {
        let (first, first_plays) = FakeCue::boxed("first", true, false);
        let (second, second_plays) = FakeCue::boxed("second", true, false);
        let sink = NotificationSink::new(vec![first, second]);

        assert_eq!(sink.notify(), Some("first"));
        assert_eq!(first_plays.get(), 1);
        assert_eq!(second_plays.get(), 0);
    }

    #[test]
    fn test_unavailable_cue_is_skipped_without_attempt() {
        let (first, first_plays) = FakeCue::boxed("first", false, false);
        let (second, second_plays) = FakeCue::boxed("second", true, false);
        let sink = NotificationSink::new(vec![first, second]);

        assert_eq!(sink.notify(), Some("second"));
        assert_eq!(first_plays.get(), 0);
        assert_eq!(second_plays.get(), 1);
    }

    #[test]
    fn test_failing_cue_falls_through() {
        let (first, first_plays) = FakeCue::boxed("first", true, true);
        let (second, _) = FakeCue::boxed("second", true, true);
        let (third, third_plays) = FakeCue::boxed("third", true, false);
        let sink = NotificationSink::new(vec![first, second, third]);

        assert_eq!(sink.notify(), Some("third"));
        assert_eq!(first_plays.get(), 1);
        assert_eq!(third_plays.get(), 1);
    }

    #[test]
    fn test_all_cues_failing_returns_none() {
        let (first, _) = FakeCue::boxed("first", true, true);
        let (second, _) = FakeCue::boxed("second", false, false);
        let sink = NotificationSink::new(vec![first, second]);

        assert_eq!(sink.notify(), None);
    }

    #[test]
    fn test_silent_sink() {
        let sink = NotificationSink::silent();
        assert!(sink.is_empty());
        assert_eq!(sink.notify(), None);
    }

    #[test]
    fn test_default_chain_prefers_wav() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bell.wav"), b"RIFF").unwrap();
        std::fs::write(dir.path().join("bell.mp3"), b"ID3").unwrap();
        let mock = Rc::new(MockSoundPlayer::new());
        let player: Rc<dyn SoundPlayer> = mock.clone();

        let sink = NotificationSink::with_default_cues(dir.path(), Some(player));

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.notify(), Some("bell.wav"));
        assert_eq!(mock.get_play_calls(), vec![dir.path().join("bell.wav")]);
    }

    #[test]
    fn test_default_chain_falls_back_to_mp3() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bell.mp3"), b"ID3").unwrap();
        let mock = Rc::new(MockSoundPlayer::new());
        let player: Rc<dyn SoundPlayer> = mock.clone();

        let sink = NotificationSink::with_default_cues(dir.path(), Some(player));

        assert_eq!(sink.notify(), Some("bell.mp3"));
        assert_eq!(mock.play_count(), 1);
    }

    #[test]
    fn test_mock_player_failure_is_recorded_as_error() {
        let mock = MockSoundPlayer::new();
        mock.set_should_fail(true);

        assert!(mock.play_file(Path::new("bell.wav")).is_err());
        assert_eq!(mock.play_count(), 0);
    }

    #[test]
    fn test_debug_lists_cue_names() {
        let sink = NotificationSink::with_default_cues(Path::new("."), None);
        let debug_str = format!("{:?}", sink);
        assert!(debug_str.contains("bell.wav"));
        assert!(debug_str.contains("bell.mp3"));
        assert!(debug_str.contains("terminal-bell"));
    }
}

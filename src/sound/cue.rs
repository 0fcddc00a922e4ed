//! Notification cue strategies.
//!
//! A cue is one way of making the completion audible. Cues are tried in
//! order by the [`NotificationSink`](super::NotificationSink); each one
//! reports whether it can run before it is attempted.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::error::SoundError;
use super::SoundPlayer;

/// One audible notification strategy.
pub trait CueStrategy {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns true if this cue can be attempted right now.
    fn is_available(&self) -> bool;

    /// Plays the cue without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails; the caller moves on to the next cue.
    fn play(&self) -> Result<(), SoundError>;
}

// ============================================================================
// AudioFileCue
// ============================================================================

/// Audio file formats used for the bell sound, in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// Uncompressed short-format audio
    Wav,
    /// Compressed audio
    Mp3,
}

impl AudioFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
        }
    }
}

/// Base name of the bell sound file.
pub const BELL_FILE_STEM: &str = "bell";

/// Plays an audio file through a [`SoundPlayer`].
pub struct AudioFileCue {
    name: String,
    path: PathBuf,
    player: Option<Rc<dyn SoundPlayer>>,
}

impl AudioFileCue {
    /// Creates a cue for an arbitrary file.
    ///
    /// Without a player the cue is never available.
    pub fn new(path: impl Into<PathBuf>, player: Option<Rc<dyn SoundPlayer>>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path, player }
    }

    /// Creates a cue for `bell.<ext>` inside `sound_dir`.
    pub fn bell(sound_dir: &Path, format: AudioFormat, player: Option<Rc<dyn SoundPlayer>>) -> Self {
        let file_name = format!("{}.{}", BELL_FILE_STEM, format.extension());
        Self::new(sound_dir.join(file_name), player)
    }

    /// Returns the path of the audio file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CueStrategy for AudioFileCue {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        match &self.player {
            Some(player) => player.is_available() && self.path.is_file(),
            None => false,
        }
    }

    fn play(&self) -> Result<(), SoundError> {
        match &self.player {
            Some(player) => player.play_file(&self.path),
            None => Err(SoundError::NoPlayer {
                cue: self.name.clone(),
            }),
        }
    }
}

impl std::fmt::Debug for AudioFileCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioFileCue")
            .field("path", &self.path)
            .field("has_player", &self.player.is_some())
            .finish()
    }
}

// ============================================================================
// TerminalBell
// ============================================================================

/// Rings the terminal bell by writing `BEL` to stdout.
///
/// Always available; used as the last resort.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl CueStrategy for TerminalBell {
    fn name(&self) -> &str {
        "terminal-bell"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn play(&self) -> Result<(), SoundError> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .map_err(SoundError::Bell)
    }
}

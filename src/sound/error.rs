//! Sound system error types.
//!
//! These errors never reach the user: the notification sink logs them and
//! moves on to the next cue.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a cue could not be played.
#[derive(Debug, Error)]
pub enum SoundError {
    /// No audio output device could be opened.
    #[error("オーディオデバイスが利用できません: {0}")]
    NoOutputDevice(#[from] rodio::StreamError),

    /// The cue was built without a player.
    #[error("再生プレーヤーがありません: {cue}")]
    NoPlayer {
        /// Name of the cue.
        cue: String,
    },

    /// The audio file could not be opened.
    #[error("サウンドファイルを開けません: {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The audio file is not in a format rodio can decode.
    #[error("サウンドファイルのデコードに失敗しました: {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// A sink could not be attached to the output stream.
    #[error("再生を開始できません: {0}")]
    Sink(#[from] rodio::PlayError),

    /// Writing the terminal bell failed.
    #[error("端末ベルを鳴らせません: {0}")]
    Bell(#[source] io::Error),

    /// Any other playback failure.
    #[error("サウンド再生エラー: {0}")]
    Playback(String),
}

impl SoundError {
    /// Returns true if the failure is about the output side, not the file.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(
            self,
            Self::NoOutputDevice(_) | Self::NoPlayer { .. } | Self::Sink(_)
        )
    }

    /// Returns true if the audio file is missing or unreadable.
    #[must_use]
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Decode { .. })
    }
}

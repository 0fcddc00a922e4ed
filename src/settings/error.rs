//! Settings error types.
//!
//! Validation failures are user-facing and never mutate state.
//! Persistence failures are reported on explicit saves and swallowed on load.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while validating or persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A field is not a valid integer for its range.
    #[error("入力値が不正です: {field} = '{value}'（半角の整数を入力してください）")]
    InvalidInput {
        /// Name of the offending field in the settings record.
        field: &'static str,
        /// The raw value that was rejected.
        value: String,
    },

    /// The settings file could not be read or written.
    #[error("設定ファイルを保存できません: {}: {source}", path.display())]
    PersistenceFailure {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The settings record could not be encoded or decoded.
    #[error("設定のシリアライズに失敗しました: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SettingsError {
    /// Creates an `InvalidInput` error for a field.
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Creates a `PersistenceFailure` error for a path.
    pub fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::PersistenceFailure {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error came from user input validation.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns true if this error came from the storage layer.
    #[must_use]
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            Self::PersistenceFailure { .. } | Self::Serialization(_)
        )
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "タイマーとカウンターには半角数字を入力してください",
            Self::PersistenceFailure { .. } => "設定ファイルの書き込み権限を確認してください",
            Self::Serialization(_) => "設定ファイルを削除するとデフォルト値で再作成されます",
        }
    }
}

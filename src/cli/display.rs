//! Display utilities for the Pomodoro Timer CLI.
//!
//! This module provides formatted output for:
//! - The live status line redrawn on every tick
//! - Full status and settings listings
//! - Error messages

use std::io::{self, Write};

use crate::types::{DisplayState, Settings};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Formats the one-line live status.
    pub fn status_line(state: &DisplayState) -> String {
        let mut line = format!("[{}] {}  {}", state.toggle_label, state.label, state.remaining);
        if !state.marks.is_empty() {
            line.push_str("  ");
            line.push_str(&state.marks);
        }
        line
    }

    /// Redraws the live status line in place.
    pub fn redraw(state: &DisplayState) {
        let mut stdout = io::stdout().lock();
        // \x1b[2K clears the previous, possibly longer, line.
        let _ = write!(stdout, "\r\x1b[2K{}", Self::status_line(state));
        let _ = stdout.flush();
    }

    /// Shows the full status on its own lines.
    pub fn show_status(state: &DisplayState, cycle_index: u64) {
        println!();
        println!("ポモドーロタイマー ステータス");
        println!("─────────────────────────────");
        println!("状態: {}", state.label);
        println!("残り時間: {}", state.remaining);
        println!("サイクル: #{}", cycle_index);
        println!("完了: {}", Self::marks_or_zero(&state.marks));
    }

    /// Shows the saved settings.
    pub fn show_settings(settings: &Settings) {
        println!("集中: {}分", settings.work_minutes);
        println!("短い休憩: {}分", settings.short_break_minutes);
        println!("長い休憩: {}分", settings.long_break_minutes);
        println!("完了ポモドーロ数: {}", settings.completed_focus_sessions);
    }

    /// Shows a success message for a settings save.
    pub fn show_settings_saved() {
        println!("設定を保存しました");
    }

    /// Shows a message on its own line without disturbing the status line.
    pub fn show_message(message: &str) {
        println!();
        println!("{}", message);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }

    fn marks_or_zero(marks: &str) -> &str {
        if marks.is_empty() {
            "0"
        } else {
            marks
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

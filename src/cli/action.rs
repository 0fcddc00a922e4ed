//! User actions for the interactive session.
//!
//! Each input line typed while the timer runs is parsed into a
//! [`SessionAction`]. Parsing is platform-independent; applying the action
//! happens in the session loop.

use std::fmt;

use crate::types::{IntervalKind, SettingsInput};

/// Actions the user can trigger from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Start/pause toggle
    Toggle,
    /// Pause the running interval
    Pause,
    /// Stop and go back to the start of the cycle
    Reset,
    /// Start a specific interval now
    Start(IntervalKind),
    /// Save new settings from raw text values
    Save(SettingsInput),
    /// Reset the completed counter to zero
    ClearCount,
    /// Print the full status
    Status,
    /// Print the command list
    Help,
    /// Save and exit
    Quit,
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionAction::Toggle => write!(f, "toggle"),
            SessionAction::Pause => write!(f, "pause"),
            SessionAction::Reset => write!(f, "reset"),
            SessionAction::Start(kind) => write!(f, "start {}", kind.as_str()),
            SessionAction::Save(_) => write!(f, "set"),
            SessionAction::ClearCount => write!(f, "clear"),
            SessionAction::Status => write!(f, "status"),
            SessionAction::Help => write!(f, "help"),
            SessionAction::Quit => write!(f, "quit"),
        }
    }
}

/// Help text listing every command.
pub const HELP_TEXT: &str = "\
コマンド:
  t / Enter      スタート・一時停止・再開
  p              一時停止
  r              リセット
  focus          集中時間を開始
  short          短い休憩を開始
  long           長い休憩を開始
  set W S L N    設定を保存（集中・短い休憩・長い休憩の分数、完了数）
  clear          ポモドーロカウンターを0に
  status         現在の状態を表示
  help           このヘルプを表示
  q              保存して終了";

impl SessionAction {
    /// Parses one input line.
    ///
    /// An empty line is the toggle.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown commands or a malformed
    /// `set` line. Settings values themselves are validated later.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(SessionAction::Toggle);
        };

        let action = match command.to_lowercase().as_str() {
            "t" | "toggle" => SessionAction::Toggle,
            "p" | "pause" => SessionAction::Pause,
            "r" | "reset" => SessionAction::Reset,
            "f" | "focus" => SessionAction::Start(IntervalKind::Focus),
            "s" | "short" => SessionAction::Start(IntervalKind::ShortBreak),
            "l" | "long" => SessionAction::Start(IntervalKind::LongBreak),
            "set" => {
                let values: Vec<&str> = words.by_ref().collect();
                let [work, short, long, count] = values.as_slice() else {
                    return Err(
                        "使い方: set <集中(分)> <短い休憩(分)> <長い休憩(分)> <完了数>".to_string(),
                    );
                };
                SessionAction::Save(SettingsInput {
                    work_minutes: (*work).to_string(),
                    short_break_minutes: (*short).to_string(),
                    long_break_minutes: (*long).to_string(),
                    completed_focus_sessions: (*count).to_string(),
                })
            }
            "clear" => SessionAction::ClearCount,
            "status" => SessionAction::Status,
            "h" | "help" | "?" => SessionAction::Help,
            "q" | "quit" | "exit" => SessionAction::Quit,
            other => return Err(format!("不明なコマンドです: {}（help で一覧を表示）", other)),
        };

        if words.next().is_some() {
            return Err(format!("余分な引数があります: {}", line.trim()));
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_toggles() {
        assert_eq!(SessionAction::parse(""), Ok(SessionAction::Toggle));
        assert_eq!(SessionAction::parse("   \n"), Ok(SessionAction::Toggle));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(SessionAction::parse("t"), Ok(SessionAction::Toggle));
        assert_eq!(SessionAction::parse("p"), Ok(SessionAction::Pause));
        assert_eq!(SessionAction::parse("R"), Ok(SessionAction::Reset));
        assert_eq!(SessionAction::parse("clear"), Ok(SessionAction::ClearCount));
        assert_eq!(SessionAction::parse("status"), Ok(SessionAction::Status));
        assert_eq!(SessionAction::parse("help"), Ok(SessionAction::Help));
        assert_eq!(SessionAction::parse("q"), Ok(SessionAction::Quit));
    }

    #[test]
    fn test_parse_manual_starts() {
        assert_eq!(
            SessionAction::parse("focus"),
            Ok(SessionAction::Start(IntervalKind::Focus))
        );
        assert_eq!(
            SessionAction::parse("short"),
            Ok(SessionAction::Start(IntervalKind::ShortBreak))
        );
        assert_eq!(
            SessionAction::parse("long"),
            Ok(SessionAction::Start(IntervalKind::LongBreak))
        );
    }

    #[test]
    fn test_parse_set_keeps_raw_values() {
        let action = SessionAction::parse("set 30 x 20 -1").unwrap();
        assert_eq!(
            action,
            SessionAction::Save(SettingsInput {
                work_minutes: "30".to_string(),
                short_break_minutes: "x".to_string(),
                long_break_minutes: "20".to_string(),
                completed_focus_sessions: "-1".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_set_wrong_arity() {
        assert!(SessionAction::parse("set 30 5").is_err());
        assert!(SessionAction::parse("set 30 5 20 1 9").is_err());
    }

    #[test]
    fn test_start_is_not_a_toggle_alias() {
        // A toggle would pause a running timer.
        assert!(SessionAction::parse("start").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = SessionAction::parse("explode").unwrap_err();
        assert!(err.contains("explode"));
    }

    #[test]
    fn test_parse_rejects_trailing_arguments() {
        assert!(SessionAction::parse("pause now").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionAction::Toggle.to_string(), "toggle");
        assert_eq!(
            SessionAction::Start(IntervalKind::LongBreak).to_string(),
            "start long_break"
        );
        assert_eq!(SessionAction::Quit.to_string(), "quit");
    }

    #[test]
    fn test_help_text_mentions_commands() {
        assert!(HELP_TEXT.contains("set W S L N"));
        assert!(HELP_TEXT.contains("clear"));
    }
}

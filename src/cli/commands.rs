//! Command definitions for the Pomodoro Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::settings::DEFAULT_SETTINGS_FILE;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer CLI
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-cycle",
    version,
    about = "ターミナルで動くポモドーロタイマー",
    long_about = "集中時間と休憩を自動で切り替えるポモドーロタイマー。\n\
                  完了したポモドーロ数と設定はJSONファイルに保存されます。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path of the settings file
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        default_value = DEFAULT_SETTINGS_FILE
    )]
    pub config: PathBuf,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive timer
    Run(RunArgs),

    /// Show or change the saved settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for the interactive timer
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Disable audio files; only ring the terminal bell
    #[arg(long)]
    pub no_sound: bool,

    /// Directory containing bell.wav / bell.mp3
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub sound_dir: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            no_sound: false,
            sound_dir: PathBuf::from("."),
        }
    }
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommand {
    /// Print the saved settings
    Show,

    /// Change one or more settings
    Set(SetArgs),

    /// Reset the completed pomodoro counter to zero
    ResetCount,
}

/// Arguments for `settings set`.
///
/// Values are kept as raw text and validated by the timer core.
#[derive(Args, Debug, Clone, Default)]
pub struct SetArgs {
    /// Focus duration in minutes
    #[arg(short, long, allow_hyphen_values = true)]
    pub work: Option<String>,

    /// Short break duration in minutes
    #[arg(short, long, allow_hyphen_values = true)]
    pub short_break: Option<String>,

    /// Long break duration in minutes
    #[arg(short, long, allow_hyphen_values = true)]
    pub long_break: Option<String>,

    /// Completed pomodoro count
    #[arg(short, long, allow_hyphen_values = true)]
    pub pomodoros: Option<String>,
}

impl SetArgs {
    /// Returns true if no field was given.
    pub fn is_empty(&self) -> bool {
        self.work.is_none()
            && self.short_break.is_none()
            && self.long_break.is_none()
            && self.pomodoros.is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["pomodoro-cycle"]);
            assert!(cli.command.is_none());
            assert!(!cli.verbose);
            assert_eq!(cli.config, PathBuf::from("pomodoro_config.json"));
        }

        #[test]
        fn test_parse_verbose_flag() {
            let cli = Cli::parse_from(["pomodoro-cycle", "-v"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_config_flag_after_subcommand() {
            let cli = Cli::parse_from(["pomodoro-cycle", "settings", "show", "--config", "/tmp/p.json"]);
            assert_eq!(cli.config, PathBuf::from("/tmp/p.json"));
            assert!(matches!(
                cli.command,
                Some(Commands::Settings(SettingsCommand::Show))
            ));
        }

        #[test]
        fn test_parse_completions_bash() {
            let cli = Cli::parse_from(["pomodoro-cycle", "completions", "bash"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Bash);
                }
                _ => panic!("Expected Completions command"),
            }
        }
    }

    mod run_args_tests {
        use super::*;

        #[test]
        fn test_parse_run_defaults() {
            let cli = Cli::parse_from(["pomodoro-cycle", "run"]);
            match cli.command {
                Some(Commands::Run(args)) => {
                    assert!(!args.no_sound);
                    assert_eq!(args.sound_dir, PathBuf::from("."));
                }
                _ => panic!("Expected Run command"),
            }
        }

        #[test]
        fn test_parse_run_options() {
            let cli = Cli::parse_from([
                "pomodoro-cycle",
                "run",
                "--no-sound",
                "--sound-dir",
                "/usr/share/sounds",
            ]);
            match cli.command {
                Some(Commands::Run(args)) => {
                    assert!(args.no_sound);
                    assert_eq!(args.sound_dir, PathBuf::from("/usr/share/sounds"));
                }
                _ => panic!("Expected Run command"),
            }
        }
    }

    mod settings_command_tests {
        use super::*;

        #[test]
        fn test_parse_set_keeps_raw_values() {
            let cli = Cli::parse_from([
                "pomodoro-cycle",
                "settings",
                "set",
                "--work",
                "abc",
                "--short-break",
                "-5",
            ]);
            match cli.command {
                Some(Commands::Settings(SettingsCommand::Set(args))) => {
                    assert_eq!(args.work.as_deref(), Some("abc"));
                    assert_eq!(args.short_break.as_deref(), Some("-5"));
                    assert!(args.long_break.is_none());
                    assert!(!args.is_empty());
                }
                _ => panic!("Expected Settings Set command"),
            }
        }

        #[test]
        fn test_parse_set_empty() {
            let cli = Cli::parse_from(["pomodoro-cycle", "settings", "set"]);
            match cli.command {
                Some(Commands::Settings(SettingsCommand::Set(args))) => {
                    assert!(args.is_empty());
                }
                _ => panic!("Expected Settings Set command"),
            }
        }

        #[test]
        fn test_parse_reset_count() {
            let cli = Cli::parse_from(["pomodoro-cycle", "settings", "reset-count"]);
            assert!(matches!(
                cli.command,
                Some(Commands::Settings(SettingsCommand::ResetCount))
            ));
        }
    }
}

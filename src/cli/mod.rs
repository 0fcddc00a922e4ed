//! CLI module for the Pomodoro Timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `action`: Line commands accepted while the timer runs
//! - `session`: The interactive event loop
//! - `display`: Output formatting and display logic

pub mod action;
pub mod commands;
pub mod display;
pub mod session;

pub use action::SessionAction;
pub use commands::{Cli, Commands, RunArgs, SetArgs, SettingsCommand};
pub use display::Display;
pub use session::run_session;

//! Settings persistence for the Pomodoro Timer.
//!
//! This module provides:
//! - `store`: loading and saving the flat settings record
//! - `error`: validation and persistence error types

pub mod error;
pub mod store;

pub use error::SettingsError;
pub use store::{SettingsStore, DEFAULT_SETTINGS_FILE};

//! Interactive timer session.
//!
//! One current-thread event loop drives everything: it waits for either the
//! clock's pending tick deadline, a line of user input, or Ctrl-C, handles
//! the event, and redraws the status line.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::timer::PomodoroController;

use super::action::{SessionAction, HELP_TEXT};
use super::display::Display;

/// Something the session loop woke up for.
#[derive(Debug)]
enum SessionEvent {
    Tick,
    Input(String),
    Quit,
}

/// What the loop should do after handling an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs the interactive session until the user quits or input ends.
///
/// Settings are saved on the way out.
///
/// # Errors
///
/// Returns an error if reading input fails or the final save fails.
pub async fn run_session<R>(controller: &mut PomodoroController, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    println!("{}", HELP_TEXT);
    Display::redraw(&controller.display());

    loop {
        let deadline = controller.next_tick_at();
        let event = tokio::select! {
            _ = wait_for_tick(deadline) => SessionEvent::Tick,
            line = lines.next_line() => {
                match line.context("入力の読み込みに失敗しました")? {
                    Some(line) => SessionEvent::Input(line),
                    None => SessionEvent::Quit,
                }
            }
            _ = tokio::signal::ctrl_c() => SessionEvent::Quit,
        };

        let flow = match event {
            SessionEvent::Tick => {
                controller.tick();
                Flow::Continue
            }
            SessionEvent::Input(line) => match SessionAction::parse(&line) {
                Ok(action) => apply_action(controller, action),
                Err(message) => {
                    Display::show_message(&message);
                    Flow::Continue
                }
            },
            SessionEvent::Quit => Flow::Exit,
        };

        if flow == Flow::Exit {
            break;
        }
        Display::redraw(&controller.display());
    }

    println!();
    controller
        .shutdown()
        .context("終了時の設定保存に失敗しました")?;
    info!("Session ended");
    Ok(())
}

/// Applies one user action to the controller.
pub fn apply_action(controller: &mut PomodoroController, action: SessionAction) -> Flow {
    debug!("Action: {}", action);
    match action {
        SessionAction::Toggle => controller.toggle(),
        SessionAction::Pause => controller.pause(),
        SessionAction::Reset => controller.reset(),
        SessionAction::Start(kind) => controller.manual_start(kind),
        SessionAction::Save(input) => match controller.update_settings_from_input(&input) {
            Ok(()) => Display::show_message("設定を保存しました"),
            Err(e) => Display::show_message(&format!("エラー: {}", e)),
        },
        SessionAction::ClearCount => match controller.reset_completed_count() {
            Ok(()) => Display::show_message("ポモドーロカウンターを0にしました"),
            Err(e) => Display::show_message(&format!("エラー: {}", e)),
        },
        SessionAction::Status => {
            Display::show_status(&controller.display(), controller.cycle_index());
        }
        SessionAction::Help => Display::show_message(HELP_TEXT),
        SessionAction::Quit => return Flow::Exit,
    }
    Flow::Continue
}

/// Resolves at the tick deadline, or never when no tick is pending.
async fn wait_for_tick(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsStore;
    use crate::sound::NotificationSink;
    use crate::types::{ClockStatus, IntervalKind, SettingsInput};

    fn create_controller(dir: &tempfile::TempDir) -> PomodoroController {
        let store = SettingsStore::new(dir.path().join("pomodoro_config.json"));
        PomodoroController::new(store, NotificationSink::silent())
    }

    #[test]
    fn test_apply_toggle_and_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = create_controller(&dir);

        assert_eq!(apply_action(&mut controller, SessionAction::Toggle), Flow::Continue);
        assert_eq!(controller.clock_status(), ClockStatus::Running);
        assert_eq!(apply_action(&mut controller, SessionAction::Quit), Flow::Exit);
    }

    #[test]
    fn test_apply_manual_start() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = create_controller(&dir);

        apply_action(&mut controller, SessionAction::Start(IntervalKind::LongBreak));

        assert_eq!(controller.current_interval(), Some(IntervalKind::LongBreak));
    }

    #[test]
    fn test_apply_invalid_save_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = create_controller(&dir);
        let before = *controller.settings();

        apply_action(
            &mut controller,
            SessionAction::Save(SettingsInput {
                work_minutes: "x".to_string(),
                short_break_minutes: "5".to_string(),
                long_break_minutes: "30".to_string(),
                completed_focus_sessions: "0".to_string(),
            }),
        );

        assert_eq!(*controller.settings(), before);
    }

    #[tokio::test]
    async fn test_session_ends_at_end_of_input_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = create_controller(&dir);
        let input: &[u8] = b"t\np\nset 30 5 20 2\n";

        run_session(&mut controller, input).await.unwrap();

        assert_eq!(controller.clock_status(), ClockStatus::Idle);
        let saved = controller.store().load();
        assert_eq!(saved.work_minutes, 30);
        assert_eq!(saved.long_break_minutes, 20);
        assert_eq!(saved.completed_focus_sessions, 2);
    }

    #[tokio::test]
    async fn test_session_quit_command() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = create_controller(&dir);
        let input: &[u8] = b"focus\nq\nreset\n";

        run_session(&mut controller, input).await.unwrap();

        // `reset` after `q` is never applied; shutdown cancels the clock.
        assert_eq!(controller.cycle_index(), 1);
        assert_eq!(controller.clock_status(), ClockStatus::Idle);
    }
}

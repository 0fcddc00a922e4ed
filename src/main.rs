//! Pomodoro Timer CLI
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 30 minutes of long break after 4 pomodoros

use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use tokio::io::BufReader;

use pomodoro_cycle::cli::{
    run_session, Cli, Commands, Display, RunArgs, SetArgs, SettingsCommand,
};
use pomodoro_cycle::settings::SettingsStore;
use pomodoro_cycle::sound::{try_create_player, NotificationSink, SoundPlayer};
use pomodoro_cycle::timer::PomodoroController;
use pomodoro_cycle::types::SettingsInput;

/// Main entry point
fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            Display::show_error(&format!("ランタイムの初期化に失敗しました: {}", e));
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(execute(cli));

    // A pending stdin read cannot be cancelled; do not wait for it.
    runtime.shutdown_background();

    if let Err(e) = result {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they do not break the live status line.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let store = SettingsStore::new(&cli.config);

    match cli.command {
        Some(Commands::Run(args)) => run(store, &args).await?,
        None => run(store, &RunArgs::default()).await?,
        Some(Commands::Settings(SettingsCommand::Show)) => {
            Display::show_settings(&store.load());
        }
        Some(Commands::Settings(SettingsCommand::Set(args))) => {
            let mut controller = PomodoroController::new(store, NotificationSink::silent());
            set_settings(&mut controller, &args)?;
            Display::show_settings_saved();
            Display::show_settings(controller.settings());
        }
        Some(Commands::Settings(SettingsCommand::ResetCount)) => {
            let mut controller = PomodoroController::new(store, NotificationSink::silent());
            controller
                .reset_completed_count()
                .context("カウンターのリセットに失敗しました")?;
            Display::show_settings_saved();
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Runs the interactive timer on stdin/stdout.
async fn run(store: SettingsStore, args: &RunArgs) -> Result<()> {
    let notifier = if args.no_sound {
        NotificationSink::bell_only()
    } else {
        let player = try_create_player().map(|p| p as Rc<dyn SoundPlayer>);
        NotificationSink::with_default_cues(&args.sound_dir, player)
    };
    tracing::debug!("Notification cues: {:?}", notifier);

    let mut controller = PomodoroController::new(store, notifier);
    let stdin = BufReader::new(tokio::io::stdin());
    run_session(&mut controller, stdin).await
}

/// Applies `settings set` on top of the saved record.
fn set_settings(controller: &mut PomodoroController, args: &SetArgs) -> Result<()> {
    if args.is_empty() {
        bail!("変更する設定を1つ以上指定してください（--work, --short-break, --long-break, --pomodoros）");
    }

    let mut input = SettingsInput::from_settings(controller.settings());
    if let Some(work) = &args.work {
        input.work_minutes = work.clone();
    }
    if let Some(short_break) = &args.short_break {
        input.short_break_minutes = short_break.clone();
    }
    if let Some(long_break) = &args.long_break {
        input.long_break_minutes = long_break.clone();
    }
    if let Some(pomodoros) = &args.pomodoros {
        input.completed_focus_sessions = pomodoros.clone();
    }

    controller.update_settings_from_input(&input)?;
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

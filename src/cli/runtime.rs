//! Interactive session loop.
//!
//! Everything runs on one task: input lines, countdown ticks, announcement
//! expiry and Ctrl-C are multiplexed with `tokio::select!`, so widget
//! operations never overlap.

use std::future::Future;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use super::commands::{RunArgs, ThemeArgs};
use super::display::Display;
use crate::display::TerminalDisplay;
use crate::engine::{TimerEngine, TimerEvent};
use crate::input::{help_text, note_key_events, parse_line, TerminalInput};
use crate::theme::{
    system_prefers_dark, FilePreferenceStore, PreferenceStore, Theme, ThemeController, THEME_KEY,
};
use crate::widget::{Flow, PomodoroWidget};

/// Widget hosted on a terminal writer.
pub type TerminalWidget<W, P> = PomodoroWidget<TerminalDisplay<W>, P>;

/// Resolves the preference file path.
pub fn resolve_prefs_path(prefs: Option<PathBuf>) -> Result<PathBuf> {
    match prefs {
        Some(path) => Ok(path),
        None => FilePreferenceStore::default_path().context("failed to locate preference file"),
    }
}

/// Reads stdin lines on a dedicated thread.
///
/// A blocking read cannot be cancelled, so it stays off the runtime; the
/// thread ends at EOF or when the receiver is dropped.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read stdin");
                    break;
                }
            }
        }
    });
    rx
}

/// Runs the interactive widget on stdin/stdout.
pub async fn run(args: RunArgs) -> Result<()> {
    let config = args.to_config();
    config.validate().context("invalid configuration")?;

    let prefs_path = resolve_prefs_path(args.prefs.clone())?;
    let store = FilePreferenceStore::open(&prefs_path);
    let mut theme = ThemeController::init(store, system_prefers_dark());
    if let Some(requested) = args.theme {
        theme.set(requested);
    }

    let (event_tx, mut events) = mpsc::unbounded_channel();
    let mut display = TerminalDisplay::new(io::stdout(), &config);
    for line in Display::banner(config.default_minutes, theme.theme()) {
        display.write_line(&line);
    }
    let engine = TimerEngine::new(config, display, event_tx);
    let mut widget = PomodoroWidget::init(engine, theme);

    let mut input = spawn_stdin_reader();
    run_session(&mut widget, &mut input, &mut events, tokio::signal::ctrl_c()).await
}

/// Drives `widget` until the user quits, input ends or `shutdown` resolves.
///
/// `shutdown` is polled across every loop pass, so a signal listener is
/// registered once for the whole session.
pub async fn run_session<W, P, S>(
    widget: &mut TerminalWidget<W, P>,
    input: &mut mpsc::UnboundedReceiver<String>,
    events: &mut mpsc::UnboundedReceiver<TimerEvent>,
    shutdown: S,
) -> Result<()>
where
    W: Write,
    P: PreferenceStore,
    S: Future<Output = io::Result<()>>,
{
    tokio::pin!(shutdown);

    loop {
        let deadline = widget.engine().display().announcement_deadline();

        tokio::select! {
            line = input.recv() => match line {
                Some(line) => {
                    if handle_line(widget, &line) == Flow::Quit {
                        break;
                    }
                }
                None => {
                    tracing::debug!("input closed");
                    break;
                }
            },
            _ = widget.next_tick() => {
                widget.tick();
            }
            _ = wait_for(deadline) => {
                widget.display_mut().expire_announcement(Instant::now());
            }
            Some(event) = events.recv() => {
                log_event(&event);
            }
            result = &mut shutdown => {
                result.context("failed to wait for shutdown signal")?;
                tracing::debug!("interrupted");
                break;
            }
        }
    }

    while let Ok(event) = events.try_recv() {
        log_event(&event);
    }
    Ok(())
}

/// Handles one input line.
fn handle_line<W: Write, P: PreferenceStore>(
    widget: &mut TerminalWidget<W, P>,
    line: &str,
) -> Flow {
    match parse_line(line) {
        TerminalInput::Trigger(action) => widget.handle(action),
        TerminalInput::Key(event) => {
            widget.handle_key(&event);
            Flow::Continue
        }
        TerminalInput::Note(note) => {
            let consumed = note_key_events(&note)
                .filter(|event| widget.handle_key(event))
                .count();
            tracing::info!(note = %note, shortcuts = consumed, "note typed");
            Flow::Continue
        }
        TerminalInput::Unknown(text) => {
            if !text.is_empty() {
                widget.display_mut().write_line(help_text());
            }
            Flow::Continue
        }
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn log_event(event: &TimerEvent) {
    match event {
        TimerEvent::Tick { remaining_seconds } => {
            tracing::trace!(remaining_seconds, "tick")
        }
        other => tracing::info!(event = ?other, "timer event"),
    }
}

/// Shows or updates the stored theme.
pub fn theme_command(args: ThemeArgs) -> Result<()> {
    let path = resolve_prefs_path(args.prefs)?;
    let mut store = FilePreferenceStore::open(&path);

    match args.value {
        Some(theme) => {
            store
                .set(THEME_KEY, theme.as_str())
                .context("failed to save theme")?;
            Display::show_theme_saved(theme);
        }
        None => {
            let stored = store.get(THEME_KEY);
            let theme = Theme::resolve(stored.as_deref(), system_prefers_dark());
            let is_stored = matches!(stored.as_deref(), Some("light" | "dark"));
            Display::show_theme(theme, is_stored, &path);
        }
    }
    Ok(())
}

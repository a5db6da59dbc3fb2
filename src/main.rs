//! Loyalty TUI - Terminal User Interface for registering loyalty members
//!
//! A Ratatui-based form with cascading country/region selects, city based
//! postal code lookup and a per-session list of registered members.

mod app;
mod config;
mod platform;
mod reference;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use config::{StorageBackend, TuiConfig};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use ratatui::{backend::CrosstermBackend, Terminal};
use reference::StaticReferenceData;
use std::io;
use std::time::{Duration, Instant};
use store::{FileSessionStorage, MemoryStorage, SessionStorage};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging; the guard flushes the log file on exit
    let log_guard = init_logging();

    let config_path = TuiConfig::config_path();
    let config = match &config_path {
        Some(path) => TuiConfig::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config {}: {e}", path.display());
            TuiConfig::default()
        }),
        None => TuiConfig::default(),
    };

    let reference = StaticReferenceData::bundled()?;
    let storage: Box<dyn SessionStorage> = match config.storage_backend() {
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
        StorageBackend::File => {
            let storage = FileSessionStorage::in_cache_dir()?;
            tracing::info!("Session storage at {}", storage.session_dir().display());
            Box::new(storage)
        }
    };
    let mut app = App::new(config, config_path, reference, storage);
    tracing::info!("Starting loyalty-tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Session storage is removed when the app is dropped
    drop(app);

    // Handle any errors
    if let Err(err) = result {
        report_failure(&err, log_guard);
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the cache dir so the alternate screen stays clean
fn init_logging() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("loyalty_tui=info"));

    let log_dir = ProjectDirs::from("io", "loyalty", "loyalty-tui")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .filter(|dir| std::fs::create_dir_all(dir).is_ok());

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "loyalty-tui.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    }
}

/// Log the failure and flush the log file, `exit` skips destructors
fn report_failure(err: &anyhow::Error, log_guard: Option<WorkerGuard>) {
    tracing::error!("Exiting after error: {err:?}");
    drop(log_guard);
    eprintln!("Error: {err:?}");
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let poll_duration = Duration::from_millis(100);

    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        app.tick(Instant::now());

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reaches_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_appender = tracing_appender::rolling::never(dir.path(), "loyalty-tui.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let subscriber = tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking));

        tracing::subscriber::with_default(subscriber, || {
            report_failure(&anyhow::anyhow!("terminal lost"), Some(guard));
        });

        let logged = std::fs::read_to_string(dir.path().join("loyalty-tui.log")).unwrap();
        assert!(logged.contains("Exiting after error"));
        assert!(logged.contains("terminal lost"));
    }
}

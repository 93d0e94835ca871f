//! Account Forms TUI - login, sign-up and password recovery screens
//!
//! A Ratatui-based TUI presenting three account forms with local field
//! validation, inline errors and a transient confirmation.

mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config: {err:#}");
        TuiConfig::default()
    });
    tracing::info!(?config, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file while the terminal is in raw mode; discard logs when no file can be opened
fn init_logging() {
    let writer = open_log_file(TuiConfig::log_path())
        .map(|file| BoxMakeWriter::new(Mutex::new(file)))
        .unwrap_or_else(|| BoxMakeWriter::new(io::sink));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_forms_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
}

fn open_log_file(path: Option<PathBuf>) -> Option<File> {
    let path = path?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling while the snackbar slides in (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

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
    fn test_no_log_path_gives_no_file() {
        assert!(open_log_file(None).is_none());
    }

    #[test]
    fn test_unopenable_log_path_gives_no_file() {
        // A directory cannot be opened for appending
        assert!(open_log_file(Some(std::env::temp_dir())).is_none());
    }

    #[test]
    fn test_log_file_is_created_with_parents() {
        let dir = std::env::temp_dir().join(format!("account-forms-tui-{}", std::process::id()));
        let path = dir.join("logs").join("app.log");

        assert!(open_log_file(Some(path.clone())).is_some());
        assert!(path.exists());

        let _ = fs::remove_dir_all(dir);
    }
}

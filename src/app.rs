//! Application state and key handling

use crate::config::TuiConfig;
use crate::state::{AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let mut state = AppState {
            confirmation_timeout: config.confirmation_timeout(),
            mask_passwords: config.mask_passwords(),
            ..Default::default()
        };
        state.show(config.start_screen());

        Self { state, quit: false }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the UI is animating and needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.state
            .snackbar
            .as_ref()
            .is_some_and(|snackbar| snackbar.is_animating())
    }

    /// Advance timers between events
    pub fn tick(&mut self) {
        self.state.tick();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Fields stay editable under the confirmation; submitting waits for OK
        if self.state.confirmation_visible() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.state.dismiss_confirmation(),
                KeyCode::Char('s') if is_submit_chord(&key) => {}
                _ => self.handle_form_key(key),
            }
            return Ok(());
        }

        let screen_before = self.state.current_screen();
        self.handle_form_key(key);

        if screen_before != self.state.current_screen() {
            tracing::info!(
                from = ?screen_before,
                to = ?self.state.current_screen(),
                "screen changed"
            );
        }

        Ok(())
    }

    /// Handle keys while a form is being edited
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.screen.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.screen.prev_field(),
            KeyCode::Char('s') if is_submit_chord(&key) => {
                self.state.submit();
            }
            KeyCode::Enter => self.state.activate(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Backspace => self.state.screen.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.screen.input_char(c)
            }
            _ => {}
        }
    }
}

fn is_submit_chord(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('s')
        && (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER))
}

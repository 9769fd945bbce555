//! Application shell: terminal setup, event loop and teardown

pub mod input;
pub mod progression;
pub mod quiz;
pub mod router;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::content::Catalogs;
use crate::theme::Theme;
use crate::ui;
use state::{AppState, Flow};

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// The main application
pub struct App {
    /// Whether vim-style keys are enabled
    vim_keys: bool,

    /// Resolved color theme
    theme: Theme,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,

    /// Set once the terminal has been handed back
    restored: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &Config, catalogs: Catalogs) -> Result<Self> {
        let terminal = Self::setup_terminal()?;

        Ok(Self {
            vim_keys: config.vim_keys,
            theme: config.active_theme(),
            state: AppState::new(catalogs),
            terminal,
            restored: false,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        if !take_pending(&mut self.restored) {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Restore the terminal before the panic message is printed
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        tracing::info!("session started");

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.theme, self.vim_keys);
            })?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let view = self.state.view();
                let Some(input) = input::map_key(view, key, self.vim_keys) else {
                    continue;
                };
                tracing::trace!(?view, ?input, "key mapped");
                if self.state.handle(input) == Flow::Exit {
                    break;
                }
            }
        }

        tracing::info!("session ended");
        self.restore_terminal()?;
        Ok(())
    }
}

/// True the first time it is called for a given flag, false afterwards
fn take_pending(done: &mut bool) -> bool {
    !std::mem::replace(done, true)
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_is_restored_once() {
        let mut restored = false;
        assert!(take_pending(&mut restored));
        assert!(!take_pending(&mut restored));
        assert!(!take_pending(&mut restored));
    }
}

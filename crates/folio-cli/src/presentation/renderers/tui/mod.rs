//! Interactive TUI renderer.
//!
//! Terminal setup/teardown lives here; the page logic is in [`app`].
//! Raw mode, the alternate screen, and mouse capture are restored on
//! drop, however the session ends.

pub mod app;
pub mod hotspots;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::config::Config;
use app::TuiApp;
use folio_types::Catalog;

pub fn run(catalog: Catalog, config: &Config) -> Result<()> {
    let mut session = TuiSession::new(config.tui.mouse)?;
    let mut app = TuiApp::new(catalog);
    session.run(&mut app)
}

struct TuiSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl TuiSession {
    fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, mouse })
    }

    fn run(&mut self, app: &mut TuiApp) -> Result<()> {
        loop {
            self.terminal.draw(|f| app.draw(f))?;
            let event = crossterm::event::read()?;
            app.handle_event(event);
            if app.finished() {
                return Ok(());
            }
        }
    }
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        // Restore terminal state when the session is dropped
        if self.mouse {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

//! Terminal session and event loop
//!
//! [`TerminalSession`] owns raw mode, the alternate screen and mouse capture
//! for as long as it lives; dropping it restores the terminal on every exit
//! path, including errors and unwinding panics.

use std::fmt;
use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use super::app::CalculatorApp;
use super::ui::render;
use crate::error::CalcResult;

/// Raw-mode terminal guard
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSession").finish_non_exhaustive()
    }
}

impl TerminalSession {
    /// Switches the terminal into raw mode on the alternate screen
    pub fn acquire() -> CalcResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore(&mut stdout);
            return Err(e.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => {
                debug!("terminal session acquired");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore(&mut io::stdout());
                Err(e.into())
            }
        }
    }

    /// The terminal to draw on
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
        debug!("terminal session restored");
    }
}

/// Best-effort restore; failures here have nowhere left to be reported
fn restore<W: io::Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

/// Runs the interactive calculator until the user quits
pub fn run(app: CalculatorApp) -> CalcResult<CalculatorApp> {
    let mut session = TerminalSession::acquire()?;
    let app = run_app(session.terminal_mut(), app, event::read)?;
    Ok(app)
}

/// Draw-then-handle loop over any backend and event source
///
/// Redraws after every event so each transition is visible immediately.
pub fn run_app<B, F>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
    mut next_event: F,
) -> CalcResult<CalculatorApp>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    info!("interactive session started");
    while !app.should_quit() {
        terminal.draw(|frame| render(&app, frame))?;
        let event = next_event()?;
        let size = terminal.size()?;
        app.handle_event(&event, Rect::new(0, 0, size.width, size.height));
    }
    info!(display = %app.calculator().display(), "interactive session ended");
    Ok(app)
}

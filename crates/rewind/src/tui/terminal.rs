//! Raw-mode and alternate-screen setup with guaranteed teardown.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{debug, warn};

/// Puts the terminal back the way it was. Restores on drop if
/// [`TerminalGuard::restore`] was not called.
pub struct TerminalGuard<W: Write> {
    out: W,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `out` to the alternate screen with
    /// mouse capture. A failure part way through still restores on drop.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self::new(out);
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn new(out: W) -> Self {
        Self {
            out,
            restored: false,
        }
    }

    /// Runs every teardown step, returning the first error.
    pub fn restore(&mut self) -> io::Result<()> {
        self.restored = true;
        debug!("Restoring terminal");
        let raw = disable_raw_mode();
        let screen = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if !self.restored
            && let Err(e) = self.restore()
        {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

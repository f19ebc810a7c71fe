//! Terminal backend abstraction and crossterm implementation.
//!
//! Raw mode, alternate screen, and cursor visibility live here as the single
//! place the REPL's TTY lifetime is managed; the RAII guard restores
//! terminal state on drop so a panic mid-frame never leaves the user's shell
//! in raw mode.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{Write, stdout};
use std::time::Duration;

pub mod capabilities;
pub use capabilities::TerminalCapabilities;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn size(&self) -> Result<(u16, u16)>;
    fn write_frame(&mut self, bytes: &[u8]) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if the caller
/// early-returns or panics mid-frame.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode().context("enabling raw mode")?;
            execute!(stdout(), EnterAlternateScreen, Hide).context("entering alternate screen")?;
            self.entered = true;
            tracing::debug!("terminal entered raw/alternate mode");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show).context("leaving alternate screen")?;
            disable_raw_mode().context("disabling raw mode")?;
            self.entered = false;
            tracing::debug!("terminal restored");
        }
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size().context("querying terminal size")?;
        Ok((cols, rows))
    }

    /// Write a fully-composed frame in a single syscall. A short write is
    /// reported as an error rather than silently looping, matching the
    /// single-atomic-write contract the renderer depends on.
    fn write_frame(&mut self, bytes: &[u8]) -> Result<()> {
        let mut out = stdout();
        out.write_all(bytes).context("writing frame to terminal")?;
        out.flush().context("flushing frame to terminal")?;
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.backend.leave();
        }
    }
}

impl TerminalGuard<'_> {
    pub fn size(&self) -> Result<(u16, u16)> {
        self.backend.size()
    }

    pub fn write_frame(&mut self, bytes: &[u8]) -> Result<()> {
        self.backend.write_frame(bytes)
    }
}

/// Block for up to `timeout` waiting for the next terminal event
/// (key press or resize). Returns `None` on timeout, meaning the caller
/// should simply poll again — this is the only suspension point in the
/// event loop.
pub fn poll_event(timeout: Duration) -> Result<Option<crossterm::event::Event>> {
    if crossterm::event::poll(timeout).context("polling terminal events")? {
        Ok(Some(crossterm::event::read().context("reading terminal event")?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_backend_is_not_entered() {
        let backend = CrosstermBackend::new();
        assert!(!backend.entered);
    }
}

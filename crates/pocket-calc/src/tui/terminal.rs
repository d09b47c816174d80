//! Terminal setup and teardown
//!
//! Every setup step that succeeds is recorded. Teardown undoes the recorded
//! steps in reverse, runs all of them even when one fails, and reports the
//! first failure. [`TerminalGuard`] also tears down on drop, so an early
//! return never leaves the shell in raw mode.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// A terminal mode switched on during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    /// Raw mode enabled
    RawMode,
    /// Alternate screen entered
    AlternateScreen,
    /// Mouse capture enabled
    MouseCapture,
}

/// Completed setup steps, undone last-in first-out
#[derive(Debug, Default)]
pub struct Teardown {
    done: Vec<SetupStep>,
}

impl Teardown {
    /// Creates an empty teardown list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed step
    pub fn record(&mut self, step: SetupStep) {
        self.done.push(step);
    }

    /// Steps still to undo, in setup order
    #[must_use]
    pub fn pending(&self) -> &[SetupStep] {
        &self.done
    }

    /// Undoes every recorded step and returns the first error
    ///
    /// The list is empty afterwards, so a second call does nothing.
    pub fn unwind<F>(&mut self, mut undo: F) -> io::Result<()>
    where
        F: FnMut(SetupStep) -> io::Result<()>,
    {
        let mut first_error = None;
        while let Some(step) = self.done.pop() {
            if let Err(e) = undo(step) {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Reverses one setup step on stdout
pub fn undo_step(step: SetupStep) -> io::Result<()> {
    match step {
        SetupStep::RawMode => disable_raw_mode(),
        SetupStep::AlternateScreen => execute!(io::stdout(), LeaveAlternateScreen),
        SetupStep::MouseCapture => execute!(io::stdout(), DisableMouseCapture),
    }
}

/// Owns the terminal modes for the lifetime of the app
#[derive(Debug)]
pub struct TerminalGuard {
    teardown: Teardown,
}

impl TerminalGuard {
    /// Enables raw mode, the alternate screen and optionally mouse capture
    ///
    /// On failure the steps already taken are undone before returning.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        let mut guard = Self {
            teardown: Teardown::new(),
        };

        enable_raw_mode()?;
        guard.teardown.record(SetupStep::RawMode);

        execute!(io::stdout(), EnterAlternateScreen)?;
        guard.teardown.record(SetupStep::AlternateScreen);

        if mouse {
            execute!(io::stdout(), EnableMouseCapture)?;
            guard.teardown.record(SetupStep::MouseCapture);
        }

        Ok(guard)
    }

    /// Restores the terminal, reporting the first failed step
    pub fn restore(&mut self) -> io::Result<()> {
        self.teardown.unwind(undo_step)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best effort teardown - ignore errors during drop
        let _ = self.restore();
    }
}

//! Terminal mode handling. Restores the terminal on drop.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, info, warn};

/// The terminal state changes the UI needs, and their inverses.
pub trait TerminalMode {
    /// Turns on raw input.
    fn enable_raw(&mut self) -> io::Result<()>;
    /// Turns raw input back off.
    fn disable_raw(&mut self) -> io::Result<()>;
    /// Switches to the alternate screen.
    fn enter_alternate_screen(&mut self) -> io::Result<()>;
    /// Returns to the main screen and shows the cursor.
    fn leave_alternate_screen(&mut self) -> io::Result<()>;
}

/// Crossterm on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermMode;

impl TerminalMode for CrosstermMode {
    fn enable_raw(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable_raw(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }

    fn enter_alternate_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), LeaveAlternateScreen, Show)
    }
}

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard undoes whatever `enter` managed to set up, in reverse
/// order. This runs on normal return, on `?` and while unwinding a panic.
#[derive(Debug)]
pub struct TerminalGuard<M: TerminalMode> {
    mode: M,
    raw: bool,
    alternate: bool,
}

impl<M: TerminalMode> TerminalGuard<M> {
    /// Enters raw mode and the alternate screen.
    ///
    /// On failure the steps that already succeeded are rolled back before
    /// the error is returned.
    pub fn enter(mode: M) -> io::Result<Self> {
        let mut guard = Self {
            mode,
            raw: false,
            alternate: false,
        };
        guard.mode.enable_raw()?;
        guard.raw = true;
        guard.mode.enter_alternate_screen()?;
        guard.alternate = true;
        debug!("Terminal prepared");
        Ok(guard)
    }
}

impl<M: TerminalMode> Drop for TerminalGuard<M> {
    fn drop(&mut self) {
        info!("Restoring terminal");

        // Each step runs even if an earlier one failed.
        if self.alternate {
            if let Err(e) = self.mode.leave_alternate_screen() {
                warn!(error = %e, "Failed to leave alternate screen");
            }
            self.alternate = false;
        }

        if self.raw {
            if let Err(e) = self.mode.disable_raw() {
                warn!(error = %e, "Failed to disable raw mode");
            }
            self.raw = false;
        }
    }
}

/// Leaves the alternate screen before the panic message is printed, so it
/// lands on the main screen. The guard's drop still runs afterwards.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let mut mode = CrosstermMode;
        let _ = mode.leave_alternate_screen();
        let _ = mode.disable_raw();
        previous(panic_info);
    }));
}

//! Terminal setup and teardown utilities.
//!
//! [`setup_terminal`] switches to raw mode and the alternate screen with
//! mouse capture; [`restore_terminal`] undoes it. [`install_panic_hook`]
//! makes sure a panic leaves a usable shell behind and that the panic ends
//! up in the log file, since the UI owns stdout.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enters raw mode and the alternate screen, with mouse capture.
///
/// If any step after raw mode fails, raw mode is switched off again before
/// the error is returned.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use nexus_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok::<(), terminal::TerminalError>(())
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    entered.map_err(|err| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        TerminalError::Setup(err)
    })
}

/// Leaves the alternate screen, disables raw mode and shows the cursor.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that restores the terminal and logs the panic.
///
/// The previous hook still runs afterwards, so the panic message is printed
/// to the restored screen as usual. Call once at startup, before
/// [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        tracing::error!(panic = %panic_info, "application panicked");
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_phase() {
        let setup = TerminalError::Setup(io::Error::other("no tty"));
        assert_eq!(setup.to_string(), "failed to setup terminal: no tty");

        let restore = TerminalError::Restore(io::Error::other("closed"));
        assert_eq!(restore.to_string(), "failed to restore terminal: closed");
    }
}

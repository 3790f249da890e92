use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What was switched on at setup, and whether it still needs undoing.
struct TerminalModes {
    mouse: bool,
    active: AtomicBool,
}

impl TerminalModes {
    fn new(mouse: bool) -> Self {
        Self {
            mouse,
            active: AtomicBool::new(true),
        }
    }

    /// True for the first caller only.
    fn claim_restore(&self) -> bool {
        self.active.swap(false, Ordering::SeqCst)
    }

    fn restore(&self) {
        if !self.claim_restore() {
            return;
        }
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
    }
}

/// Puts the terminal back on drop, or from the panic hook if the UI panics
/// first. Whichever comes first wins.
pub struct TerminalGuard {
    modes: Arc<TerminalModes>,
}

impl TerminalGuard {
    fn install(mouse: bool) -> Self {
        let modes = Arc::new(TerminalModes::new(mouse));
        let hook_modes = Arc::clone(&modes);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            hook_modes.restore();
            previous(info);
        }));
        Self { modes }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.modes.restore();
    }
}

/// Raw mode plus alternate screen, with mouse capture when `mouse` is set.
pub fn setup_terminal(
    mouse: bool,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::install(mouse);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), Hide)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

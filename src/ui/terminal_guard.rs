use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::QueueableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex};

/// Restores the terminal on drop, and from the panic hook if we crash first.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
        }
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        if let Ok(mut slot) = self.cleanup.lock() {
            *slot = Some(Box::new(cleanup));
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Ok(mut slot) = cleanup.lock() {
                if let Some(cleanup) = slot.take() {
                    cleanup();
                }
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        if let Ok(mut slot) = self.cleanup.lock() {
            if let Some(cleanup) = slot.take() {
                cleanup();
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Screen modes a session switches on. `leave` undoes them in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenModes {
    /// Capture the wheel for scrolling.
    pub mouse: bool,
}

impl ScreenModes {
    fn enter<W: Write>(self, out: &mut W) -> io::Result<()> {
        out.queue(EnterAlternateScreen)?;
        if self.mouse {
            out.queue(EnableMouseCapture)?;
        }
        out.queue(TermClear(ClearType::All))?.queue(Hide)?;
        out.flush()
    }

    fn leave<W: Write>(self, out: &mut W) -> io::Result<()> {
        if self.mouse {
            out.queue(DisableMouseCapture)?;
        }
        out.queue(LeaveAlternateScreen)?.queue(Show)?;
        out.flush()
    }
}

/// Enter raw mode and the alternate screen.
pub fn setup_terminal(
    modes: ScreenModes,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    modes.enter(&mut stdout)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new();
    guard.set_cleanup(move || {
        let _ = disable_raw_mode();
        let _ = modes.leave(&mut io::stdout());
    });
    guard.install_panic_hook();

    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const ALT_ON: &str = "\x1b[?1049h";
    const ALT_OFF: &str = "\x1b[?1049l";
    const MOUSE_ON: &str = "\x1b[?1000h";
    const MOUSE_OFF: &str = "\x1b[?1000l";

    fn written(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).expect("writes to a buffer");
        String::from_utf8(out).expect("escape codes are ascii")
    }

    #[test]
    fn mouse_capture_follows_the_setting() {
        let with = ScreenModes { mouse: true };
        let entered = written(|out| with.enter(out));
        assert!(entered.starts_with(ALT_ON));
        assert!(entered.contains(MOUSE_ON));
        let left = written(|out| with.leave(out));
        let mouse_off = left.find(MOUSE_OFF).expect("mouse released");
        let alt_off = left.find(ALT_OFF).expect("alternate screen left");
        assert!(mouse_off < alt_off);

        let without = ScreenModes { mouse: false };
        assert!(!written(|out| without.enter(out)).contains(MOUSE_ON));
        assert!(!written(|out| without.leave(out)).contains(MOUSE_OFF));
    }

    #[test]
    fn cleanup_runs_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let guard = TerminalGuard::new();
        let counter = Arc::clone(&runs);
        guard.set_cleanup(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        guard.restore();
        drop(guard);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}

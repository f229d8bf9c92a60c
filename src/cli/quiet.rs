//! Global quiet mode and TTY detection for CLI.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, confirmations and the strength report.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Decorated output (colours, boxes) only goes to a terminal.
pub fn decorate_stdout() -> bool {
    !enabled() && std::io::stdout().is_terminal()
}

//! Centralized warning and status messages for CLI output.

use super::quiet;
use crate::terminal::{GREEN, RED, RESET, YELLOW};

/// Warning on stderr (yellow), suppressed in quiet mode
pub fn warn(msg: &str) {
    log::debug!("warning shown: {msg}");
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error on stderr (red), always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation on stderr (green), suppressed in quiet mode
pub fn info(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{GREEN}{msg}{RESET}");
    }
}

pub fn no_classes() {
    error("Select at least one character class: no password generated.");
}

pub fn clipboard_copied(count: usize) {
    if count == 1 {
        info("*** -COPIED TO CLIPBOARD- ***");
    } else {
        info(&format!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***"));
    }
}

/// Clipboard failure, always shown; output falls back to stdout
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
    warn("Printing to terminal instead.");
}

pub fn settings_saved(path: &str) {
    info(&format!("Settings saved \u{2192} {path}"));
}

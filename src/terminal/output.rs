//! Terminal output utilities.
//!
//! Box drawing, strength bar and colour mapping. Box helpers
//! return the line instead of printing it so raw-mode screens can join
//! lines with `\r\n`.

use passgauge::strength::{Score, StrengthLevel, TimeBand};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[38;5;78m";

const PURPLE: &str = "\x1b[38;5;141m";
const BLUE: &str = "\x1b[38;5;75m";
const PINK: &str = "\x1b[38;5;211m";
const GRAY: &str = "\x1b[38;5;245m";

// ============================================================================
// Colour mapping
// ============================================================================

pub fn level_color(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::Critical => "\x1b[38;5;160m",
        StrengthLevel::VeryWeak => "\x1b[38;5;203m",
        StrengthLevel::Weak => "\x1b[38;5;208m",
        StrengthLevel::Poor => "\x1b[38;5;215m",
        StrengthLevel::Fair => "\x1b[38;5;214m",
        StrengthLevel::Moderate => "\x1b[38;5;220m",
        StrengthLevel::Good => "\x1b[38;5;154m",
        StrengthLevel::Strong => GREEN,
        StrengthLevel::Great => "\x1b[38;5;42m",
        StrengthLevel::Superb => "\x1b[38;5;43m",
        StrengthLevel::Unbreakable => "\x1b[38;5;51m",
    }
}

pub fn band_color(band: TimeBand) -> &'static str {
    match band {
        TimeBand::Placeholder => GRAY,
        TimeBand::Instant | TimeBand::SubSecond => "\x1b[38;5;196m",
        TimeBand::Seconds => "\x1b[38;5;203m",
        TimeBand::Minutes | TimeBand::Hours => "\x1b[38;5;215m",
        TimeBand::Days | TimeBand::Weeks => "\x1b[38;5;220m",
        TimeBand::Months => "\x1b[38;5;228m",
        TimeBand::Years | TimeBand::Centuries => GREEN,
        TimeBand::Millennia => "\x1b[38;5;42m",
        TimeBand::MillionYears | TimeBand::BillionYears => "\x1b[38;5;51m",
        TimeBand::TrillionYears => BLUE,
        TimeBand::Uncrackable => PURPLE,
    }
}

/// Colour each character by class: upper, lower, digit, other.
pub fn colorize_password(password: &str) -> String {
    let mut out = String::with_capacity(password.len() * 12);
    for c in password.chars() {
        let color = match c {
            'A'..='Z' => PURPLE,
            'a'..='z' => GREEN,
            '0'..='9' => BLUE,
            _ => PINK,
        };
        out.push_str(color);
        out.push(c);
    }
    out.push_str(RESET);
    out
}

/// Ten-cell bar, one cell per score point.
pub fn strength_bar(score: Score) -> String {
    let filled = score.value() as usize;
    format!(
        "{}{}{}{}{}",
        level_color(score.level()),
        "█".repeat(filled),
        GRAY,
        "░".repeat(10 - filled),
        RESET
    )
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Horizontal rule inside a box.
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

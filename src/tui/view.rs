//! Screen layout. `render` is pure; `draw` writes it in one go.

use std::io::{self, Write};

use super::{App, Notice};
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, GREEN, RED, RESET, YELLOW, band_color, box_bottom, box_line, box_rule,
    box_top, colorize_password, level_color, strength_bar,
};
use passgauge::history::KeyValueStore;
use passgauge::pass::{CharClass, ClassSet, MAX_LENGTH, MIN_LENGTH};
use passgauge::rand::{OsRandom, SecureRandom};
use passgauge::strength::MAX_SCORE;

const INNER_WIDTH: usize = BOX_WIDTH - 4;
const SLIDER_CELLS: usize = 40;

pub fn draw<S: KeyValueStore, R: SecureRandom>(app: &App<S, R>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "\x1b[H\x1b[2J{}", render(app).join("\r\n"))?;
    out.flush()
}

pub fn render<S: KeyValueStore, R: SecureRandom>(app: &App<S, R>) -> Vec<String> {
    let settings = &app.settings;
    let assessment = &app.assessment;
    let level = assessment.level();

    let mut lines = vec![box_top("passgauge")];

    match &app.password {
        Some(pw) => {
            let chars: Vec<char> = pw.as_str().chars().collect();
            for chunk in chars.chunks(INNER_WIDTH) {
                let part: String = chunk.iter().collect();
                lines.push(box_line(&colorize_password(&part)));
            }
        }
        None => lines.push(box_line(&format!("{RED}no character class selected{RESET}"))),
    }

    lines.push(box_rule());
    lines.push(box_line(&format!(
        "{} {BOLD}{}/{MAX_SCORE}{RESET}  {}{}{RESET}",
        strength_bar(assessment.score),
        assessment.score.value(),
        level_color(level),
        assessment.label(settings.locale),
    )));
    lines.push(box_line(&format!(
        "Time to crack: {}{}{RESET}",
        band_color(assessment.crack_time.band),
        assessment.crack_time.text,
    )));

    lines.push(box_rule());
    lines.push(box_line(&format!(
        "Length {BOLD}{:>3}{RESET}  {}",
        settings.length,
        slider(settings.length)
    )));
    lines.push(box_line(&class_toggles(settings.classes())));
    lines.push(box_line(&format!(
        "[x] {} exclude similar   [l] language {}   {DIM}{}{RESET}",
        checkbox(settings.exclude_similar),
        settings.locale.code(),
        OsRandom::source_name(),
    )));

    lines.push(box_rule());
    lines.push(box_line(&format!(
        "{BOLD}History{RESET}  {DIM}alt+1..alt+0 copy entry{RESET}"
    )));
    if app.history.is_empty() {
        lines.push(box_line(&format!("{DIM}(empty){RESET}")));
    }
    for (i, pw) in app.history.entries().iter().enumerate() {
        lines.push(box_line(&format!("{DIM}{:>2}.{RESET} {}", i + 1, clip(pw, INNER_WIDTH - 4))));
    }

    lines.push(box_rule());
    if let Some(notice) = &app.notice {
        lines.push(box_line(&notice_text(notice)));
    }
    lines.push(box_line(&format!(
        "{DIM}←→ ±1  ↓↑ ±8  1-4 classes  enter new  c copy  h clear  q quit{RESET}"
    )));
    lines.push(box_bottom());
    lines
}

fn slider(length: usize) -> String {
    let span = MAX_LENGTH - MIN_LENGTH;
    let pos = (length.clamp(MIN_LENGTH, MAX_LENGTH) - MIN_LENGTH) * (SLIDER_CELLS - 1) / span;
    format!(
        "{GREEN}{}\u{25cf}{RESET}{DIM}{}{RESET}",
        "\u{2501}".repeat(pos),
        "\u{2500}".repeat(SLIDER_CELLS - 1 - pos)
    )
}

fn class_toggles(classes: ClassSet) -> String {
    CharClass::ALL
        .iter()
        .enumerate()
        .map(|(i, class)| {
            let on = checkbox(classes.contains(*class));
            format!("[{}] {on} {}", i + 1, class.name())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn checkbox(on: bool) -> String {
    if on {
        format!("{GREEN}\u{25a0}{RESET}")
    } else {
        format!("{DIM}\u{25a1}{RESET}")
    }
}

/// Shorten to `max` characters with a trailing ellipsis.
fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('\u{2026}');
    out
}

fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::Copied => format!("{GREEN}*** -COPIED TO CLIPBOARD- ***{RESET}"),
        Notice::CopiedHistory(n) => format!("{GREEN}*** -HISTORY #{n} COPIED- ***{RESET}"),
        Notice::CopyFailed => format!("{RED}Clipboard unavailable{RESET}"),
        Notice::NothingToCopy => format!("{YELLOW}Nothing to copy{RESET}"),
        Notice::NoClasses => format!("{RED}Select at least one character class{RESET}"),
        Notice::HistoryCleared => format!("{GREEN}History cleared{RESET}"),
        Notice::Failed(msg) => format!("{RED}{msg}{RESET}"),
    }
}

//! Key bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use std::io;

use passgauge::pass::CharClass;

/// Big slider step for ↑/↓.
pub const LENGTH_STEP: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shorter(usize),
    Longer(usize),
    Toggle(CharClass),
    ExcludeSimilar,
    Regenerate,
    Copy,
    /// History position, 0 = newest.
    CopyHistory(usize),
    ClearHistory,
    SwitchLocale,
    Redraw,
    Quit,
}

/// Block for the next event; `None` for keys with no binding.
pub fn next_action() -> io::Result<Option<Action>> {
    match read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(action_for(key)),
        Event::Resize(..) => Ok(Some(Action::Redraw)),
        _ => Ok(None),
    }
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char(d @ '0'..='9') => Some(Action::CopyHistory(history_slot(d))),
            _ => None,
        };
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        // Raw mode swallows SIGINT, so Ctrl+C is free to mean copy.
        KeyCode::Char('c') if ctrl => Action::Copy,
        KeyCode::Char('g') if ctrl => Action::Regenerate,
        _ if ctrl => return None,

        KeyCode::Left => Action::Shorter(1),
        KeyCode::Right => Action::Longer(1),
        KeyCode::Down => Action::Shorter(LENGTH_STEP),
        KeyCode::Up => Action::Longer(LENGTH_STEP),
        KeyCode::Char(d @ '1'..='4') => {
            Action::Toggle(CharClass::ALL[(d as u8 - b'1') as usize])
        }
        KeyCode::Char('x') => Action::ExcludeSimilar,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Regenerate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('h') => Action::ClearHistory,
        KeyCode::Char('l') => Action::SwitchLocale,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Alt+1 is the newest entry and Alt+0 the tenth, following the key row.
fn history_slot(digit: char) -> usize {
    (digit as usize - '0' as usize + 9) % 10
}

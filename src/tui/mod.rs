//! Interactive generator: one screen, every keypress regenerates.

mod input;
mod view;

use std::io;

use crate::terminal::{RED, RESET, RawModeGuard, YELLOW};
use input::Action;
use passgauge::clipboard::{self, Clipboard, MemoryClipboard, SystemClipboard};
use passgauge::history::{FileStore, History, KeyValueStore};
use passgauge::pass::{self, GeneratedPassword, MAX_LENGTH, MIN_LENGTH};
use passgauge::rand::{OsRandom, SecureRandom};
use passgauge::settings::{self, Settings};
use passgauge::strength::{StrengthAssessment, assess_in};
use passgauge::Error;

/// One-shot status shown under the options until the next key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied,
    /// 1-based history position.
    CopiedHistory(usize),
    CopyFailed,
    NothingToCopy,
    NoClasses,
    HistoryCleared,
    Failed(String),
}

pub struct App<S: KeyValueStore, R: SecureRandom> {
    settings: Settings,
    history: History<S>,
    rng: R,
    password: Option<GeneratedPassword>,
    assessment: StrengthAssessment,
    notice: Option<Notice>,
}

impl<S: KeyValueStore, R: SecureRandom> App<S, R> {
    pub fn new(mut settings: Settings, store: S, rng: R) -> Self {
        settings.normalize();
        let mut app = Self {
            settings,
            history: History::load(store),
            rng,
            password: None,
            assessment: StrengthAssessment::empty(),
            notice: None,
        };
        app.regenerate();
        app
    }

    /// Returns `false` once the user asked to quit.
    pub fn apply(&mut self, action: Action, clipboard: &mut dyn Clipboard) -> bool {
        self.notice = None;
        match action {
            Action::Shorter(n) => self.set_length(self.settings.length.saturating_sub(n)),
            Action::Longer(n) => self.set_length(self.settings.length.saturating_add(n)),
            Action::Toggle(class) => {
                self.settings.toggle(class);
                self.regenerate();
            }
            Action::ExcludeSimilar => {
                self.settings.exclude_similar = !self.settings.exclude_similar;
                self.regenerate();
            }
            Action::Regenerate => self.regenerate(),
            Action::Copy => self.copy(clipboard),
            Action::CopyHistory(index) => self.copy_history(index, clipboard),
            Action::ClearHistory => match self.history.clear() {
                Ok(()) => self.notice = Some(Notice::HistoryCleared),
                Err(e) => {
                    log::warn!("failed to clear history: {e}");
                    self.notice = Some(Notice::Failed(format!("history: {e}")));
                }
            },
            Action::SwitchLocale => {
                self.settings.locale = self.settings.locale.next();
                self.reassess();
            }
            Action::Redraw => {}
            Action::Quit => return false,
        }
        true
    }

    fn set_length(&mut self, length: usize) {
        let length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        if length != self.settings.length {
            self.settings.length = length;
            self.regenerate();
        }
    }

    fn regenerate(&mut self) {
        match pass::generate(&self.settings.request(), &mut self.rng) {
            Ok(pw) => {
                if let Err(e) = self.history.record(pw.as_str()) {
                    log::warn!("failed to record history: {e}");
                    self.notice = Some(Notice::Failed(format!("history: {e}")));
                }
                self.password = Some(pw);
                self.reassess();
            }
            Err(Error::NoCharacterClasses) => {
                self.password = None;
                self.assessment = StrengthAssessment::empty();
                self.notice = Some(Notice::NoClasses);
            }
            Err(e) => {
                self.password = None;
                self.assessment = StrengthAssessment::empty();
                self.notice = Some(Notice::Failed(e.to_string()));
            }
        }
    }

    fn reassess(&mut self) {
        self.assessment = match &self.password {
            Some(pw) => assess_in(pw.as_str(), self.settings.locale),
            None => StrengthAssessment::empty(),
        };
    }

    fn copy(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(pw) = &self.password else {
            self.notice = Some(Notice::NothingToCopy);
            return;
        };
        self.notice = Some(if clipboard::copy_or_warn(clipboard, pw.as_str()) {
            Notice::Copied
        } else {
            Notice::CopyFailed
        });
    }

    fn copy_history(&mut self, index: usize, clipboard: &mut dyn Clipboard) {
        let Some(entry) = self.history.entries().get(index) else {
            self.notice = Some(Notice::NothingToCopy);
            return;
        };
        self.notice = Some(if clipboard::copy_or_warn(clipboard, entry) {
            Notice::CopiedHistory(index + 1)
        } else {
            Notice::CopyFailed
        });
    }
}

/// Run with the saved settings.
pub fn run() -> i32 {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });
    run_with(settings)
}

/// Run until quit, then persist the settings the session ended with.
pub fn run_with(settings: Settings) -> i32 {
    let mut clipboard: Box<dyn Clipboard> = match SystemClipboard::new() {
        Ok(cb) => Box::new(cb),
        Err(e) => {
            log::warn!("clipboard unavailable: {e}");
            Box::new(MemoryClipboard {
                fail: true,
                ..Default::default()
            })
        }
    };

    let mut app = App::new(settings, FileStore::new(settings::config_dir()), OsRandom);

    let mut guard = match RawModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{RED}Failed to start interactive mode: {e}{RESET}");
            return 1;
        }
    };
    let result = event_loop(&mut app, clipboard.as_mut());
    guard.disable();

    if let Err(e) = app.settings.save_to_file() {
        eprintln!("{YELLOW}Failed to save settings: {e}{RESET}");
    }

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{RED}Terminal error: {e}{RESET}");
            1
        }
    }
}

fn event_loop<S: KeyValueStore, R: SecureRandom>(
    app: &mut App<S, R>,
    clipboard: &mut dyn Clipboard,
) -> io::Result<()> {
    loop {
        view::draw(app)?;
        let Some(action) = input::next_action()? else {
            continue;
        };
        if !app.apply(action, clipboard) {
            return Ok(());
        }
    }
}

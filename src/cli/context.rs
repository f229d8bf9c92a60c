//! CLI context - bundles saved settings, effective settings and flags.

use std::io::{self, BufRead};

use zeroize::Zeroize;

use super::args::{Args, Command};
use super::report::{JsonReport, strength_box, summary_line};
use super::{prompts, quiet};
use crate::tui;
use passgauge::clipboard::{self, Clipboard, SystemClipboard};
use passgauge::history::{FileStore, History, KeyValueStore};
use passgauge::pass::{self, GeneratedPassword};
use passgauge::rand::OsRandom;
use passgauge::settings::{self, Settings};
use passgauge::strength::{StrengthAssessment, assess_in};
use passgauge::{Error, Result};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NO_CLASSES: i32 = 2;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    args: Args,
}

impl Context {
    pub fn new(args: Args) -> Self {
        // `check` only reads; it never creates the settings file.
        let loaded = if matches!(args.command, Some(Command::Check { .. })) {
            Settings::read_from_file().map(Option::unwrap_or_default)
        } else {
            Settings::load_from_file()
        };
        let saved_settings = loaded.unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });

        let mut ctx = Self {
            settings: saved_settings.clone(),
            saved_settings,
            args,
        };
        ctx.apply_flags();
        ctx
    }

    /// Run the selected command and return the process exit code.
    pub fn run(&mut self) -> i32 {
        match self.args.command.take() {
            Some(Command::Check { password }) => self.check(password),
            Some(Command::History { clear, copy }) => self.history(clear, copy),
            Some(Command::Tui) => tui::run_with(self.settings.clone()),
            None => self.generate_output(),
        }
    }

    /// Flags override the saved settings for this run only.
    fn apply_flags(&mut self) {
        if let Some(len) = self.args.length {
            self.settings.length = usize::from(len);
        }
        if self.args.no_upper {
            self.settings.uppercase = false;
        }
        if self.args.no_lower {
            self.settings.lowercase = false;
        }
        if self.args.no_digits {
            self.settings.digits = false;
        }
        if self.args.no_symbols {
            self.settings.symbols = false;
        }
        if self.args.exclude_similar {
            self.settings.exclude_similar = true;
        }
        if let Some(locale) = self.args.lang {
            self.settings.locale = locale;
        }
        self.settings.normalize();
    }

    fn generate_output(&mut self) -> i32 {
        let request = self.settings.request();
        let count = self.args.number.max(1);

        let passwords = match pass::generate_batch(&request, count, &mut OsRandom) {
            Ok(passwords) => passwords,
            Err(Error::NoCharacterClasses) => {
                prompts::no_classes();
                if self.args.json {
                    self.print_json(None, &StrengthAssessment::empty());
                }
                return EXIT_NO_CLASSES;
            }
            Err(e) => {
                prompts::error(&e.to_string());
                return EXIT_FAILURE;
            }
        };

        if self.args.save {
            self.save_settings();
        }
        if !self.args.no_history {
            self.record_history(&passwords);
        }

        let copied = self.args.clipboard && self.copy_to_clipboard(&passwords);
        print_lines(self.output_lines(&passwords, copied));
        EXIT_OK
    }

    /// Stdout for a generated batch. Once copied, passwords are left out of
    /// the output and only their assessment is shown.
    fn output_lines(&self, passwords: &[GeneratedPassword], copied: bool) -> Vec<String> {
        let locale = self.settings.locale;

        if self.args.json {
            return passwords
                .iter()
                .filter_map(|pw| {
                    let shown = (!copied).then_some(pw.as_str());
                    self.json_line(shown, &assess_in(pw.as_str(), locale))
                })
                .collect();
        }

        let decorate = quiet::decorate_stdout();
        if copied {
            return match passwords {
                [pw] if decorate => strength_box(None, &assess_in(pw.as_str(), locale), locale),
                _ => Vec::new(),
            };
        }

        match passwords {
            _ if !decorate => passwords.iter().map(|pw| pw.as_str().to_string()).collect(),
            [pw] => strength_box(Some(pw.as_str()), &assess_in(pw.as_str(), locale), locale),
            _ => passwords
                .iter()
                .map(|pw| summary_line(pw.as_str(), &assess_in(pw.as_str(), locale)))
                .collect(),
        }
    }

    /// Returns `false` when the clipboard is unavailable; the caller prints
    /// instead.
    fn copy_to_clipboard(&self, passwords: &[GeneratedPassword]) -> bool {
        let mut joined = passwords
            .iter()
            .map(GeneratedPassword::as_str)
            .collect::<Vec<_>>()
            .join("\n");

        let result = SystemClipboard::new().and_then(|mut cb| cb.copy(&joined));
        joined.zeroize();

        match result {
            Ok(()) => {
                prompts::clipboard_copied(passwords.len());
                true
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                false
            }
        }
    }

    fn record_history(&self, passwords: &[GeneratedPassword]) {
        let mut history = History::load(FileStore::new(settings::config_dir()));
        let batch: Vec<&str> = passwords.iter().map(GeneratedPassword::as_str).collect();
        if let Err(e) = history.record_all(&batch) {
            prompts::warn(&format!("Failed to update history: {e}"));
        }
    }

    fn save_settings(&mut self) {
        self.saved_settings = self.settings.clone();
        match self.saved_settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&settings::config_dir().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn check(&self, password: Option<String>) -> i32 {
        let mut password = match password.map_or_else(read_password, Ok) {
            Ok(pw) => pw,
            Err(e) => {
                prompts::error(&format!("Failed to read password: {e}"));
                return EXIT_FAILURE;
            }
        };

        let locale = self.settings.locale;
        let assessment = assess_in(&password, locale);
        if self.args.json {
            self.print_json(None, &assessment);
        } else if quiet::enabled() {
            println!("{}", assessment.score.value());
        } else {
            print_lines(strength_box(None, &assessment, locale));
        }

        password.zeroize();
        EXIT_OK
    }

    fn history(&self, clear: bool, copy: Option<usize>) -> i32 {
        let mut history = History::load(FileStore::new(settings::config_dir()));

        if let Some(n) = copy {
            return match SystemClipboard::new() {
                Ok(mut cb) => copy_entry(&history, n, &mut cb),
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    EXIT_FAILURE
                }
            };
        }

        if clear {
            return match history.clear() {
                Ok(()) => {
                    prompts::info("History cleared");
                    EXIT_OK
                }
                Err(e) => {
                    prompts::error(&format!("Failed to clear history: {e}"));
                    EXIT_FAILURE
                }
            };
        }

        if self.args.json {
            match serde_json::to_string(history.entries()) {
                Ok(mut json) => {
                    println!("{json}");
                    json.zeroize();
                }
                Err(e) => prompts::error(&e.to_string()),
            }
        } else if history.is_empty() {
            prompts::info("(no history)");
        } else {
            for (i, pw) in history.entries().iter().enumerate() {
                println!("{:>2}. {pw}", i + 1);
            }
        }
        EXIT_OK
    }

    fn print_json(&self, password: Option<&str>, assessment: &StrengthAssessment) {
        print_lines(self.json_line(password, assessment).into_iter().collect());
    }

    fn json_line(
        &self,
        password: Option<&str>,
        assessment: &StrengthAssessment,
    ) -> Option<String> {
        let report = JsonReport::new(password, assessment, self.settings.locale);
        serde_json::to_string(&report)
            .map_err(|e| prompts::error(&e.to_string()))
            .ok()
    }
}

/// Copy the `n`th entry (1 = newest) of the history.
fn copy_entry<S: KeyValueStore>(
    history: &History<S>,
    n: usize,
    clipboard: &mut dyn Clipboard,
) -> i32 {
    let Some(entry) = n.checked_sub(1).and_then(|i| history.entries().get(i)) else {
        prompts::error(&format!(
            "No history entry {n} ({} recorded)",
            history.entries().len()
        ));
        return EXIT_FAILURE;
    };

    if clipboard::copy_or_warn(clipboard, entry) {
        prompts::clipboard_copied(1);
        EXIT_OK
    } else {
        prompts::error("Clipboard error: copy failed");
        EXIT_FAILURE
    }
}

/// First line of stdin without its line terminator.
fn read_password() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Lines may hold passwords; wiped once written.
fn print_lines(lines: Vec<String>) {
    for mut line in lines {
        println!("{line}");
        line.zeroize();
    }
}

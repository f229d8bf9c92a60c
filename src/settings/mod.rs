//! Persisted generator preferences.

mod file;

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pass::{CharClass, ClassSet, DEFAULT_LENGTH, GenerationRequest, MAX_LENGTH, MIN_LENGTH};
use crate::strength::Locale;

/// Overrides the config directory.
pub const HOME_ENV: &str = "PASSGAUGE_HOME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
    pub locale: Locale,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        file::load(&file::path(&config_dir()))
    }

    /// Like [`Settings::load_from_file`] but never writes: `None` when no
    /// file exists yet.
    pub fn read_from_file() -> Result<Option<Self>> {
        file::read(&file::path(&config_dir()))
    }

    pub fn save_to_file(&self) -> Result<()> {
        file::save(self, &file::path(&config_dir()))
    }

    pub fn classes(&self) -> ClassSet {
        let mut set = ClassSet::empty();
        set.set(CharClass::Uppercase, self.uppercase);
        set.set(CharClass::Lowercase, self.lowercase);
        set.set(CharClass::Digits, self.digits);
        set.set(CharClass::Symbols, self.symbols);
        set
    }

    pub fn set_classes(&mut self, classes: ClassSet) {
        self.uppercase = classes.contains(CharClass::Uppercase);
        self.lowercase = classes.contains(CharClass::Lowercase);
        self.digits = classes.contains(CharClass::Digits);
        self.symbols = classes.contains(CharClass::Symbols);
    }

    pub fn toggle(&mut self, class: CharClass) {
        let mut classes = self.classes();
        classes.toggle(class);
        self.set_classes(classes);
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length)
            .with_classes(self.classes())
            .exclude_similar(self.exclude_similar)
    }

    /// Clamp values a hand-edited file may have pushed out of range.
    pub fn normalize(&mut self) {
        self.length = self.length.clamp(MIN_LENGTH, MAX_LENGTH);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
            locale: Locale::default(),
        }
    }
}

/// `$PASSGAUGE_HOME`, else `$HOME/.config/passgauge`.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var(HOME_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("passgauge")
}

//! Character classes and pool building for password generation.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::GenerationRequest;
use crate::error::{Error, Result};
use crate::rand::SecureRandom;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Visually ambiguous glyphs dropped when "exclude similar" is on.
pub const SIMILAR: &str = "il1Lo0O";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Enablement order: required characters are emitted in this order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn members(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Symbols keep their full set regardless of the exclude-similar flag.
    pub fn filters_similar(self) -> bool {
        !matches!(self, CharClass::Symbols)
    }

    /// Members after optional similar-character removal.
    pub fn filtered(self, exclude_similar: bool) -> Vec<char> {
        let strip = exclude_similar && self.filters_similar();
        self.members()
            .chars()
            .filter(|c| !strip || !SIMILAR.contains(*c))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Uppercase => 0b0001,
            CharClass::Lowercase => 0b0010,
            CharClass::Digits => 0b0100,
            CharClass::Symbols => 0b1000,
        }
    }
}

/// Set of enabled classes. Iteration always follows [`CharClass::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub fn empty() -> Self {
        ClassSet(0)
    }

    pub fn all() -> Self {
        CharClass::ALL.into_iter().collect()
    }

    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.0 ^= class.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Combined selection pool plus one required character per usable class.
pub struct Pool {
    pub chars: Vec<char>,
    pub required: Vec<char>,
}

impl Drop for Pool {
    fn drop(&mut self) {
        self.required.zeroize();
    }
}

/// Build the pool for `request`, drawing each class's required character
/// from `rng` as the class is added.
pub fn build<R: SecureRandom>(request: &GenerationRequest, rng: &mut R) -> Result<Pool> {
    let mut chars = Vec::new();
    let mut required = Vec::with_capacity(request.classes.len());

    for class in request.classes.iter() {
        let members = class.filtered(request.exclude_similar);
        if !members.is_empty() {
            required.push(members[rng.index(members.len())]);
        }
        chars.extend(members);
    }

    if chars.is_empty() {
        return Err(Error::NoCharacterClasses);
    }

    Ok(Pool { chars, required })
}

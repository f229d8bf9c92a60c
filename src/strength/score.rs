//! Score banding: crack time to a 0-10 rating.

use serde::{Serialize, Serializer};

use super::locale::Locale;
use super::time::{DAY, HOUR, MINUTE, MONTH, WEEK, YEAR};

/// Upper bounds (exclusive) for scores 0..=9; anything beyond is 10.
const THRESHOLDS: [f64; 10] = [
    1.0,
    MINUTE,
    HOUR,
    DAY,
    WEEK,
    MONTH,
    YEAR,
    YEAR * 100.0,
    YEAR * 10_000.0,
    YEAR * 1e9,
];

pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    pub const ZERO: Score = Score(0);

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn level(self) -> StrengthLevel {
        StrengthLevel::ALL[self.0 as usize]
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Score derived from crack time alone.
pub fn score_for(seconds: f64) -> Score {
    let idx = THRESHOLDS
        .iter()
        .position(|limit| seconds < *limit)
        .unwrap_or(THRESHOLDS.len());
    Score(idx as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Critical,
    VeryWeak,
    Weak,
    Poor,
    Fair,
    Moderate,
    Good,
    Strong,
    Great,
    Superb,
    Unbreakable,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 11] = [
        StrengthLevel::Critical,
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Poor,
        StrengthLevel::Fair,
        StrengthLevel::Moderate,
        StrengthLevel::Good,
        StrengthLevel::Strong,
        StrengthLevel::Great,
        StrengthLevel::Superb,
        StrengthLevel::Unbreakable,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        let (en, ru) = match self {
            StrengthLevel::Critical => ("Critical", "Критический"),
            StrengthLevel::VeryWeak => ("Very weak", "Очень слабый"),
            StrengthLevel::Weak => ("Weak", "Слабый"),
            StrengthLevel::Poor => ("Poor", "Ненадёжный"),
            StrengthLevel::Fair => ("Below average", "Ниже среднего"),
            StrengthLevel::Moderate => ("Moderate", "Средний"),
            StrengthLevel::Good => ("Above average", "Выше среднего"),
            StrengthLevel::Strong => ("Strong", "Надёжный"),
            StrengthLevel::Great => ("Excellent", "Отличный"),
            StrengthLevel::Superb => ("Superb", "Превосходный"),
            StrengthLevel::Unbreakable => ("Unbreakable", "Неприступный"),
        };
        match locale {
            Locale::En => en,
            Locale::Ru => ru,
        }
    }

    /// Style class for rendering surfaces that key off names.
    pub fn class_name(self) -> &'static str {
        match self {
            StrengthLevel::Critical => "strength-critical",
            StrengthLevel::VeryWeak => "strength-very-weak",
            StrengthLevel::Weak => "strength-weak",
            StrengthLevel::Poor => "strength-poor",
            StrengthLevel::Fair => "strength-fair",
            StrengthLevel::Moderate => "strength-moderate",
            StrengthLevel::Good => "strength-good",
            StrengthLevel::Strong => "strength-strong",
            StrengthLevel::Great => "strength-great",
            StrengthLevel::Superb => "strength-superb",
            StrengthLevel::Unbreakable => "strength-excellent",
        }
    }
}

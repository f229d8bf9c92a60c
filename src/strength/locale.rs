//! Label language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::plural::{self, PluralForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Cycle to the next supported locale.
    pub fn next(self) -> Self {
        match self {
            Locale::En => Locale::Ru,
            Locale::Ru => Locale::En,
        }
    }

    pub fn plural_form(self, n: u64) -> PluralForm {
        match self {
            Locale::En if n == 1 => PluralForm::One,
            Locale::En => PluralForm::Many,
            Locale::Ru => plural::select(n),
        }
    }

    /// Pick the word matching `n`.
    pub fn pluralize<'a>(self, n: u64, forms: [&'a str; 3]) -> &'a str {
        let [one, few, many] = forms;
        match self.plural_form(n) {
            PluralForm::One => one,
            PluralForm::Few => few,
            PluralForm::Many => many,
        }
    }

    /// Thousands separator used for large counts.
    pub fn group_separator(self) -> char {
        match self {
            Locale::En => ',',
            Locale::Ru => '\u{a0}',
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            other => Err(format!("unsupported language: {other} (expected en or ru)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_two_forms() {
        let forms = ["day", "days", "days"];
        assert_eq!(Locale::En.pluralize(1, forms), "day");
        assert_eq!(Locale::En.pluralize(2, forms), "days");
        assert_eq!(Locale::En.pluralize(21, forms), "days");
    }

    #[test]
    fn russian_uses_three_forms() {
        let forms = ["день", "дня", "дней"];
        assert_eq!(Locale::Ru.pluralize(1, forms), "день");
        assert_eq!(Locale::Ru.pluralize(3, forms), "дня");
        assert_eq!(Locale::Ru.pluralize(5, forms), "дней");
        assert_eq!(Locale::Ru.pluralize(12, forms), "дней");
    }

    #[test]
    fn parses_codes() {
        assert_eq!("RU".parse::<Locale>(), Ok(Locale::Ru));
        assert_eq!("english".parse::<Locale>(), Ok(Locale::En));
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::En.next(), Locale::Ru);
    }
}

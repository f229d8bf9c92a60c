//! Password strength estimation.
//!
//! `assess` is a pure function of its input: effective pool size from the
//! characters present, pattern and uniqueness penalties, then the average
//! time a fixed-rate offline attacker needs. Score and label are both derived
//! from that time, so they can never disagree.

mod crack;
mod format;
mod locale;
mod patterns;
mod plural;
mod pool;
mod score;
mod time;

use serde::{Serialize, Serializer};

pub use crack::GUESSES_PER_SECOND;
pub use format::{CrackTime, TimeBand, format_crack_time, group_digits};
pub use locale::Locale;
pub use patterns::{MAX_PENALTY, pattern_penalty};
pub use plural::PluralForm;
pub use pool::pool_size;
pub use score::{MAX_SCORE, Score, StrengthLevel, score_for};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthAssessment {
    pub length: usize,
    pub pool_size: u32,
    /// Search space after penalties. `+inf` means practically infinite.
    #[serde(serialize_with = "serialize_unbounded")]
    pub combinations: f64,
    pub pattern_penalty: u32,
    pub uniqueness_ratio: f64,
    #[serde(serialize_with = "serialize_unbounded")]
    pub seconds_to_crack: f64,
    pub score: Score,
    pub crack_time: CrackTime,
}

impl StrengthAssessment {
    /// Neutral "no data" state: score 0, zero seconds, placeholder label.
    pub fn empty() -> Self {
        Self {
            length: 0,
            pool_size: 0,
            combinations: 0.0,
            pattern_penalty: 0,
            uniqueness_ratio: 0.0,
            seconds_to_crack: 0.0,
            score: Score::ZERO,
            crack_time: CrackTime::placeholder(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.crack_time.band == TimeBand::Placeholder
    }

    pub fn level(&self) -> StrengthLevel {
        self.score.level()
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        self.level().label(locale)
    }

    /// log2 of the penalised search space, for display only.
    pub fn entropy_bits(&self) -> f64 {
        if self.combinations <= 1.0 {
            return 0.0;
        }
        self.combinations.log2()
    }
}

/// JSON has no infinity; write it as the string `"inf"` instead of `null`.
fn serialize_unbounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_infinite() && value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Assess with English labels.
pub fn assess(password: &str) -> StrengthAssessment {
    assess_in(password, Locale::default())
}

pub fn assess_in(password: &str, locale: Locale) -> StrengthAssessment {
    let length = password.chars().count();
    let pool_size = pool::pool_size(password);
    if length == 0 || pool_size == 0 {
        return StrengthAssessment::empty();
    }

    let pattern_penalty = patterns::pattern_penalty(password);
    let uniqueness_ratio = crack::uniqueness_ratio(password);

    let mut combinations = crack::combinations(pool_size, length);
    combinations = crack::apply_pattern_penalty(combinations, pattern_penalty);
    combinations = crack::apply_uniqueness_penalty(combinations, uniqueness_ratio);

    let seconds_to_crack = crack::seconds_to_crack(combinations);
    let score = score::score_for(seconds_to_crack);
    let crack_time = format::format_crack_time(seconds_to_crack, locale);

    log::debug!(
        "assessed: length={} pool={} penalty={} unique={:.2} band={:?} score={}",
        length,
        pool_size,
        pattern_penalty,
        uniqueness_ratio,
        crack_time.band,
        score.value()
    );

    StrengthAssessment {
        length,
        pool_size,
        combinations,
        pattern_penalty,
        uniqueness_ratio,
        seconds_to_crack,
        score,
        crack_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_neutral() {
        let a = assess("");
        assert_eq!(a.score.value(), 0);
        assert_eq!(a.seconds_to_crack, 0.0);
        assert_eq!(a.crack_time.text, "—");
        assert!(a.is_empty());
        assert_eq!(a, StrengthAssessment::empty());
    }

    #[test]
    fn repeated_single_character() {
        let a = assess("aaaaaaaaaaaa");
        assert_eq!(a.pool_size, 26);
        assert!(a.pattern_penalty >= 15);
        assert_eq!(a.pattern_penalty, 25);
        assert!((a.uniqueness_ratio - 1.0 / 12.0).abs() < 1e-12);
        // 26^12 / 2^5 / 10 / 1e11 / 2 ~= 1491 s
        assert!((a.seconds_to_crack - 1491.077).abs() < 0.01);
        assert!(a.score.value() <= 2);
        assert_eq!(a.score.value(), 2);
        assert_eq!(a.crack_time.text, "25 min");
        assert_eq!(a.crack_time.band, TimeBand::Minutes);
    }

    #[test]
    fn random_looking_password_is_unbreakable() {
        let a = assess("Tq7#vR2!mZ9&kP4$");
        assert_eq!(a.pool_size, 94);
        assert_eq!(a.pattern_penalty, 0);
        assert_eq!(a.uniqueness_ratio, 1.0);
        assert_eq!(a.score.value(), MAX_SCORE);
        assert_eq!(a.level(), StrengthLevel::Unbreakable);
        assert_eq!(a.crack_time.band, TimeBand::TrillionYears);
        assert_eq!(a.crack_time.text, "6 trillion years");
    }

    #[test]
    fn overflow_maps_to_uncrackable() {
        let long = "Tq7#vR2!mZ9&kP4$".repeat(20);
        let a = assess(&long);
        assert_eq!(a.combinations, f64::INFINITY);
        assert_eq!(a.score.value(), MAX_SCORE);
        assert_eq!(a.crack_time.band, TimeBand::Uncrackable);
        assert_eq!(a.crack_time.text, "practically impossible");
    }

    #[test]
    fn short_digit_pin_is_critical() {
        let a = assess("4821");
        assert_eq!(a.pool_size, 10);
        assert_eq!(a.score.value(), 0);
        assert_eq!(a.crack_time.band, TimeBand::Instant);
    }

    #[test]
    fn deterministic() {
        for p in ["", "abc", "Pa$$w0rd", "correct horse battery staple"] {
            assert_eq!(assess(p), assess(p));
        }
    }

    #[test]
    fn localized_label() {
        let a = assess_in("aaaaaaaaaaaa", Locale::Ru);
        assert_eq!(a.crack_time.text, "25 мин.");
        assert_eq!(a.level().label(Locale::Ru), "Слабый");
    }

    #[test]
    fn entropy_bits_of_plain_space() {
        let a = assess("Tq7#vR2!mZ9&kP4$");
        assert!((a.entropy_bits() - 16.0 * 94f64.log2()).abs() < 1e-6);
        assert_eq!(StrengthAssessment::empty().entropy_bits(), 0.0);
    }
}

//! Human-readable crack time.

use serde::Serialize;

use super::locale::Locale;
use super::time::*;

/// Semantic category of a crack-time label, used to pick colour and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeBand {
    /// No password to assess.
    Placeholder,
    Instant,
    SubSecond,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    Centuries,
    Millennia,
    MillionYears,
    BillionYears,
    TrillionYears,
    Uncrackable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrackTime {
    pub text: String,
    pub band: TimeBand,
}

impl CrackTime {
    pub fn placeholder() -> Self {
        Self {
            text: "—".to_string(),
            band: TimeBand::Placeholder,
        }
    }
}

pub fn format_crack_time(seconds: f64, locale: Locale) -> CrackTime {
    let band = band_for(seconds);
    let text = match band {
        TimeBand::Placeholder => return CrackTime::placeholder(),
        TimeBand::Instant => fixed(locale, "instant", "мгновенно"),
        TimeBand::SubSecond => fixed(locale, "less than a second", "менее секунды"),
        TimeBand::Seconds => abbreviated(seconds, 1.0, locale, "sec", "сек."),
        TimeBand::Minutes => abbreviated(seconds, MINUTE, locale, "min", "мин."),
        TimeBand::Hours => abbreviated(seconds, HOUR, locale, "h", "ч."),
        TimeBand::Days => inflected(
            seconds,
            DAY,
            locale,
            ["day", "days", "days"],
            ["день", "дня", "дней"],
        ),
        TimeBand::Weeks => inflected(
            seconds,
            WEEK,
            locale,
            ["week", "weeks", "weeks"],
            ["неделя", "недели", "недель"],
        ),
        TimeBand::Months => inflected(
            seconds,
            MONTH,
            locale,
            ["month", "months", "months"],
            ["месяц", "месяца", "месяцев"],
        ),
        TimeBand::Years => inflected(
            seconds,
            YEAR,
            locale,
            ["year", "years", "years"],
            ["год", "года", "лет"],
        ),
        TimeBand::Centuries => inflected(
            seconds,
            CENTURY,
            locale,
            ["century", "centuries", "centuries"],
            ["век", "века", "веков"],
        ),
        TimeBand::Millennia => grouped(seconds, MILLENNIUM, locale, "thousand years", "тыс. лет"),
        TimeBand::MillionYears => {
            grouped(seconds, MILLION_YEARS, locale, "million years", "млн лет")
        }
        TimeBand::BillionYears => {
            grouped(seconds, BILLION_YEARS, locale, "billion years", "млрд лет")
        }
        TimeBand::TrillionYears => {
            grouped(seconds, TRILLION_YEARS, locale, "trillion years", "трлн лет")
        }
        TimeBand::Uncrackable => fixed(locale, "practically impossible", "практически невозможно"),
    };

    CrackTime { text, band }
}

/// Band for `seconds`; every threshold is exclusive.
pub fn band_for(seconds: f64) -> TimeBand {
    if !seconds.is_finite() || seconds < 0.0 {
        return TimeBand::Uncrackable;
    }

    const BANDS: [(f64, TimeBand); 14] = [
        (0.001, TimeBand::Instant),
        (1.0, TimeBand::SubSecond),
        (MINUTE, TimeBand::Seconds),
        (HOUR, TimeBand::Minutes),
        (DAY, TimeBand::Hours),
        (WEEK, TimeBand::Days),
        (MONTH, TimeBand::Weeks),
        (YEAR, TimeBand::Months),
        (CENTURY, TimeBand::Years),
        (MILLENNIUM, TimeBand::Centuries),
        (MILLION_YEARS, TimeBand::Millennia),
        (BILLION_YEARS, TimeBand::MillionYears),
        (TRILLION_YEARS, TimeBand::BillionYears),
        (UNIVERSE_AGE * 1000.0, TimeBand::TrillionYears),
    ];

    BANDS
        .iter()
        .find(|(limit, _)| seconds < *limit)
        .map(|(_, band)| *band)
        .unwrap_or(TimeBand::Uncrackable)
}

/// Group the digits of `n` in threes: `1234567` -> `1,234,567`.
pub fn group_digits(n: u64, separator: char) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3 * separator.len_utf8());
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

fn count(seconds: f64, unit: f64) -> u64 {
    (seconds / unit).round() as u64
}

fn fixed(locale: Locale, en: &str, ru: &str) -> String {
    match locale {
        Locale::En => en.to_string(),
        Locale::Ru => ru.to_string(),
    }
}

fn abbreviated(seconds: f64, unit: f64, locale: Locale, en: &str, ru: &str) -> String {
    format!("{} {}", count(seconds, unit), fixed(locale, en, ru))
}

fn inflected(seconds: f64, unit: f64, locale: Locale, en: [&str; 3], ru: [&str; 3]) -> String {
    let n = count(seconds, unit);
    let forms = match locale {
        Locale::En => en,
        Locale::Ru => ru,
    };
    format!("{} {}", n, locale.pluralize(n, forms))
}

fn grouped(seconds: f64, unit: f64, locale: Locale, en: &str, ru: &str) -> String {
    let n = count(seconds, unit);
    format!(
        "{} {}",
        group_digits(n, locale.group_separator()),
        fixed(locale, en, ru)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(seconds: f64) -> String {
        format_crack_time(seconds, Locale::En).text
    }

    fn ru(seconds: f64) -> String {
        format_crack_time(seconds, Locale::Ru).text
    }

    #[test]
    fn sub_second_bands() {
        assert_eq!(en(0.0), "instant");
        assert_eq!(en(0.000_999), "instant");
        assert_eq!(en(0.001), "less than a second");
        assert_eq!(ru(0.5), "менее секунды");
        assert_eq!(band_for(0.999), TimeBand::SubSecond);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(band_for(59.9), TimeBand::Seconds);
        assert_eq!(band_for(MINUTE), TimeBand::Minutes);
        assert_eq!(en(MINUTE), "1 min");
        assert_eq!(band_for(HOUR), TimeBand::Hours);
        assert_eq!(en(HOUR), "1 h");
        assert_eq!(band_for(DAY), TimeBand::Days);
        assert_eq!(band_for(WEEK), TimeBand::Weeks);
        assert_eq!(band_for(MONTH), TimeBand::Months);
        assert_eq!(band_for(YEAR), TimeBand::Years);
        assert_eq!(band_for(CENTURY), TimeBand::Centuries);
        assert_eq!(band_for(MILLENNIUM), TimeBand::Millennia);
    }

    #[test]
    fn counts_round_to_nearest() {
        assert_eq!(en(42.4), "42 sec");
        assert_eq!(en(1490.0), "25 min");
        assert_eq!(ru(5.0 * HOUR), "5 ч.");
        assert_eq!(en(59.6), "60 sec");
    }

    #[test]
    fn inflected_units() {
        assert_eq!(en(DAY), "1 day");
        assert_eq!(en(3.0 * DAY), "3 days");
        assert_eq!(ru(DAY), "1 день");
        assert_eq!(ru(3.0 * DAY), "3 дня");
        assert_eq!(ru(2.0 * WEEK), "2 недели");
        assert_eq!(ru(11.0 * MONTH), "11 месяцев");
        assert_eq!(ru(21.0 * YEAR), "21 год");
        assert_eq!(ru(22.0 * YEAR), "22 года");
        assert_eq!(ru(15.0 * YEAR), "15 лет");
        assert_eq!(en(5.0 * CENTURY), "5 centuries");
        assert_eq!(ru(5.0 * CENTURY), "5 веков");
    }

    #[test]
    fn large_counts_are_grouped() {
        assert_eq!(en(999.7 * MILLENNIUM), "1,000 thousand years");
        assert_eq!(ru(1234.0 * TRILLION_YEARS), "1\u{a0}234 трлн лет");
        assert_eq!(en(250.0 * MILLENNIUM), "250 thousand years");
        assert_eq!(en(7.0 * MILLION_YEARS), "7 million years");
        assert_eq!(ru(42.0 * BILLION_YEARS), "42 млрд лет");
        assert_eq!(en(12_000.0 * TRILLION_YEARS), "12,000 trillion years");
    }

    #[test]
    fn beyond_universe_scale_is_uncrackable() {
        assert_eq!(band_for(UNIVERSE_AGE * 1000.0), TimeBand::Uncrackable);
        assert_eq!(en(f64::INFINITY), "practically impossible");
        assert_eq!(ru(f64::MAX), "практически невозможно");
        assert_eq!(band_for(f64::NAN), TimeBand::Uncrackable);
    }

    #[test]
    fn digit_grouping() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(1_234_567, ' '), "1 234 567");
    }

    #[test]
    fn placeholder_is_dash() {
        let p = CrackTime::placeholder();
        assert_eq!(p.text, "—");
        assert_eq!(p.band, TimeBand::Placeholder);
    }
}

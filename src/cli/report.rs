//! Strength report rendering, boxed text and JSON lines.

use serde::Serialize;

use crate::terminal::{
    BOLD, DIM, RESET, band_color, box_bottom, box_line, box_rule, box_top, colorize_password,
    level_color, strength_bar,
};
use passgauge::strength::{Locale, MAX_SCORE, StrengthAssessment};

/// One JSON object per password.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
    pub level: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub assessment: &'a StrengthAssessment,
}

impl<'a> JsonReport<'a> {
    pub fn new(
        password: Option<&'a str>,
        assessment: &'a StrengthAssessment,
        locale: Locale,
    ) -> Self {
        let level = assessment.level();
        Self {
            password,
            level: level.class_name(),
            label: level.label(locale),
            assessment,
        }
    }
}

/// Boxed report for a single password.
pub fn strength_box(
    password: Option<&str>,
    assessment: &StrengthAssessment,
    locale: Locale,
) -> Vec<String> {
    let level = assessment.level();
    let mut lines = vec![box_top("Strength")];

    if let Some(pw) = password {
        lines.push(box_line(&colorize_password(pw)));
        lines.push(box_rule());
    }

    lines.push(box_line(&format!(
        "{} {BOLD}{}/{MAX_SCORE}{RESET}  {}{}{RESET}",
        strength_bar(assessment.score),
        assessment.score.value(),
        level_color(level),
        assessment.label(locale),
    )));
    lines.push(box_line(&format!(
        "Time to crack: {}{}{RESET}",
        band_color(assessment.crack_time.band),
        assessment.crack_time.text,
    )));

    if !assessment.is_empty() {
        lines.push(box_line(&format!(
            "{DIM}length {} · pool {} · entropy {:.1} bits · penalty {} · unique {:.0}%{RESET}",
            assessment.length,
            assessment.pool_size,
            assessment.entropy_bits(),
            assessment.pattern_penalty,
            assessment.uniqueness_ratio * 100.0,
        )));
    }

    lines.push(box_bottom());
    lines
}

/// Compact one-liner used when several passwords are printed.
pub fn summary_line(password: &str, assessment: &StrengthAssessment) -> String {
    format!(
        "{password}  {} {}{}{RESET}",
        strength_bar(assessment.score),
        band_color(assessment.crack_time.band),
        assessment.crack_time.text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{BOX_WIDTH, console_width};
    use passgauge::strength::{assess, assess_in};

    #[test]
    fn box_lines_share_width() {
        let a = assess("Tq7#vR2!mZ9&kP4$");
        for line in strength_box(Some("Tq7#vR2!mZ9&kP4$"), &a, Locale::En) {
            assert_eq!(console_width(&line), BOX_WIDTH, "{line:?}");
        }
    }

    #[test]
    fn empty_assessment_skips_details() {
        let lines = strength_box(None, &StrengthAssessment::empty(), Locale::En);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains('\u{2014}'));
    }

    #[test]
    fn json_flattens_assessment() {
        let a = assess_in("aaaaaaaaaaaa", Locale::Ru);
        let value = serde_json::to_value(JsonReport::new(Some("aaaaaaaaaaaa"), &a, Locale::Ru))
            .unwrap();
        assert_eq!(value["password"], "aaaaaaaaaaaa");
        assert_eq!(value["score"], 2);
        assert_eq!(value["pattern_penalty"], 25);
        assert_eq!(value["label"], "Слабый");
    }

    #[test]
    fn json_keeps_overflow_distinct_from_missing() {
        let pw = "Tq7#vR2!mZ9&kP4$".repeat(20);
        let a = assess(&pw);
        let value = serde_json::to_value(JsonReport::new(None, &a, Locale::En)).unwrap();
        assert_eq!(value["combinations"], "inf");
        assert_eq!(value["seconds_to_crack"], "inf");
        assert_eq!(value["score"], 10);

        let finite = serde_json::to_value(JsonReport::new(None, &assess("4821"), Locale::En))
            .unwrap();
        assert!(finite["seconds_to_crack"].is_number());
    }

    #[test]
    fn json_omits_password_when_absent() {
        let a = assess("4821");
        let value = serde_json::to_value(JsonReport::new(None, &a, Locale::En)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["score"], 0);
    }
}

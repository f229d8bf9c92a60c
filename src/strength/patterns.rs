//! Pattern penalties: keyboard and alphabet runs, repeats.

/// Reference sequences scanned in 3-character windows, forwards and back.
const SEQUENCES: [&str; 5] = [
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
];

const WINDOW: usize = 3;
const SEQUENCE_PENALTY: u32 = 10;
const REPEAT_RUN_PENALTY: u32 = 15;
const REPEATED_UNIT_PENALTY: u32 = 10;

pub const MAX_PENALTY: u32 = 40;

/// Total penalty for `password`, in `[0, MAX_PENALTY]`.
pub fn pattern_penalty(password: &str) -> u32 {
    let mut penalty = sequence_penalty(&password.to_lowercase());

    if has_repeat_run(password) {
        penalty += REPEAT_RUN_PENALTY;
    }
    if is_repeated_unit(password) {
        penalty += REPEATED_UNIT_PENALTY;
    }

    penalty.min(MAX_PENALTY)
}

/// 10 points per reference window found, and 10 more if its reverse is found.
/// Each window counts once no matter how often it occurs.
fn sequence_penalty(lower: &str) -> u32 {
    let mut penalty = 0;

    for seq in SEQUENCES {
        for start in 0..=seq.len() - WINDOW {
            let window = &seq[start..start + WINDOW];
            if lower.contains(window) {
                penalty += SEQUENCE_PENALTY;
            }
            let reversed: String = window.chars().rev().collect();
            if lower.contains(reversed.as_str()) {
                penalty += SEQUENCE_PENALTY;
            }
        }
    }

    penalty
}

/// Same character three or more times in a row.
fn has_repeat_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Whole string is two or more copies of one prefix (`abab`, `777`).
fn is_repeated_unit(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let n = chars.len();

    (1..=n / 2)
        .filter(|unit| n.is_multiple_of(*unit))
        .any(|unit| chars.chunks(unit).all(|chunk| chunk == &chars[..unit]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_password_has_no_penalty() {
        assert_eq!(pattern_penalty("Tq7#vR2!mZ9&kP4$"), 0);
        assert_eq!(pattern_penalty(""), 0);
    }

    #[test]
    fn sequences_forward_and_reverse() {
        assert_eq!(pattern_penalty("xabcx"), 10);
        assert_eq!(pattern_penalty("xcbax"), 10);
        // abc, bcd
        assert_eq!(pattern_penalty("abcd"), 20);
        assert_eq!(pattern_penalty("ABC"), 10);
        assert_eq!(pattern_penalty("x321y"), 10);
    }

    #[test]
    fn window_counts_once() {
        assert_eq!(sequence_penalty("qwe.!.qwe"), 10);
    }

    #[test]
    fn keyboard_rows() {
        assert_eq!(sequence_penalty("asd"), 10);
        assert_eq!(sequence_penalty("mnb"), 10);
        // "qwertyuiop" has eight windows
        assert_eq!(sequence_penalty("qwertyuiop"), 80);
    }

    #[test]
    fn repeat_run() {
        assert!(has_repeat_run("xx111y"));
        assert!(!has_repeat_run("xx11y1"));
        // case-sensitive
        assert!(!has_repeat_run("aAa"));
    }

    #[test]
    fn repeated_unit() {
        assert!(is_repeated_unit("abab"));
        assert!(is_repeated_unit("121212"));
        assert!(is_repeated_unit("zz"));
        assert!(!is_repeated_unit("ababa"));
        assert!(!is_repeated_unit("a"));
        assert!(!is_repeated_unit(""));
    }

    #[test]
    fn all_repeated_characters() {
        // run +15, unit +10
        assert_eq!(pattern_penalty("aaaaaaaaaaaa"), 25);
    }

    #[test]
    fn penalty_is_capped() {
        assert_eq!(pattern_penalty("abcdefghij"), MAX_PENALTY);
        assert_eq!(pattern_penalty("qwertyqwerty"), MAX_PENALTY);
        for s in ["", "a", "zyxwvu", "111111", "Pa$$w0rd", "0987654321"] {
            assert!(pattern_penalty(s) <= MAX_PENALTY);
        }
    }
}

//! Effective pool size from the characters actually present.

const LOWER: u32 = 26;
const UPPER: u32 = 26;
const DIGIT: u32 = 10;
/// Anything outside `[A-Za-z0-9]`, non-ASCII included.
const OTHER: u32 = 32;

pub fn pool_size(password: &str) -> u32 {
    let (mut lower, mut upper, mut digit, mut other) = (false, false, false, false);

    for c in password.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            _ => other = true,
        }
    }

    [(lower, LOWER), (upper, UPPER), (digit, DIGIT), (other, OTHER)]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_present_categories() {
        assert_eq!(pool_size(""), 0);
        assert_eq!(pool_size("abc"), 26);
        assert_eq!(pool_size("aB"), 52);
        assert_eq!(pool_size("aB3"), 62);
        assert_eq!(pool_size("aB3!"), 94);
        assert_eq!(pool_size("1234"), 10);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(pool_size("пароль"), 32);
        assert_eq!(pool_size("ünï"), 58);
        assert_eq!(pool_size(" "), 32);
    }
}

//! Three-form plural selection (East Slavic grammar).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    /// 1, 21, 31, ...
    One,
    /// 2-4, 22-24, ...
    Few,
    /// 0, 5-20, 25-30, ...
    Many,
}

pub fn select(n: u64) -> PluralForm {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if (11..=19).contains(&mod100) {
        return PluralForm::Many;
    }
    match mod10 {
        1 => PluralForm::One,
        2..=4 => PluralForm::Few,
        _ => PluralForm::Many,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teens_are_many() {
        for n in [11, 12, 14, 19, 111, 1015] {
            assert_eq!(select(n), PluralForm::Many, "{n}");
        }
    }

    #[test]
    fn ones_and_fews() {
        assert_eq!(select(1), PluralForm::One);
        assert_eq!(select(21), PluralForm::One);
        assert_eq!(select(101), PluralForm::One);
        assert_eq!(select(2), PluralForm::Few);
        assert_eq!(select(34), PluralForm::Few);
        assert_eq!(select(0), PluralForm::Many);
        assert_eq!(select(5), PluralForm::Many);
        assert_eq!(select(20), PluralForm::Many);
    }
}

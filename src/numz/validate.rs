//! Digit-uniqueness checks.
//!
//! A number is valid when its base-10 rendering is exactly four characters
//! long and no character repeats. That rules out leading zeros (they shorten
//! the rendering), negatives (the sign is a character) and anything outside
//! `1000..=9999`.

pub const MIN_NUMBER: u32 = 1000;
pub const MAX_NUMBER: u32 = 9999;

/// Returns true when `number` has exactly four distinct decimal digits.
pub fn is_valid_number(number: i64) -> bool {
    let digits = number.to_string();
    if digits.len() != 4 {
        return false;
    }

    let mut seen = [false; 10];
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        if seen[d as usize] {
            return false;
        }
        seen[d as usize] = true;
    }
    true
}

/// Parses user-typed text into a valid number. Anything that is not an
/// integer with four distinct digits yields `None`.
pub fn parse_number(text: &str) -> Option<u32> {
    let number: i64 = text.trim().parse().ok()?;
    if !is_valid_number(number) {
        return None;
    }
    u32::try_from(number).ok()
}

/// Every valid number in ascending order.
pub fn all_valid_numbers() -> impl Iterator<Item = u32> {
    (MIN_NUMBER..=MAX_NUMBER).filter(|n| is_valid_number(i64::from(*n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_distinct_digits() {
        assert!(is_valid_number(1234));
        assert!(is_valid_number(9876));
        assert!(is_valid_number(1023));
        assert!(is_valid_number(7051));
    }

    #[test]
    fn rejects_repeated_digits() {
        assert!(!is_valid_number(1233));
        assert!(!is_valid_number(1122));
        assert!(!is_valid_number(1000));
        assert!(!is_valid_number(9999));
        assert!(!is_valid_number(1021));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_number(0));
        assert!(!is_valid_number(123));
        assert!(!is_valid_number(987));
        assert!(!is_valid_number(12345));
        assert!(!is_valid_number(i64::MAX));
    }

    #[test]
    fn rejects_negative_numbers() {
        // "-123" is four characters, all distinct.
        assert!(!is_valid_number(-123));
        assert!(!is_valid_number(-1234));
    }

    #[test]
    fn parses_user_input() {
        assert_eq!(parse_number("5031"), Some(5031));
        assert_eq!(parse_number(" 5031\n"), Some(5031));
        assert_eq!(parse_number("0123"), None);
        assert_eq!(parse_number("12345"), None);
        assert_eq!(parse_number("abc123"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-123"), None);
        assert_eq!(parse_number("99999999999999999999999"), None);
    }

    #[test]
    fn valid_space_has_4536_numbers() {
        assert_eq!(all_valid_numbers().count(), 9 * 9 * 8 * 7);
        assert!(all_valid_numbers().all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(&n)));
    }

    #[test]
    fn every_valid_number_has_distinct_digits() {
        for n in all_valid_numbers() {
            let s = n.to_string();
            let mut chars: Vec<char> = s.chars().collect();
            chars.sort_unstable();
            chars.dedup();
            assert_eq!(chars.len(), 4, "{} has repeated digits", n);
        }
    }
}

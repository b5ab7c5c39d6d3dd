//! PIN format validation

/// Minimum number of digits in a PIN
pub const MIN_PIN_LEN: usize = 4;

/// Check that `candidate` is at least four characters, all ASCII digits
///
/// There is no upper bound: `"123456"` is accepted.
pub fn is_well_formed(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_PIN_LEN && candidate.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_pin("0000")]
    #[case::four_digits("1234")]
    #[case::five_digits("12345")]
    #[case::long("98765432109876543210")]
    fn test_accepts_digit_strings(#[case] pin: &str) {
        assert!(is_well_formed(pin));
    }

    #[rstest]
    #[case::empty("")]
    #[case::three_digits("123")]
    #[case::letter("12a4")]
    #[case::sign("-123")]
    #[case::space("12 34")]
    #[case::decimal_point("12.34")]
    #[case::non_ascii_digits("١٢٣٤")]
    fn test_rejects_malformed(#[case] pin: &str) {
        assert!(!is_well_formed(pin));
    }

    #[test]
    fn test_every_digit_string_from_length_four() {
        for len in 0..10 {
            let pin = "7".repeat(len);
            assert_eq!(is_well_formed(&pin), len >= MIN_PIN_LEN, "length {}", len);
        }
    }
}

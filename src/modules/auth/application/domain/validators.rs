//! Field format checks shared by the validated request types.

use regex::Regex;
use std::sync::OnceLock;

static TWELVE_DIGITS: OnceLock<Regex> = OnceLock::new();
static TEN_DIGITS: OnceLock<Regex> = OnceLock::new();
static SIX_DIGITS: OnceLock<Regex> = OnceLock::new();

fn twelve_digits() -> &'static Regex {
    TWELVE_DIGITS.get_or_init(|| Regex::new(r"^[0-9]{12}$").expect("valid regex"))
}

fn ten_digits() -> &'static Regex {
    TEN_DIGITS.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"))
}

fn six_digits() -> &'static Regex {
    SIX_DIGITS.get_or_init(|| Regex::new(r"^[0-9]{6}$").expect("valid regex"))
}

pub fn is_valid_id_number(value: &str) -> bool {
    twelve_digits().is_match(value)
}

pub fn is_valid_mobile_number(value: &str) -> bool {
    ten_digits().is_match(value)
}

pub fn is_valid_pincode(value: &str) -> bool {
    six_digits().is_match(value)
}

pub fn is_valid_reset_code(value: &str) -> bool {
    six_digits().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_number_requires_exactly_twelve_digits() {
        assert!(is_valid_id_number("123456789012"));
        assert!(!is_valid_id_number("12345678901"));
        assert!(!is_valid_id_number("1234567890123"));
        assert!(!is_valid_id_number("12345678901a"));
    }

    #[test]
    fn mobile_number_requires_exactly_ten_digits() {
        assert!(is_valid_mobile_number("9876543210"));
        assert!(!is_valid_mobile_number("987654321"));
        assert!(!is_valid_mobile_number("98765432100"));
    }

    #[test]
    fn pincode_requires_exactly_six_digits() {
        assert!(is_valid_pincode("560001"));
        assert!(!is_valid_pincode("56001"));
        assert!(!is_valid_pincode("5600010"));
        assert!(!is_valid_pincode("56000a"));
    }

    #[test]
    fn non_ascii_digits_are_rejected_in_id_number() {
        // Devanagari digits must not slip through the ASCII-only classes
        assert!(!is_valid_id_number("१२३४५६७८९०१२"));
    }
}

//! Standalone structural rules for the numeric and formatted fields
//!
//! Every rule trims surrounding whitespace and answers `false` for anything
//! malformed, empty or out of range.

use crate::clock::{Clock, SystemClock};
use once_cell::sync::Lazy;
use regex::Regex;

/// Oldest plausible age, in years, for the birth-year rule
pub const MAX_AGE_YEARS: i64 = 120;

/// Largest civic (house) number accepted
pub const MAX_CIVIC_NUMBER: u32 = 99_999;

/// Digit count bounds of a phone number, separators excluded
pub const PHONE_DIGITS: (usize, usize) = (9, 13);

/// Accepted gender tokens, compared case-insensitively
pub const GENDER_TOKENS: &[&str] = &["m", "f", "male", "female"];

// Swiss NAP: four digits, 1000-9999
static POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{3}$").expect("postal code pattern"));

// Digit groups joined by single separators, optional international prefix
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]+(?:[ ./-][0-9]+)*$").expect("phone pattern"));

fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Day of month: 1 to 31
pub fn day_rule(value: &str) -> bool {
    parse_integer(value).map_or(false, |day| (1..=31).contains(&day))
}

/// Birth year against the wall clock, read on every call
pub fn year_rule(value: &str) -> bool {
    year_rule_at(value, SystemClock.current_year())
}

/// Birth year: later than `current_year - 120`, not after `current_year`
///
/// # Examples
/// ```
/// use insert_form_validation::year_rule_at;
/// assert!(year_rule_at("2019", 2019));
/// assert!(year_rule_at("1900", 2019));
/// assert!(!year_rule_at("1899", 2019));
/// assert!(!year_rule_at("2020", 2019));
/// ```
pub fn year_rule_at(value: &str, current_year: i32) -> bool {
    let current = i64::from(current_year);
    parse_integer(value).map_or(false, |year| year > current - MAX_AGE_YEARS && year <= current)
}

/// Civic number: digits only, 1 to 99999
pub fn civic_number_rule(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    value
        .parse::<u32>()
        .map_or(false, |n| (1..=MAX_CIVIC_NUMBER).contains(&n))
}

/// Swiss postal code (NAP): exactly four digits, no leading zero
pub fn postal_code_rule(value: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(value.trim())
}

/// Phone number: 9 to 13 digits, optionally grouped by ` `, `-`, `.` or `/`
/// and prefixed with `+`
pub fn phone_rule(value: &str) -> bool {
    let value = value.trim();
    if !PHONE_REGEX.is_match(value) {
        return false;
    }
    let digits = value.bytes().filter(u8::is_ascii_digit).count();
    digits >= PHONE_DIGITS.0 && digits <= PHONE_DIGITS.1
}

/// Gender: one of [`GENDER_TOKENS`]
pub fn gender_rule(value: &str) -> bool {
    let value = value.trim();
    GENDER_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_rule() {
        assert!(day_rule("1"));
        assert!(day_rule("15"));
        assert!(day_rule("31"));
        assert!(day_rule(" 7 "));

        assert!(!day_rule("0"));
        assert!(!day_rule("32"));
        assert!(!day_rule("-1"));
        assert!(!day_rule(""));
        assert!(!day_rule("tenth"));
        assert!(!day_rule("1.5"));
    }

    #[test]
    fn test_year_rule_bounds() {
        assert!(year_rule_at("2019", 2019));
        assert!(year_rule_at("1900", 2019));
        assert!(!year_rule_at("1899", 2019));
        assert!(!year_rule_at("2020", 2019));
        assert!(!year_rule_at("", 2019));
        assert!(!year_rule_at("19xx", 2019));
    }

    #[test]
    fn test_year_rule_moves_with_the_clock() {
        assert!(year_rule_at("1906", 2025));
        assert!(!year_rule_at("1906", 2026));
    }

    #[test]
    fn test_year_rule_uses_current_year() {
        let now = SystemClock.current_year();
        assert!(year_rule(&now.to_string()));
        assert!(!year_rule(&(now + 1).to_string()));
    }

    #[test]
    fn test_civic_number_rule() {
        assert!(civic_number_rule("1"));
        assert!(civic_number_rule("42"));
        assert!(civic_number_rule("99999"));

        assert!(!civic_number_rule("0"));
        assert!(!civic_number_rule("100000"));
        assert!(!civic_number_rule("-3"));
        assert!(!civic_number_rule("+3"));
        assert!(!civic_number_rule("12a"));
        assert!(!civic_number_rule(""));
    }

    #[test]
    fn test_postal_code_rule() {
        assert!(postal_code_rule("6900"));
        assert!(postal_code_rule("1000"));
        assert!(postal_code_rule("9658"));

        assert!(!postal_code_rule("0900"));
        assert!(!postal_code_rule("690"));
        assert!(!postal_code_rule("69000"));
        assert!(!postal_code_rule("CH-6900"));
        assert!(!postal_code_rule(""));
    }

    #[test]
    fn test_phone_rule() {
        assert!(phone_rule("0911234567"));
        assert!(phone_rule("+41 91 123 45 67"));
        assert!(phone_rule("091/123.45.67"));
        assert!(phone_rule("079-123-45-67"));

        assert!(!phone_rule("12345678"));
        assert!(!phone_rule("+41 91 123 45 67 89 01"));
        assert!(!phone_rule("091 CALL ME"));
        assert!(!phone_rule("091  1234567"));
        assert!(!phone_rule("-0911234567"));
        assert!(!phone_rule(""));
    }

    #[test]
    fn test_gender_rule() {
        assert!(gender_rule("male"));
        assert!(gender_rule("Female"));
        assert!(gender_rule("M"));
        assert!(gender_rule("f"));

        assert!(!gender_rule("unknown123"));
        assert!(!gender_rule("ma"));
        assert!(!gender_rule(""));
    }
}

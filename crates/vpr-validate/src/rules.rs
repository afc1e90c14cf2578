//! Field-level validation rules.
//!
//! Each rule is an independent predicate (or fallible parse) over one trimmed
//! field value. The patterns are compiled once and shared safely across
//! worker threads.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// `local@domain.suffix` with no whitespace and no second `@` on either side.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// `DDD-DDD-DDDD`.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone regex"));

/// `LLLDDD` or `DDDLLL`.
static LICENSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]{3}\d{3}|\d{3}[A-Za-z]{3})$").expect("license regex"));

const MIN_CAR_YEAR: i32 = 1900;
const MAX_CAR_YEAR: i32 = 2025;

/// Purchases before this year are rejected.
const MIN_PURCHASE_YEAR: i32 = 2000;

/// Input date format, e.g. `01/15/2021`.
const DATE_FORMAT: &str = "%m/%d/%Y";

pub fn parse_customer_id(value: &str) -> Option<i32> {
    value.parse::<i32>().ok().filter(|id| *id > 0)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Postal codes stay text so leading zeros survive. Codes shorter than five
/// digits are accepted as-is, not zero-padded.
pub fn is_valid_postal_code(value: &str) -> bool {
    !value.is_empty() && value.len() <= 5 && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse_car_year(value: &str) -> Option<i32> {
    value
        .parse::<i32>()
        .ok()
        .filter(|year| (MIN_CAR_YEAR..=MAX_CAR_YEAR).contains(year))
}

pub fn is_valid_license_plate(value: &str) -> bool {
    LICENSE_REGEX.is_match(value)
}

/// Parse `MM/DD/YYYY` and enforce the [2000-01-01, `today`] window.
pub fn parse_purchase_date(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= MIN_PURCHASE_YEAR && *date <= today)
}

pub fn parse_purchase_price(value: &str) -> Option<BigDecimal> {
    value.parse::<BigDecimal>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[test]
    fn customer_id_must_be_positive() {
        assert_eq!(parse_customer_id("17"), Some(17));
        assert_eq!(parse_customer_id("0"), None);
        assert_eq!(parse_customer_id("-3"), None);
        assert_eq!(parse_customer_id("abc"), None);
        assert_eq!(parse_customer_id(""), None);
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@@example.com"));
        assert!(!is_valid_email("a@example"));
    }

    #[test]
    fn phone_shape() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(!is_valid_phone("5551234567"));
        assert!(!is_valid_phone("555-123-456"));
        assert!(!is_valid_phone("55-1234-4567"));
        assert!(!is_valid_phone("555-123-45678"));
    }

    #[test]
    fn postal_code_digits_up_to_five() {
        assert!(is_valid_postal_code("30301"));
        assert!(is_valid_postal_code("04330"));
        // Shorter codes are accepted as-is.
        assert!(is_valid_postal_code("301"));
        assert!(!is_valid_postal_code("303011"));
        assert!(!is_valid_postal_code("3030A"));
        assert!(!is_valid_postal_code("-3030"));
        assert!(!is_valid_postal_code(""));
    }

    #[test]
    fn car_year_bounds_inclusive() {
        assert_eq!(parse_car_year("1900"), Some(1900));
        assert_eq!(parse_car_year("2025"), Some(2025));
        assert_eq!(parse_car_year("1899"), None);
        assert_eq!(parse_car_year("2026"), None);
        assert_eq!(parse_car_year("new"), None);
    }

    #[test]
    fn license_plate_shapes() {
        assert!(is_valid_license_plate("ABC123"));
        assert!(is_valid_license_plate("abc123"));
        assert!(is_valid_license_plate("123ABC"));
        assert!(!is_valid_license_plate("AB1234"));
        assert!(!is_valid_license_plate("ABCD12"));
        assert!(!is_valid_license_plate("ABC12"));
        assert!(!is_valid_license_plate("123456"));
    }

    #[test]
    fn purchase_date_window() {
        let today = today();
        assert_eq!(
            parse_purchase_date("01/15/2021", today),
            NaiveDate::from_ymd_opt(2021, 1, 15)
        );
        // Lower bound is the year, not a specific day.
        assert!(parse_purchase_date("01/01/2000", today).is_some());
        assert!(parse_purchase_date("12/31/1999", today).is_none());
        // Upper bound is "today" itself, inclusive.
        assert!(parse_purchase_date("07/01/2025", today).is_some());
        assert!(parse_purchase_date("07/02/2025", today).is_none());
        // Wrong format.
        assert!(parse_purchase_date("2021-01-15", today).is_none());
        assert!(parse_purchase_date("13/01/2021", today).is_none());
        assert!(parse_purchase_date("02/30/2021", today).is_none());
    }

    #[test]
    fn purchase_price_any_sign_and_precision() {
        assert!(parse_purchase_price("24999.99").is_some());
        assert!(parse_purchase_price("-1200").is_some());
        assert!(parse_purchase_price("0.0001").is_some());
        assert!(parse_purchase_price("12,000").is_none());
        assert!(parse_purchase_price("free").is_none());
        assert!(parse_purchase_price("").is_none());
    }
}

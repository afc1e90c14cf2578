//! Scenario and boundary tests for row validation.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use vpr_validate::RowValidator;

fn fields(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_string()).collect()
}

fn valid_fields() -> Vec<String> {
    fields(&[
        "1",
        "John",
        "Doe",
        "john.doe@example.com",
        "555-123-4567",
        "1 Main St",
        "Atlanta",
        "GA",
        "30301",
        "Toyota",
        "Corolla",
        "2020",
        "ABC123",
        "01/15/2021",
        "24999.99",
    ])
}

fn validator() -> RowValidator {
    RowValidator::new().with_today(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
}

#[test]
fn fully_valid_row_is_accepted_with_exact_attributes() {
    let record = validator().validate(&valid_fields()).unwrap();

    assert_eq!(record.customer_id, 1);
    assert_eq!(record.first_name, "John");
    assert_eq!(record.last_name, "Doe");
    assert_eq!(record.email, "john.doe@example.com");
    assert_eq!(record.phone_number, "555-123-4567");
    assert_eq!(record.address, "1 Main St");
    assert_eq!(record.city, "Atlanta");
    assert_eq!(record.state, "GA");
    assert_eq!(record.postal_code, "30301");
    assert_eq!(record.car_make, "Toyota");
    assert_eq!(record.car_model, "Corolla");
    assert_eq!(record.car_year, 2020);
    assert_eq!(record.license_plate, "ABC123");
    assert_eq!(
        record.purchase_date,
        NaiveDate::from_ymd_opt(2021, 1, 15).unwrap()
    );
    assert_eq!(record.purchase_price, "24999.99".parse::<BigDecimal>().unwrap());
}

#[test]
fn missing_name_and_bad_email_both_reported() {
    let mut bad = valid_fields();
    bad[0] = "2".to_string();
    bad[1] = String::new();
    bad[3] = "bad-email".to_string();

    let reasons = validator().validate(&bad).unwrap_err();
    assert!(reasons.len() >= 2);
    assert!(reasons.contains(&"first_name is required.".to_string()));
    assert!(reasons.contains(&"email format is invalid.".to_string()));
}

#[test]
fn car_year_boundaries() {
    for (year, accept) in [("1900", true), ("2025", true), ("1899", false), ("2026", false)] {
        let mut row = valid_fields();
        row[11] = year.to_string();
        let result = validator().validate(&row);
        assert_eq!(result.is_ok(), accept, "car_year {year}");
        if !accept {
            assert!(
                result
                    .unwrap_err()
                    .contains(&"car_year must be between 1900 and 2025.".to_string())
            );
        }
    }
}

#[test]
fn postal_code_boundaries() {
    // Six digits: too long.
    let mut row = valid_fields();
    row[8] = "303011".to_string();
    assert!(validator().validate(&row).is_err());

    // Five characters with a letter: not digits-only.
    row[8] = "3030A".to_string();
    let reasons = validator().validate(&row).unwrap_err();
    assert_eq!(
        reasons,
        vec!["postal_code must be digits only, max length 5.".to_string()]
    );

    // Short codes stay accepted, leading zeros preserved.
    row[8] = "0301".to_string();
    let record = validator().validate(&row).unwrap();
    assert_eq!(record.postal_code, "0301");
}

#[test]
fn purchase_date_respects_the_injected_today() {
    let v = validator();

    let mut row = valid_fields();
    row[13] = "07/01/2025".to_string();
    assert!(v.validate(&row).is_ok());

    row[13] = "07/02/2025".to_string();
    let reasons = v.validate(&row).unwrap_err();
    assert_eq!(
        reasons,
        vec!["purchase_date must be MM/DD/YYYY and between 2000 and today.".to_string()]
    );

    row[13] = "12/31/1999".to_string();
    assert!(v.validate(&row).is_err());
}

#[test]
fn state_is_case_insensitive() {
    let mut row = valid_fields();
    row[7] = "ga".to_string();
    let record = validator().validate(&row).unwrap();
    // The value is stored as given, not upcased.
    assert_eq!(record.state, "ga");
}

#[test]
fn license_plate_accepts_both_orders() {
    let mut row = valid_fields();
    row[12] = "123ABC".to_string();
    assert!(validator().validate(&row).is_ok());

    row[12] = "12ABC3".to_string();
    let reasons = validator().validate(&row).unwrap_err();
    assert_eq!(
        reasons,
        vec!["license_plate must be ABC123 or 123ABC format.".to_string()]
    );
}

#[test]
fn a_row_can_fail_every_rule_at_once() {
    let row = fields(&[
        "0", "", "", "x", "y", "", "", "XX", "abcdef", "", "", "1800", "NOPE", "never", "n/a",
    ]);
    let reasons = validator().validate(&row).unwrap_err();
    assert_eq!(reasons.len(), 15);
}

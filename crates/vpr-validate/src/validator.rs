use chrono::{Local, NaiveDate};

use vpr_model::{FIELD_COUNT, PurchaseRecord, is_us_state};

use crate::rules;

/// Row-level validator: applies every field rule and accumulates all
/// violations before rejecting a row.
///
/// Stateless apart from the injected `today` used as the purchase-date upper
/// bound, so one instance is shared safely across worker threads. Validation
/// is a pure function of the fields; diagnostic emission is the runner's
/// concern.
#[derive(Debug, Clone)]
pub struct RowValidator {
    today: NaiveDate,
}

impl RowValidator {
    /// Validator bounded by the local wall-clock date.
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Pin the purchase-date upper bound, keeping outcomes reproducible
    /// across runs and in tests.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Validate one row's fields.
    ///
    /// A row with the wrong field count fails structurally with a single
    /// diagnostic and no per-field evaluation. Otherwise every rule runs -
    /// a row can fail for several reasons at once and each failing rule
    /// contributes its own message.
    pub fn validate(&self, fields: &[String]) -> Result<PurchaseRecord, Vec<String>> {
        if fields.len() != FIELD_COUNT {
            return Err(vec!["Invalid number of fields (expected 15).".to_string()]);
        }

        let row = RowFields::new(fields);
        let mut reasons = Vec::new();

        let customer_id = rules::parse_customer_id(row.customer_id);
        if customer_id.is_none() {
            reasons.push("customer_id must be a positive integer.".to_string());
        }
        if row.first_name.is_empty() {
            reasons.push("first_name is required.".to_string());
        }
        if row.last_name.is_empty() {
            reasons.push("last_name is required.".to_string());
        }
        if !rules::is_valid_email(row.email) {
            reasons.push("email format is invalid.".to_string());
        }
        if !rules::is_valid_phone(row.phone_number) {
            reasons.push("phone_number must be XXX-XXX-XXXX.".to_string());
        }
        if row.address.is_empty() {
            reasons.push("address is required.".to_string());
        }
        if row.city.is_empty() {
            reasons.push("city is required.".to_string());
        }
        if !is_us_state(row.state) {
            reasons.push("state must be a valid two-letter US abbreviation.".to_string());
        }
        if !rules::is_valid_postal_code(row.postal_code) {
            reasons.push("postal_code must be digits only, max length 5.".to_string());
        }
        if row.car_make.is_empty() {
            reasons.push("car_make is required.".to_string());
        }
        if row.car_model.is_empty() {
            reasons.push("car_model is required.".to_string());
        }
        let car_year = rules::parse_car_year(row.car_year);
        if car_year.is_none() {
            reasons.push("car_year must be between 1900 and 2025.".to_string());
        }
        if !rules::is_valid_license_plate(row.license_plate) {
            reasons.push("license_plate must be ABC123 or 123ABC format.".to_string());
        }
        let purchase_date = rules::parse_purchase_date(row.purchase_date, self.today);
        if purchase_date.is_none() {
            reasons.push("purchase_date must be MM/DD/YYYY and between 2000 and today.".to_string());
        }
        let purchase_price = rules::parse_purchase_price(row.purchase_price);
        if purchase_price.is_none() {
            reasons.push("purchase_price must be a valid decimal number.".to_string());
        }

        if !reasons.is_empty() {
            return Err(reasons);
        }

        // Every parse above succeeded once no rule pushed a reason.
        let (Some(customer_id), Some(car_year), Some(purchase_date), Some(purchase_price)) =
            (customer_id, car_year, purchase_date, purchase_price)
        else {
            return Err(reasons);
        };

        Ok(PurchaseRecord {
            customer_id,
            first_name: row.first_name.to_string(),
            last_name: row.last_name.to_string(),
            email: row.email.to_string(),
            phone_number: row.phone_number.to_string(),
            address: row.address.to_string(),
            city: row.city.to_string(),
            state: row.state.to_string(),
            postal_code: row.postal_code.to_string(),
            car_make: row.car_make.to_string(),
            car_model: row.car_model.to_string(),
            car_year,
            license_plate: row.license_plate.to_string(),
            purchase_date,
            purchase_price,
        })
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Named view over the fifteen positional fields of one row, trimmed.
///
/// The only place positional indexing happens; everything downstream works
/// with field names. Order must match `vpr_model::FIELD_NAMES`.
struct RowFields<'a> {
    customer_id: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone_number: &'a str,
    address: &'a str,
    city: &'a str,
    state: &'a str,
    postal_code: &'a str,
    car_make: &'a str,
    car_model: &'a str,
    car_year: &'a str,
    license_plate: &'a str,
    purchase_date: &'a str,
    purchase_price: &'a str,
}

impl<'a> RowFields<'a> {
    /// Callers must have checked `fields.len() == FIELD_COUNT`.
    fn new(fields: &'a [String]) -> Self {
        Self {
            customer_id: fields[0].trim(),
            first_name: fields[1].trim(),
            last_name: fields[2].trim(),
            email: fields[3].trim(),
            phone_number: fields[4].trim(),
            address: fields[5].trim(),
            city: fields[6].trim(),
            state: fields[7].trim(),
            postal_code: fields[8].trim(),
            car_make: fields[9].trim(),
            car_model: fields[10].trim(),
            car_year: fields[11].trim(),
            license_plate: fields[12].trim(),
            purchase_date: fields[13].trim(),
            purchase_price: fields[14].trim(),
        }
    }
}

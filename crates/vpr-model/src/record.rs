use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;

/// One accepted customer/vehicle-purchase record.
///
/// Constructed only by the validator once every field rule has passed;
/// immutable afterwards. A record with a failing field is not representable.
/// The field names double as the serialized document keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseRecord {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Kept as text so leading zeros survive.
    pub postal_code: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    pub license_plate: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: BigDecimal,
}

/// One physical data line, split into raw fields.
///
/// `row_number` is 1-based and counts the header as row 1, so the first data
/// row is row 2 and numbering stays aligned with the file's physical lines.
/// A blank or whitespace-only line carries an empty `fields` vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(row_number: u64, fields: Vec<String>) -> Self {
        Self { row_number, fields }
    }

    /// Whether this row came from a blank line and should be skipped
    /// rather than validated.
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty()
    }
}

//! The positional field schema shared by the splitter, validator,
//! generator, and serializer.

/// Number of positional fields every data row must carry.
pub const FIELD_COUNT: usize = 15;

/// Ordered field names, matching both the input header and the keys of the
/// serialized output document.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "customer_id",
    "first_name",
    "last_name",
    "email",
    "phone_number",
    "address",
    "city",
    "state",
    "postal_code",
    "car_make",
    "car_model",
    "car_year",
    "license_plate",
    "purchase_date",
    "purchase_price",
];

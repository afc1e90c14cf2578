//! Row validation for vehicle-purchase records.
//!
//! A row is accepted only when all fifteen field rules pass at once:
//!
//! - `customer_id`: integer, > 0
//! - `first_name`, `last_name`, `address`, `city`, `car_make`, `car_model`:
//!   non-empty after trimming
//! - `email`: `local@domain.suffix`, no whitespace or second `@`
//! - `phone_number`: `DDD-DDD-DDDD`
//! - `state`: two-letter US-state abbreviation, case-insensitive
//! - `postal_code`: 1-5 ASCII digits, leading zeros preserved
//! - `car_year`: integer in [1900, 2025]
//! - `license_plate`: `LLLDDD` or `DDDLLL`
//! - `purchase_date`: `MM/DD/YYYY`, year >= 2000, not after "today"
//! - `purchase_price`: decimal number, any sign and precision
//!
//! Rules are evaluated independently - a row can fail for several reasons at
//! once, and every failing rule contributes its own diagnostic. The runner
//! module executes validation over a whole row set, either in input order on
//! one thread or fanned out over a worker pool; both strategies accept the
//! same multiset of records.

mod rules;
mod runner;
mod validator;

pub use runner::{RunReport, RunnerOptions, Strategy, ValidationRun, run};
pub use validator::RowValidator;

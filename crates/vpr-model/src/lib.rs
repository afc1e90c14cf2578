//! Core data model for the vehicle-purchase record pipeline.
//!
//! This crate defines the two row representations that flow through the
//! pipeline (raw split rows and fully validated records), the positional
//! field schema they share, and the US-state vocabulary used by the
//! state rule.

mod error;
mod record;
mod schema;
mod states;

pub use error::{IngestError, Result};
pub use record::{PurchaseRecord, RawRow};
pub use schema::{FIELD_COUNT, FIELD_NAMES};
pub use states::is_us_state;

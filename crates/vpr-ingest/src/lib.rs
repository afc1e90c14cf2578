//! Input ingestion for the vehicle-purchase record pipeline.
//!
//! Splits a line-oriented, comma-separated export into [`vpr_model::RawRow`]s.
//! The splitter is deliberately naive: no quoting or escape handling, because
//! the input format never embeds separators. The first physical line is a
//! header; it is skipped but still counts toward row numbering so diagnostics
//! can point at file lines.

mod reader;
mod splitter;

pub use reader::read_rows;
pub use splitter::{LineSplitter, split_line};

//! CLI library components for the vehicle-purchase record pipeline.

pub mod cli;
pub mod commands;
pub mod generate;
pub mod logging;
pub mod summary;
pub mod types;
